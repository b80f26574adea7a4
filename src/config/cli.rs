use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::{FORMATS, LOCALES};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ccp-rip")]
#[command(about = "Check key calculator for Algérie Poste CCP account numbers")]
pub struct CliConfig {
    #[arg(help = "Account number, up to 10 digits")]
    pub account: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Display locale: fr, ar or en")]
    pub locale: Option<String>,

    #[arg(long, help = "Output format: text or json")]
    pub format: Option<String>,

    #[arg(long, help = "Read account numbers line by line from stdin")]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    // The account argument is not checked here: it goes through the
    // same defensive normalization as interactive input.
    fn validate(&self) -> Result<()> {
        if let Some(locale) = &self.locale {
            validation::validate_choice("locale", locale, LOCALES)?;
        }
        if let Some(format) = &self.format {
            validation::validate_choice("format", format, FORMATS)?;
        }
        Ok(())
    }
}
