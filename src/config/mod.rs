#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::app::console::OutputFormat;
use crate::app::labels::Locale;

/// Values accepted by the locale setting.
pub const LOCALES: &[&str] = &["fr", "ar", "en"];
/// Values accepted by the format setting.
pub const FORMATS: &[&str] = &["text", "json"];

/// Runtime settings after merging every configuration source.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub locale: Locale,
    pub format: OutputFormat,
    pub account: Option<String>,
}

#[cfg(feature = "cli")]
impl Settings {
    /// CLI flags win over the configuration file, the file over the
    /// defaults (fr, text, no account).
    pub fn resolve(
        cli: &cli::CliConfig,
        file: Option<&file::FileConfig>,
    ) -> crate::utils::error::Result<Self> {
        let locale = match cli
            .locale
            .as_deref()
            .or_else(|| file.and_then(file::FileConfig::locale))
        {
            Some(value) => value.parse()?,
            None => Locale::default(),
        };
        let format = match cli
            .format
            .as_deref()
            .or_else(|| file.and_then(file::FileConfig::format))
        {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let account = cli
            .account
            .clone()
            .or_else(|| file.and_then(|f| f.default_account().map(str::to_string)));

        Ok(Settings {
            locale,
            format,
            account,
        })
    }
}
