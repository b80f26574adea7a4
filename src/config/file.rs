use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{FORMATS, LOCALES};
use crate::utils::error::{KeyError, Result};
use crate::utils::validation::{self, Validate};

/// Optional TOML configuration file: display preferences plus a default
/// account number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub display: Option<DisplaySection>,
    pub account: Option<AccountSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub locale: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSection {
    pub default: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KeyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| KeyError::ConfigError {
            field: "toml".to_string(),
            reason: format!("parse error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with the environment value;
    /// unset variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn locale(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.locale.as_deref())
    }

    pub fn format(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.format.as_deref())
    }

    pub fn default_account(&self) -> Option<&str> {
        self.account.as_ref().and_then(|a| a.default.as_deref())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(locale) = self.locale() {
            validation::validate_choice("display.locale", locale, LOCALES)?;
        }
        if let Some(format) = self.format() {
            validation::validate_choice("display.format", format, FORMATS)?;
        }
        if let Some(account) = self.default_account() {
            validation::validate_account_digits(account)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[display]
locale = "ar"
format = "json"

[account]
default = "20392294"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.locale(), Some("ar"));
        assert_eq!(config.format(), Some("json"));
        assert_eq!(config.default_account(), Some("20392294"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config.locale(), None);
        assert_eq!(config.default_account(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CCP_ACCOUNT", "20392294");

        let toml_content = r#"
[account]
default = "${TEST_CCP_ACCOUNT}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_account(), Some("20392294"));
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let toml_content = r#"
[account]
default = "${CCP_RIP_UNSET_VAR}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_account(), Some("${CCP_RIP_UNSET_VAR}"));
        // And the verbatim placeholder fails strict validation.
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_locale = FileConfig::from_toml_str("[display]\nlocale = \"de\"\n").unwrap();
        assert!(bad_locale.validate().is_err());

        let bad_format = FileConfig::from_toml_str("[display]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_account =
            FileConfig::from_toml_str("[account]\ndefault = \"123-456\"\n").unwrap();
        assert!(matches!(
            bad_account.validate(),
            Err(KeyError::InvalidCharacter { .. })
        ));

        let long_account =
            FileConfig::from_toml_str("[account]\ndefault = \"12345678901\"\n").unwrap();
        assert!(matches!(
            long_account.validate(),
            Err(KeyError::TooManyDigits { count: 11 })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlocale = \"en\"").unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.locale(), Some("en"));

        assert!(matches!(
            FileConfig::from_file("/nonexistent/ccp-rip.toml"),
            Err(KeyError::IoError(_))
        ));
    }
}
