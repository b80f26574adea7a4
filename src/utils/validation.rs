use crate::utils::error::{KeyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(KeyError::ConfigError {
        field: field_name.to_string(),
        reason: format!(
            "unsupported value '{}', expected one of: {}",
            value,
            allowed.join(", ")
        ),
    })
}

/// Strict check for configured account numbers: stray characters are
/// rejected, never stripped.
pub fn validate_account_digits(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KeyError::EmptyInput);
    }
    if let Some((position, character)) = value
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(KeyError::InvalidCharacter {
            character,
            position,
        });
    }
    if value.len() > crate::core::checksum::ACCOUNT_WIDTH {
        return Err(KeyError::TooManyDigits { count: value.len() });
    }
    Ok(())
}
