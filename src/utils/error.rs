use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("input contains no digits")]
    EmptyInput,

    #[error("account number has {count} digits, the maximum is 10")]
    TooManyDigits { count: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("configuration error: {field}: {reason}")]
    ConfigError { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeyError>;

impl KeyError {
    /// Input-shaped errors are expected conditions: the caller shows a
    /// hint and withholds the result instead of aborting.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            KeyError::EmptyInput
                | KeyError::TooManyDigits { .. }
                | KeyError::InvalidCharacter { .. }
        )
    }
}
