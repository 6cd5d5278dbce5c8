//! Error types for the totp crate

use thiserror::Error;

/// Result type alias for totp operations
pub type Result<T> = std::result::Result<T, TotpError>;

/// Errors surfaced while building a TOTP generator or its profile.
///
/// Code generation itself never fails; every variant here is raised at
/// construction time and is correctable by the caller.
#[derive(Error, Debug)]
pub enum TotpError {
    /// Encoded secret is shorter than the minimum accepted length
    #[error("secret must be equal to or longer than 16 characters, got {length}")]
    InvalidSecretLength { length: usize },

    /// Secret is not valid padded base32
    #[error("secret is not a valid base32 encoding: {0}")]
    DecodeError(#[from] data_encoding::DecodeError),

    /// Period must be a positive number of seconds
    #[error("period must be greater than zero, got {0}")]
    InvalidPeriod(i64),

    /// Digit count must be between 1 and 9
    #[error("digit count must be between 1 and 9, got {0}")]
    InvalidDigits(u32),

    /// Profile text could not be parsed
    #[error("invalid totp profile: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for TotpError {
    fn from(err: toml::de::Error) -> Self {
        TotpError::InvalidConfig(err.to_string())
    }
}
