use serde::{Deserialize, Serialize};

use crate::error::{Result, TotpError};

pub const DEFAULT_PERIOD: i64 = 30;
pub const DEFAULT_DIGITS: u32 = 6;
pub const MAX_DIGITS: u32 = 9;

/// Step length and output width of a TOTP profile.
///
/// The public entry points always use the default 30 second, 6 digit
/// profile. Other profiles exist so the pipeline can be exercised with
/// alternate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TotpConfig {
    pub period_seconds: i64,
    pub digit_count: u32,
}

impl Default for TotpConfig {
    fn default() -> Self {
        TotpConfig {
            period_seconds: DEFAULT_PERIOD,
            digit_count: DEFAULT_DIGITS,
        }
    }
}

impl TotpConfig {
    pub fn new(period_seconds: i64, digit_count: u32) -> Result<Self> {
        let config = TotpConfig {
            period_seconds,
            digit_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a profile such as `period_seconds = 60`. Missing keys keep
    /// their defaults.
    ///
    /// Profiles are only ever supplied by library callers as text. The
    /// `totp` binary reads no profile file and always runs with the default.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: TotpConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Serialization failure")
    }

    pub fn validate(&self) -> Result<()> {
        if self.period_seconds <= 0 {
            return Err(TotpError::InvalidPeriod(self.period_seconds));
        }
        if self.digit_count == 0 || self.digit_count > MAX_DIGITS {
            return Err(TotpError::InvalidDigits(self.digit_count));
        }
        Ok(())
    }
}
