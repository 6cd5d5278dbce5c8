use std::fmt;
use std::time::SystemTime;

use crate::config::TotpConfig;
use crate::counter::counter_from_time;
use crate::error::Result;
use crate::hotp::{chunk_from_hash, code_from_chunk, format_code, generate_hash};
use crate::utils::decode_secret;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// uses HOTP with an HMAC-SHA1 digest
// time-based moving factor: floor(unixtime / period)

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Whole Unix seconds for the clock's current time, rounded down.
pub fn unix_time(clock: &impl GetTime) -> i64 {
    match clock.get_now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}

/// A generated one-time password and how long it stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub value: String,
    /// Seconds until the code changes, in `1..=period`.
    pub remaining: i64,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.remaining)
    }
}

/// A time based one-time password generator.
///
/// Holds the decoded secret and the profile; every code request is computed
/// from scratch, so a `Totp` can be shared freely between threads.
#[derive(Clone)]
pub struct Totp {
    secret: Vec<u8>,
    config: TotpConfig,
}

impl fmt::Debug for Totp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Totp")
            .field("secret", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl Totp {
    /// Creates a generator with the standard 30 second, 6 digit profile.
    ///
    /// `secret` must be padded base32 of at least 16 characters.
    pub fn new(secret: &str) -> Result<Self> {
        Totp::with_config(secret, TotpConfig::default())
    }

    pub fn with_config(secret: &str, config: TotpConfig) -> Result<Self> {
        config.validate()?;
        let secret = decode_secret(secret).map_err(|err| {
            tracing::debug!(error = %err, "rejected secret");
            err
        })?;
        Ok(Totp { secret, config })
    }

    pub fn config(&self) -> &TotpConfig {
        &self.config
    }

    /// Code for the current wall-clock time.
    pub fn code(&self) -> Code {
        self.code_with(&Clock::new())
    }

    pub fn code_with(&self, clock: &impl GetTime) -> Code {
        self.code_at(unix_time(clock))
    }

    pub fn code_at(&self, unixtime: i64) -> Code {
        let period = self.config.period_seconds;
        let digits = self.config.digit_count;

        let (counter, elapsed) = counter_from_time(unixtime, period);
        let hash = generate_hash(&self.secret, &counter);
        let chunk = chunk_from_hash(&hash);
        let code = code_from_chunk(&chunk, digits);

        let remaining = period - elapsed;
        tracing::debug!(unixtime, remaining, "generated code");
        Code {
            value: format_code(code, digits),
            remaining,
        }
    }
}
