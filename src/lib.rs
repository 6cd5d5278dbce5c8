//! Time-based one-time passwords (RFC 6238).
//!
//! A [`Totp`] is built once from a padded base32 secret and then asked for
//! codes as often as needed:
//!
//! ```
//! let totp = totp::Totp::new("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
//! let code = totp.code_at(59);
//! assert_eq!(code.value, "287082");
//! assert_eq!(code.remaining, 1);
//! ```

pub mod cmd;
pub mod config;
pub mod counter;
pub mod error;
pub mod hotp;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

pub use config::TotpConfig;
pub use error::{Result, TotpError};
pub use totp::{Clock, Code, GetTime, Totp};
