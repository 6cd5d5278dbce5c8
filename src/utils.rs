use data_encoding::BASE32;

use crate::error::{Result, TotpError};

/// Shortest encoded secret accepted, counted in characters (not UTF-8
/// bytes) before decoding.
pub const MIN_SECRET_LENGTH: usize = 16;

// Length is checked on the encoded text first, then the text is decoded.
// Short-but-valid and long-but-malformed secrets report different errors.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let length = secret.chars().count();
    if length < MIN_SECRET_LENGTH {
        return Err(TotpError::InvalidSecretLength { length });
    }

    let key = BASE32.decode(secret.as_bytes())?;
    tracing::debug!(key_len = key.len(), "decoded secret");
    Ok(key)
}
