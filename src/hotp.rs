use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::counter::Counter;

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;

/// Length of an HMAC-SHA1 digest.
pub const DIGEST_LEN: usize = 20;

pub type Chunk = [u8; 4];

// HMAC-SHA1(secret, counter) -> 20 byte string
pub fn generate_hash(secret: &[u8], counter: &Counter) -> Vec<u8> {
    let mut mac =
        HmacSha1::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(counter);
    let result = mac.finalize();

    result.into_bytes().to_vec()
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
//
// The offset is read from the last byte, so `hash` must hold at least
// offset + 4 bytes. Any 20 byte digest does.
pub fn chunk_from_hash(hash: &[u8]) -> Chunk {
    let offset = (hash[hash.len() - 1] & 0x0f) as usize;
    let mut chunk = [0u8; 4];
    chunk.copy_from_slice(&hash[offset..offset + 4]);
    chunk[0] &= 0x7f;
    chunk
}

// reduce the 4 byte string to a number mod 10^digits
pub fn code_from_chunk(chunk: &Chunk, digits: u32) -> u32 {
    let code = (chunk[0] as u32) << 24
        | (chunk[1] as u32) << 16
        | (chunk[2] as u32) << 8
        | (chunk[3] as u32);

    code % u32::pow(10, digits)
}

pub fn format_code(code: u32, digits: u32) -> String {
    format!("{:0>width$}", code, width = digits as usize)
}
