//! Translation between standard hexadecimal and reverse hex.
//!
//! Both formats encode a byte as two nibble characters in the same order,
//! so converting is a per-character table swap:
//!
//! ```text
//!   hex     0 1 2 3 4 5 6 7 8 9 a b c d e f
//!   revhex  z y x w v u t s r q p o n m l k
//! ```

use crate::alphabet::{ALPHABET, nibble};
use crate::error::DecodeError;

/// Lowercase standard hexadecimal digits, indexed by nibble value.
const HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Convert a standard hex string (either case) to lowercase reverse hex.
///
/// # Errors
///
/// [`DecodeError::InvalidByte`] for the first non-hex character, otherwise
/// [`DecodeError::OddLength`] for input of odd length.
///
/// ```
/// assert_eq!(revhex::hex_to_revhex("bb84c0a3debac5f8").unwrap(), "oorvnzpwmlopnukr");
/// ```
pub fn hex_to_revhex(hex: &str) -> Result<String, DecodeError> {
    translate(hex.as_bytes(), hex_value, &ALPHABET)
}

/// Convert reverse hex (either case) to lowercase standard hex.
///
/// # Errors
///
/// Same as [`hex_to_revhex`], for characters outside the reverse hex
/// alphabet.
pub fn revhex_to_hex(text: &str) -> Result<String, DecodeError> {
    translate(text.as_bytes(), nibble, &HEX_DIGITS)
}

fn translate(
    src: &[u8],
    value: fn(u8) -> Option<u8>,
    digits: &[u8; 16],
) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(src.len());
    for (offset, &byte) in src.iter().enumerate() {
        let v = value(byte).ok_or(DecodeError::InvalidByte { byte, offset })?;
        out.push(char::from(digits[usize::from(v)]));
    }
    if src.len() % 2 == 1 {
        return Err(DecodeError::OddLength { len: src.len() });
    }
    Ok(out)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
