//! `0x`-prefixed hex input to a big-endian byte buffer.

use crate::errors::DecodeError;

/// Parses a `0x`-prefixed hex string of any length into big-endian bytes.
///
/// Leading zero digits are accepted; an odd digit count is treated as if it
/// were prefixed with one more zero.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    let parse_error = |reason| DecodeError::Parse {
        input: input.to_string(),
        reason,
    };

    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| parse_error("missing 0x prefix"))?;

    if digits.is_empty() {
        return Err(parse_error("no hex digits"));
    }

    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };

    hex::decode(digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { .. } => parse_error("invalid hex digit"),
        _ => parse_error("malformed hex digits"),
    })
}
