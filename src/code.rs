//! Fixed-width binary codes: the unit every sub-field is decoded from.

use std::fmt;

use crate::errors::DecodeError;

/// An exact-width run of binary digits, e.g. the 4-bit class code `0011`.
///
/// Stored as a right-aligned value; [fmt::Display] renders the zero-padded
/// digit string, which is also how codes are keyed in the trait dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    value: u64,
    width: usize,
}

impl Code {
    /// Creates a code of `width` bits (max 64) from the low bits of `value`.
    pub fn new(value: u64, width: usize) -> Self {
        debug_assert!(width <= 64);
        Code {
            value: value & mask(width),
            width,
        }
    }

    /// Parses a string of `0`/`1` digits; the width is the string length.
    pub fn from_binary(digits: &str) -> Result<Self, DecodeError> {
        if digits.is_empty()
            || digits.len() > 64
            || !digits.bytes().all(|b| b == b'0' || b == b'1')
        {
            return Err(DecodeError::unknown("binary", digits));
        }

        let value = digits
            .bytes()
            .fold(0u64, |acc, b| (acc << 1) | u64::from(b - b'0'));

        Ok(Code::new(value, digits.len()))
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Sub-code of `len` bits starting `offset` digits from the left.
    pub fn slice(&self, offset: usize, len: usize) -> Code {
        debug_assert!(offset + len <= self.width);
        let shift = self.width - offset - len;
        Code::new(self.value >> shift, len)
    }

    /// The rightmost `n` digits.
    pub fn low(&self, n: usize) -> Code {
        self.slice(self.width - n, n)
    }

    /// Splits into three equal sub-codes (dominant, recessive 1, recessive 2).
    pub fn thirds(&self) -> [Code; 3] {
        let len = self.width / 3;
        [self.slice(0, len), self.slice(len, len), self.slice(2 * len, len)]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.value, width = self.width)
    }
}

fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_leading_zeros() {
        assert_eq!(Code::new(0b10, 6).to_string(), "000010");
        assert_eq!(Code::new(0, 4).to_string(), "0000");
        assert_eq!(Code::default().to_string(), "");
    }

    #[test]
    fn test_new_masks_to_width() {
        assert_eq!(Code::new(0xff, 4), Code::new(0xf, 4));
    }

    #[test]
    fn test_from_binary() {
        let code = Code::from_binary("001010").unwrap();
        assert_eq!(code.value(), 0b001010);
        assert_eq!(code.width(), 6);

        assert!(Code::from_binary("").is_err());
        assert!(Code::from_binary("0120").is_err());
        assert!(Code::from_binary("+1").is_err());
    }

    #[test]
    fn test_slice_and_low() {
        let part = Code::from_binary("00000000101000000010100011001010").unwrap();
        assert_eq!(part.slice(0, 2).to_string(), "00");
        assert_eq!(part.slice(2, 4).to_string(), "0000");
        assert_eq!(part.slice(6, 6).to_string(), "001010");
        assert_eq!(part.slice(22, 4).to_string(), "0011");
        assert_eq!(part.low(6).to_string(), "001010");
    }

    #[test]
    fn test_thirds() {
        let pattern = Code::from_binary("000001000111000110").unwrap();
        let [d, r1, r2] = pattern.thirds();
        assert_eq!(d.to_string(), "000001");
        assert_eq!(r1.to_string(), "000111");
        assert_eq!(r2.to_string(), "000110");
    }

    #[test]
    fn test_full_width_code() {
        let code = Code::new(u64::MAX, 64);
        assert_eq!(code.slice(0, 64), code);
        assert_eq!(code.low(4).value(), 0xf);
    }
}
