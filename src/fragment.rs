use crate::{bits, code::Code, errors::ReadError};

/// A contiguous bit range, relative to whatever it is applied to: the padded
/// gene buffer for top-level fields, or an enclosing [Code] for sub-fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fragment {
    pub offset_bits: usize,
    pub len_bits: usize,
}

impl Fragment {
    pub const fn new(offset_bits: usize, len_bits: usize) -> Self {
        Fragment {
            offset_bits,
            len_bits,
        }
    }

    pub const fn end_bits(&self) -> usize {
        self.offset_bits + self.len_bits
    }

    /// Reads this range out of an MSB-first byte buffer.
    pub fn read(&self, data: &[u8]) -> Result<Code, ReadError> {
        let value = bits::read_bits_at(data, self.offset_bits, self.len_bits)?;
        Ok(Code::new(value, self.len_bits))
    }

    /// Cuts this range out of an enclosing code.
    pub fn extract(&self, code: Code) -> Code {
        code.slice(self.offset_bits, self.len_bits)
    }
}
