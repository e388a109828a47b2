//! Exhaustive code-to-value lookup tables.

use crate::{code::Code, errors::DecodeError};

/// Maps exact-width codes of one field to domain values.
///
/// A code of the wrong width, or one with no entry, is an
/// [DecodeError::UnknownValue] for `field`.
#[derive(Debug)]
pub struct CodeTable<T: 'static> {
    pub field: &'static str,
    pub width: usize,
    pub entries: &'static [(u64, T)],
}

impl<T: Copy> CodeTable<T> {
    pub const fn new(field: &'static str, width: usize, entries: &'static [(u64, T)]) -> Self {
        CodeTable {
            field,
            width,
            entries,
        }
    }

    pub fn lookup(&self, code: Code) -> Result<T, DecodeError> {
        if code.width() != self.width {
            return Err(DecodeError::unknown(self.field, code));
        }

        self.entries
            .iter()
            .find(|(key, _)| *key == code.value())
            .map(|(_, value)| *value)
            .ok_or_else(|| DecodeError::unknown(self.field, code))
    }
}
