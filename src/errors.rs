//! Error types for bit reading, gene decoding and dictionary loading.

use crate::{
    layout::Layout,
    model::{Class, PartSkin, PartType},
    part::Slot,
};

/// Errors produced when reading bits from a byte slice (e.g. during [crate::layout::Layout::parse]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// Requested bit range is beyond the end of the data.
    #[error("bit range out of bounds")]
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    #[error("cannot read more than 64 bits at once")]
    TooManyBitsRead,
    /// Input data is shorter than the layout's total bit length.
    #[error("buffer of {bits} bits is shorter than the layout")]
    PacketTooShort { bits: usize },
}

/// Errors produced while decoding a gene code. Decoding stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input is not a `0x`-prefixed hexadecimal number.
    #[error("malformed gene hex {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },
    /// The number does not fit the selected layout width.
    #[error("{bits}-bit gene does not fit the {layout} layout ({width} bits)")]
    Layout {
        layout: Layout,
        bits: usize,
        width: usize,
    },
    /// A code outside an enumerated domain.
    #[error("unknown {field} code {code}")]
    UnknownValue { field: &'static str, code: String },
    /// Trait name lookup failed for the requested skin and for the global fallback.
    #[error("no trait name for {class} -> {part_type} -> {code} -> {skin}")]
    TraitNotFound {
        class: Class,
        part_type: PartType,
        code: String,
        skin: PartSkin,
    },
    /// No registry entry for the normalized part id.
    #[error("part registry has no entry for {0}")]
    PartRegistryMiss(String),
    /// A failure inside one slot of a body part.
    #[error("{part} {slot}: {source}")]
    Part {
        part: PartType,
        slot: Slot,
        source: Box<DecodeError>,
    },
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl DecodeError {
    pub(crate) fn unknown(field: &'static str, code: impl ToString) -> Self {
        DecodeError::UnknownValue {
            field,
            code: code.to_string(),
        }
    }

    /// Innermost error, skipping [DecodeError::Part] wrappers.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::Part { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Errors produced while loading the trait dictionary or the part registry.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("invalid dictionary json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}
