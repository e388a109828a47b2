//! Low-level bit reads over byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte,
//! which is also the first binary digit of the zero-padded gene.

use crate::errors::ReadError;

/// Reads a single bit at `bit_pos` (0 = MSB of first byte). Returns 0 or 1.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Result<u8, ReadError> {
    if bit_pos >= data.len() * 8 {
        return Err(ReadError::OutOfBounds);
    }

    let byte_index = bit_pos / 8;
    let bit_index = bit_pos % 8;

    Ok((data[byte_index] >> (7 - bit_index)) & 1)
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits). MSB-first.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> Result<u64, ReadError> {
    if n > 64 {
        return Err(ReadError::TooManyBitsRead);
    }

    if bit_pos
        .checked_add(n)
        .is_none_or(|end| end > data.len() * 8)
    {
        return Err(ReadError::OutOfBounds);
    }

    let mut value = 0u64;

    for pos in bit_pos..bit_pos + n {
        value = (value << 1) | read_bit_at(data, pos)? as u64;
    }

    Ok(value)
}

/// Number of significant bits in a big-endian unsigned integer (0 for zero).
pub fn bit_length(data: &[u8]) -> usize {
    match data.iter().position(|&b| b != 0) {
        Some(first) => (data.len() - first - 1) * 8 + (8 - data[first].leading_zeros() as usize),
        None => 0,
    }
}

/// Left-pads a big-endian integer with zero bytes to exactly `total_bits`.
///
/// Returns `None` when the value has more significant bits than `total_bits`.
pub fn left_pad(data: &[u8], total_bits: usize) -> Option<Vec<u8>> {
    let significant = bit_length(data);
    if significant > total_bits {
        return None;
    }

    let n_bytes = total_bits.div_ceil(8);
    let used = significant.div_ceil(8);

    let mut out = vec![0u8; n_bytes];
    out[n_bytes - used..].copy_from_slice(&data[data.len() - used..]);

    Some(out)
}
