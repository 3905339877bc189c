//! Byte-level readers for the qqwry on-disk encoding.

use super::source::ByteSource;
use crate::{Error, Result};

/// Read a little-endian u32 at the current position.
pub fn read_u32_le(source: &mut ByteSource<'_>) -> Result<u32> {
    let bytes = source.read_exact(4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read a little-endian 3-byte integer, zero-extended to u32.
pub fn read_u24_le(source: &mut ByteSource<'_>) -> Result<u32> {
    let bytes = source.read_exact(3)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
}

/// Read one byte, optionally seeking to `offset` first.
pub fn read_byte_at(source: &mut ByteSource<'_>, offset: Option<usize>) -> Result<u8> {
    if let Some(offset) = offset {
        source.seek(offset);
    }
    source.read_u8()
}

/// Read a NUL-terminated string, leaving the cursor after the terminator.
///
/// The terminator is not included in the result.
pub fn read_cstring(source: &mut ByteSource<'_>) -> Result<Vec<u8>> {
    let start = source.position();
    let remaining = source.remaining();
    match remaining.iter().position(|&b| b == 0) {
        Some(len) => {
            source.seek(start + len + 1);
            Ok(remaining[..len].to_vec())
        }
        None => Err(Error::EndOfFile {
            offset: start + remaining.len(),
        }),
    }
}
