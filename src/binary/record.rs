//! Location record decoding.
//!
//! A record is a u32 end IP followed by a location block. The block's first
//! byte is either a redirect flag or the first byte of the inline country
//! string, so the decoder peeks a byte and rewinds when it is not a flag.

use super::format::{REDIRECT_BLOCK, REDIRECT_FIELD};
use super::primitive::{read_byte_at, read_cstring, read_u24_le, read_u32_le};
use super::source::ByteSource;
use crate::{Error, Result};

/// A country or area field before pointer resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    /// Text stored at the field head
    Inline(Vec<u8>),
    /// Text stored at this absolute offset
    Pointer(u32),
}

impl FieldRef {
    /// Produce the field text, following the pointer if there is one.
    pub fn resolve(self, source: &mut ByteSource<'_>) -> Result<Vec<u8>> {
        match self {
            FieldRef::Inline(text) => Ok(text),
            FieldRef::Pointer(offset) => {
                source.seek(offset as usize);
                read_cstring(source)
            }
        }
    }
}

/// A decoded record with untrimmed GB18030 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub end_ip: u32,
    pub country: Vec<u8>,
    pub area: Vec<u8>,
}

/// Decode the record at the current position (end IP, then location block).
pub fn decode_record(source: &mut ByteSource<'_>) -> Result<RawRecord> {
    let end_ip = read_u32_le(source)?;
    let (country, area) = decode_location(source)?;
    Ok(RawRecord {
        end_ip,
        country,
        area,
    })
}

/// Decode the location block at the current position into `(country, area)`.
///
/// Read failures are reported as [`Error::CorruptRecord`] at the block offset.
pub fn decode_location(source: &mut ByteSource<'_>) -> Result<(Vec<u8>, Vec<u8>)> {
    let offset = source.position();
    read_location(source).map_err(|e| Error::CorruptRecord {
        offset,
        source: Box::new(e),
    })
}

fn read_location(source: &mut ByteSource<'_>) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut seed = Some(read_byte_at(source, None)?);
    if seed == Some(REDIRECT_BLOCK) {
        let pointer = read_u24_le(source)?;
        source.seek(pointer as usize);
        seed = None;
    }

    // Both field heads are consumed before either pointer is followed.
    let country = read_field(source, seed)?;
    let area = read_field(source, None)?;

    let country = country.resolve(source)?;
    let area = area.resolve(source)?;
    Ok((country, area))
}

/// Read one field head. `seed` is a flag byte already consumed by the caller.
pub fn read_field(source: &mut ByteSource<'_>, seed: Option<u8>) -> Result<FieldRef> {
    let flag = match seed {
        Some(flag) => flag,
        None => read_byte_at(source, None)?,
    };
    if flag == REDIRECT_FIELD {
        return Ok(FieldRef::Pointer(read_u24_le(source)?));
    }
    source.rewind(1);
    Ok(FieldRef::Inline(read_cstring(source)?))
}
