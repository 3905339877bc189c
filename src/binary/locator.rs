//! Range search over the index table.

use super::format::IndexHeader;
use super::primitive::{read_u24_le, read_u32_le};
use super::record::decode_location;
use super::source::ByteSource;
use crate::{Error, Result};

/// Bytes stripped from both ends of decoded fields.
const TRIM_BYTES: &[u8] = b" \t\n\r\0\x0B";

/// A located range with trimmed GB18030 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLocation {
    pub start_ip: u32,
    pub end_ip: u32,
    pub country: Vec<u8>,
    pub area: Vec<u8>,
}

impl RawLocation {
    /// Country and area joined by a single space.
    pub fn location(&self) -> Vec<u8> {
        let mut joined = Vec::with_capacity(self.country.len() + self.area.len() + 1);
        joined.extend_from_slice(&self.country);
        joined.push(b' ');
        joined.extend_from_slice(&self.area);
        joined
    }
}

/// Read and validate the header at offset 0.
pub fn read_header(source: &mut ByteSource<'_>) -> Result<IndexHeader> {
    source.seek(0);
    let index_start = read_u32_le(source)?;
    let index_end = read_u32_le(source)?;
    let header = IndexHeader::new(index_start, index_end);
    header.validate()?;
    Ok(header)
}

/// Find the range containing `target` and decode its location.
///
/// `hi` narrows on the start IP alone while `lo` only moves after the
/// candidate's end IP has been checked. A midpoint equal to `lo` means the
/// search cannot make progress and the address is unmapped.
pub fn locate(source: &mut ByteSource<'_>, target: u32) -> Result<RawLocation> {
    let header = read_header(source)?;

    let mut lo = 0u32;
    let mut hi = header.entry_count();

    let (start_ip, end_ip) = loop {
        let mid = lo + (hi - lo) / 2;

        source.seek(header.entry_offset(mid));
        let start_ip = read_u32_le(source)?;

        if start_ip > target {
            if mid == lo {
                return Err(Error::IpNotFound(target));
            }
            hi = mid;
            continue;
        }

        let pointer = read_u24_le(source)?;
        source.seek(pointer as usize);
        let end_ip = read_u32_le(source)?;

        if end_ip >= target {
            break (start_ip, end_ip);
        }
        if mid == lo {
            return Err(Error::IpNotFound(target));
        }
        lo = mid;
    };

    let (country, area) = decode_location(source)?;
    log::debug!("located {} in [{}, {}]", target, start_ip, end_ip);

    Ok(RawLocation {
        start_ip,
        end_ip,
        country: trim(&country).to_vec(),
        area: trim(&area).to_vec(),
    })
}

/// Strip leading and trailing whitespace and NUL bytes.
pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !TRIM_BYTES.contains(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !TRIM_BYTES.contains(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim(b"  abc \t"), b"abc");
        assert_eq!(trim(b"\0\x0Bx y\r\n"), b"x y");
        assert_eq!(trim(b"   "), b"");
        assert_eq!(trim(b""), b"");
        assert_eq!(trim(b"plain"), b"plain");
    }

    #[test]
    fn test_location_join() {
        let location = RawLocation {
            start_ip: 0,
            end_ip: 0,
            country: b"a".to_vec(),
            area: Vec::new(),
        };
        assert_eq!(location.location(), b"a ");

        let location = RawLocation {
            start_ip: 0,
            end_ip: 0,
            country: b"a".to_vec(),
            area: b"b".to_vec(),
        };
        assert_eq!(location.location(), b"a b");
    }

    #[test]
    fn test_read_header_truncated() {
        let data = [0u8; 6];
        let mut source = ByteSource::new(&data);
        assert!(matches!(
            read_header(&mut source),
            Err(Error::TruncatedRead { offset: 4, .. })
        ));
    }
}
