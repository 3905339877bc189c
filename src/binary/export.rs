//! Linear dump of every index entry.

use std::io::Write;

use super::locator::read_header;
use super::primitive::{read_u24_le, read_u32_le};
use super::record::decode_location;
use super::source::ByteSource;
use crate::Result;

/// Default line: `start\tend\tcountry\tarea\r\n` with decimal IPs.
pub fn default_line(start_ip: u32, end_ip: u32, location: &[u8]) -> Vec<u8> {
    let mut line = format!("{}\t{}\t", start_ip, end_ip).into_bytes();
    line.extend_from_slice(location);
    line.extend_from_slice(b"\r\n");
    line
}

/// Write one default-formatted line per index entry.
pub fn export_all<W: Write>(source: &mut ByteSource<'_>, sink: &mut W) -> Result<u64> {
    export_all_with(source, sink, default_line)
}

/// Write one line per index entry using `formatter`.
///
/// The formatter receives the start IP, end IP and the untrimmed
/// `country\tarea` bytes. Returns the number of lines written; the sink is
/// flushed before returning.
pub fn export_all_with<W, F>(
    source: &mut ByteSource<'_>,
    sink: &mut W,
    mut formatter: F,
) -> Result<u64>
where
    W: Write,
    F: FnMut(u32, u32, &[u8]) -> Vec<u8>,
{
    let header = read_header(source)?;
    let count = header.entry_count();

    for index in 0..count {
        source.seek(header.entry_offset(index));
        let start_ip = read_u32_le(source)?;
        let pointer = read_u24_le(source)?;
        source.seek(pointer as usize);
        let end_ip = read_u32_le(source)?;
        let (country, area) = decode_location(source)?;

        let mut location = country;
        location.push(b'\t');
        location.extend_from_slice(&area);

        sink.write_all(&formatter(start_ip, end_ip, &location))?;
    }

    sink.flush()?;
    log::debug!("exported {} index entries", count);
    Ok(count as u64)
}
