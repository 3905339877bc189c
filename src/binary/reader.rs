//! Memory-mapped qqwry database reader.

use memmap2::Mmap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::export::{export_all, export_all_with};
use super::format::IndexHeader;
use super::locator::{locate, read_header, RawLocation};
use super::source::ByteSource;
use crate::{Error, Result};

/// Read-only, memory-mapped qqwry database.
///
/// The mapping is released when the value is dropped, so scoping a
/// `Database` to one operation closes the file on every exit path.
pub struct Database {
    mmap: Mmap,
}

impl Database {
    /// Open and map a database file.
    pub fn open(path: &Path) -> Result<Self> {
        let unavailable = |source: std::io::Error| Error::DatabaseUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(unavailable)?;

        log::debug!("Opened qqwry database {:?}: {} bytes", path, mmap.len());
        Ok(Self { mmap })
    }

    /// Open a database from bytes.
    ///
    /// This writes the data to a temp file and then memory-maps it.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut temp_file = tempfile::tempfile()?;
        temp_file.write_all(&data)?;

        let mmap = unsafe { Mmap::map(&temp_file)? };
        Ok(Self { mmap })
    }

    /// Raw database bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// A fresh cursor at offset 0.
    pub fn source(&self) -> ByteSource<'_> {
        ByteSource::new(&self.mmap)
    }

    /// Read the index bounds.
    pub fn header(&self) -> Result<IndexHeader> {
        read_header(&mut self.source())
    }

    /// Find the range containing `ip`.
    pub fn locate(&self, ip: u32) -> Result<RawLocation> {
        locate(&mut self.source(), ip)
    }

    /// Dump every entry with the default line format.
    pub fn export_all<W: Write>(&self, sink: &mut W) -> Result<u64> {
        export_all(&mut self.source(), sink)
    }

    /// Dump every entry with a custom line format.
    pub fn export_all_with<W, F>(&self, sink: &mut W, formatter: F) -> Result<u64>
    where
        W: Write,
        F: FnMut(u32, u32, &[u8]) -> Vec<u8>,
    {
        export_all_with(&mut self.source(), sink, formatter)
    }
}
