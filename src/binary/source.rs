//! Random-access cursor over database bytes.

use crate::{Error, Result};

/// Seekable read cursor over a borrowed byte buffer.
///
/// Seeking never fails; bounds are checked by the reads. This mirrors how a
/// file handle lets you seek past the end and only errors on the next read.
#[derive(Debug, Clone)]
pub struct ByteSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteSource<'a> {
    /// Create a cursor positioned at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying data is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move to an absolute offset.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Step back `n` bytes, undoing a previous read.
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Bytes from the current position to the end.
    pub fn remaining(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        data.get(self.pos..).unwrap_or(&[])
    }

    /// Read exactly `len` bytes and advance.
    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining.len() < len {
            return Err(Error::TruncatedRead {
                offset: self.pos,
                expected: len,
                actual: remaining.len(),
            });
        }
        self.pos += len;
        Ok(&remaining[..len])
    }

    /// Read a single byte and advance.
    pub fn read_u8(&mut self) -> Result<u8> {
        match self.remaining().first() {
            Some(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(Error::EndOfFile { offset: self.pos }),
        }
    }
}
