//! qqwry format constants and structures.

use crate::{Error, Result};

/// Header size in bytes (two u32 index offsets).
pub const HEADER_SIZE: usize = 8;

/// Index entry size in bytes: u32 start IP + u24 record pointer.
pub const INDEX_ENTRY_SIZE: u32 = 7;

/// Location block flag: the whole block lives at the following pointer.
pub const REDIRECT_BLOCK: u8 = 0x01;

/// Field flag: the field text lives at the following pointer.
pub const REDIRECT_FIELD: u8 = 0x02;

/// Address whose record carries the database build date.
pub const VERSION_IP: u32 = 0xFFFF_FFFF;

/// Database header (8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    /// Absolute offset of the first index entry (u32 LE)
    pub index_start: u32,
    /// Absolute offset of the last index entry (u32 LE)
    pub index_end: u32,
}

impl IndexHeader {
    /// Create a header from raw index bounds.
    pub fn new(index_start: u32, index_end: u32) -> Self {
        Self {
            index_start,
            index_end,
        }
    }

    /// Validate that the bounds describe at least one entry.
    pub fn validate(&self) -> Result<()> {
        if self.index_end < self.index_start {
            return Err(Error::InvalidHeader {
                index_start: self.index_start,
                index_end: self.index_end,
            });
        }
        Ok(())
    }

    /// Number of index entries.
    pub fn entry_count(&self) -> u32 {
        (self.index_end - self.index_start) / INDEX_ENTRY_SIZE + 1
    }

    /// Absolute offset of the `index`-th entry.
    pub fn entry_offset(&self, index: u32) -> usize {
        self.index_start as usize + INDEX_ENTRY_SIZE as usize * index as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_count() {
        assert_eq!(IndexHeader::new(100, 100).entry_count(), 1);
        assert_eq!(IndexHeader::new(100, 107).entry_count(), 2);
        assert_eq!(IndexHeader::new(100, 170).entry_count(), 11);
    }

    #[test]
    fn test_entry_offset() {
        let header = IndexHeader::new(1000, 1070);
        assert_eq!(header.entry_offset(0), 1000);
        assert_eq!(header.entry_offset(3), 1021);
        assert_eq!(header.entry_offset(10), 1070);
    }

    #[test]
    fn test_header_validation() {
        assert!(IndexHeader::new(8, 8).validate().is_ok());
        assert!(matches!(
            IndexHeader::new(20, 8).validate(),
            Err(Error::InvalidHeader {
                index_start: 20,
                index_end: 8
            })
        ));
    }
}
