//! qqwry binary file format.
//!
//! The file is a header + records + index structure. Records are stored
//! before the index and may share text through 3-byte pointers.
//!
//! # File Structure
//!
//! ```text
//! +------------------+
//! |     HEADER       |  8 bytes: index_start u32 LE, index_end u32 LE
//! +------------------+
//! |     RECORDS      |  variable: end_ip u32 LE + location block
//! +------------------+
//! |      INDEX       |  7 bytes per entry: start_ip u32 LE + pointer u24 LE
//! +------------------+
//! ```
//!
//! # Location Block
//!
//! ```text
//! 0x01 ptr24            whole block continues at ptr24
//! 0x02 ptr24 <area>     country text at ptr24
//! <text>\0 <area>       inline country
//!
//! <area> = 0x02 ptr24 | <text>\0
//! ```

mod export;
mod format;
mod locator;
mod primitive;
mod reader;
mod record;
mod source;


pub use export::{default_line, export_all, export_all_with};
pub use format::*;
pub use locator::{locate, read_header, RawLocation};
pub use primitive::{read_byte_at, read_cstring, read_u24_le, read_u32_le};
pub use reader::Database;
pub use record::{decode_location, decode_record, read_field, FieldRef, RawRecord};
pub use source::ByteSource;
