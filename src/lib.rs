//! qqwry - IPv4 geolocation lookups against qqwry databases.
//!
//! A qqwry file is a sorted table of IPv4 ranges. Each range points at a
//! record holding GB18030 country and area text, and records share text
//! through 3-byte pointers to keep the file small.
//!
//! # Features
//!
//! - **Range search**: Binary search over the fixed-stride index table
//! - **Redirect decoding**: Block and field pointers resolved to plain text
//! - **Memory-mapped access**: The file is mapped read-only per operation
//! - **Batch lookups**: Many addresses with one open of the database
//! - **Table export**: Dump every range with a custom line format
//! - **Charset conversion**: GB18030 text re-encoded on demand
//!
//! # Quick Start
//!
//! ```ignore
//! use qqwry::{Config, IpLocation};
//!
//! let locator = IpLocation::new(Config::new("qqwry.dat"));
//!
//! let detail = locator.lookup("8.8.8.8")?;
//! println!("{}: {}", detail.ip, detail.location);
//!
//! let version = locator.version()?;
//! println!("database built {}", version);
//! ```
//!
//! # Low-level Access
//!
//! The decoder works on any byte slice through [`binary::ByteSource`]:
//!
//! ```ignore
//! use qqwry::binary::{locate, ByteSource};
//!
//! let data = std::fs::read("qqwry.dat")?;
//! let found = locate(&mut ByteSource::new(&data), 0x0808_0808)?;
//! ```

mod config;
mod error;
mod location;

pub mod binary;
pub mod charset;

// Re-export core types
pub use error::{Error, Result};

// Re-export configuration
pub use config::{Config, DEFAULT_DATABASE};

// Re-export lookup API
pub use location::{parse_ip, DatabaseVersion, IpLocation, IpQuery, LocationDetail};

// Re-export reader types for advanced usage
pub use binary::{Database, RawLocation};
pub use charset::Charset;
