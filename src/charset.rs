//! Charset conversion for decoded location text.
//!
//! Database text is GB18030. Lookups hand back Rust strings; `Charset`
//! turns them into bytes for callers that need a legacy output encoding.

use encoding_rs::{Encoding, GB18030, UTF_8};
use std::fmt;

use crate::{Error, Result};

/// Decode GB18030 database text. Malformed sequences become U+FFFD.
pub fn decode_gb18030(bytes: &[u8]) -> String {
    let (text, had_errors) = GB18030.decode_without_bom_handling(bytes);
    if had_errors {
        log::warn!("malformed GB18030 sequence in {} byte field", bytes.len());
    }
    text.into_owned()
}

/// An output charset resolved from a WHATWG encoding label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// UTF-8 output.
    pub fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// The database's native encoding.
    pub fn gb18030() -> Self {
        Self { encoding: GB18030 }
    }

    /// Resolve a label such as `utf-8`, `gbk` or `big5` (case-insensitive).
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| Error::UnsupportedCharset(label.to_string()))
    }

    /// Canonical encoding name.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Whether the charset is UTF-8, i.e. `encode` is a plain copy.
    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Encode text. Unmappable characters become numeric character references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.encoding.encode(text);
        bytes.into_owned()
    }

    /// Decode bytes in this charset.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, _) = self.encoding.decode_without_bom_handling(bytes);
        text.into_owned()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_GB18030: &[u8] = &[0xC3, 0xC0, 0xB9, 0xFA];

    #[test]
    fn test_decode_gb18030() {
        assert_eq!(decode_gb18030(US_GB18030), "美国");
        assert_eq!(decode_gb18030(b"CZ88.NET"), "CZ88.NET");
        assert_eq!(decode_gb18030(b""), "");
    }

    #[test]
    fn test_decode_gb18030_malformed() {
        assert_eq!(decode_gb18030(&[b'a', 0xFF]), "a\u{FFFD}");
    }

    #[test]
    fn test_for_label() {
        assert!(Charset::for_label("utf-8").unwrap().is_utf8());
        assert!(Charset::for_label("UTF8").unwrap().is_utf8());
        assert_eq!(Charset::for_label("gbk").unwrap().name(), "GBK");
        assert_eq!(Charset::for_label("gb18030").unwrap(), Charset::gb18030());
        assert!(matches!(
            Charset::for_label("klingon"),
            Err(Error::UnsupportedCharset(label)) if label == "klingon"
        ));
    }

    #[test]
    fn test_encode_round_trip() {
        assert_eq!(Charset::gb18030().encode("美国"), US_GB18030);
        assert_eq!(Charset::utf8().encode("美国"), "美国".as_bytes());

        let big5 = Charset::for_label("big5").unwrap();
        assert_eq!(big5.decode(&big5.encode("美國")), "美國");
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Charset::default(), Charset::utf8());
        assert_eq!(Charset::default().to_string(), "UTF-8");
    }
}
