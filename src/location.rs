//! Public lookup API.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::net::Ipv4Addr;
use std::path::Path;

use crate::binary::{default_line, Database, RawLocation, VERSION_IP};
use crate::charset::decode_gb18030;
use crate::config::Config;
use crate::{Error, Result};

/// Build date embedded in the version record, e.g. `2024年1月17日`.
static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)年(\d+)月(\d+)日").expect("valid version pattern"));

/// An IPv4 address given as text or as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpQuery {
    /// Dotted-quad or all-digit numeric text
    Text(String),
    /// Numeric address, first octet most significant
    Number(u32),
}

impl IpQuery {
    /// Resolve to the numeric address.
    pub fn resolve(&self) -> Result<u32> {
        match self {
            IpQuery::Text(text) => parse_ip(text),
            IpQuery::Number(n) => Ok(*n),
        }
    }
}

impl From<&str> for IpQuery {
    fn from(s: &str) -> Self {
        IpQuery::Text(s.to_string())
    }
}

impl From<String> for IpQuery {
    fn from(s: String) -> Self {
        IpQuery::Text(s)
    }
}

impl From<&String> for IpQuery {
    fn from(s: &String) -> Self {
        IpQuery::Text(s.clone())
    }
}

impl From<u32> for IpQuery {
    fn from(n: u32) -> Self {
        IpQuery::Number(n)
    }
}

impl From<Ipv4Addr> for IpQuery {
    fn from(ip: Ipv4Addr) -> Self {
        IpQuery::Number(u32::from(ip))
    }
}

/// Parse an IPv4 address.
///
/// All-digit input is taken as the numeric value; anything else must be a
/// dotted quad.
pub fn parse_ip(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidInput("empty IP address".to_string()));
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        return input
            .parse::<u32>()
            .map_err(|_| Error::InvalidInput(format!("IP number out of range: {}", input)));
    }

    input
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| Error::InvalidInput(format!("invalid IPv4 address: {}", input)))
}

/// Result of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationDetail {
    /// The queried address
    pub ip: Ipv4Addr,
    /// First address of the matching range
    pub start: Ipv4Addr,
    /// Last address of the matching range
    pub end: Ipv4Addr,
    /// Country and area joined by a space
    pub location: String,
    pub country: String,
    pub area: String,
}

impl LocationDetail {
    fn from_raw(ip: u32, raw: &RawLocation) -> Self {
        Self {
            ip: Ipv4Addr::from(ip),
            start: Ipv4Addr::from(raw.start_ip),
            end: Ipv4Addr::from(raw.end_ip),
            location: decode_gb18030(&raw.location()),
            country: decode_gb18030(&raw.country),
            area: decode_gb18030(&raw.area),
        }
    }
}

/// Database build date read from the version record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseVersion {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    /// The matched text, e.g. `2024年1月17日`
    pub text: String,
}

impl DatabaseVersion {
    /// Extract the build date from a version location string.
    pub fn parse(location: &str) -> Result<Self> {
        if location.trim().is_empty() {
            return Err(Error::Version("can not read version info".to_string()));
        }

        let caps = VERSION_PATTERN
            .captures(location)
            .ok_or_else(|| Error::Version("can not find version info".to_string()))?;

        let number = |i: usize| -> Result<u32> {
            caps[i]
                .parse()
                .map_err(|_| Error::Version(format!("invalid version date: {}", &caps[0])))
        };

        Ok(Self {
            year: number(1)?,
            month: number(2)?,
            day: number(3)?,
            text: caps[0].to_string(),
        })
    }
}

impl fmt::Display for DatabaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// IP location lookups against a configured qqwry database.
///
/// Every operation opens the database, does its work and releases the
/// mapping before returning, whether it succeeds or fails.
///
/// # Example
///
/// ```ignore
/// use qqwry::{Config, IpLocation};
///
/// let locator = IpLocation::new(Config::new("/data/qqwry.dat"));
/// let detail = locator.lookup("8.8.8.8")?;
/// println!("{} {}", detail.ip, detail.location);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IpLocation {
    config: Config,
}

impl IpLocation {
    /// Create a locator from a configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a locator for a database path.
    pub fn with_database(path: impl AsRef<Path>) -> Self {
        Self::new(Config::new(path))
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn open(&self) -> Result<Database> {
        Database::open(&self.config.database)
    }

    /// Look up one address.
    pub fn lookup(&self, query: impl Into<IpQuery>) -> Result<LocationDetail> {
        let ip = query.into().resolve()?;
        let db = self.open()?;
        let raw = db.locate(ip)?;
        Ok(LocationDetail::from_raw(ip, &raw))
    }

    /// Look up several addresses with a single open of the database.
    ///
    /// The first failing address aborts the batch.
    pub fn lookup_batch<I, Q>(&self, queries: I) -> Result<Vec<LocationDetail>>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<IpQuery>,
    {
        let db = self.open()?;
        let mut results = Vec::new();
        for query in queries {
            let ip = query.into().resolve()?;
            let raw = db.locate(ip)?;
            results.push(LocationDetail::from_raw(ip, &raw));
        }
        log::debug!("batch lookup resolved {} addresses", results.len());
        Ok(results)
    }

    /// Location text for one address.
    pub fn location(&self, query: impl Into<IpQuery>) -> Result<String> {
        Ok(self.lookup(query)?.location)
    }

    /// Read the database build date.
    pub fn version(&self) -> Result<DatabaseVersion> {
        let location = self.location(VERSION_IP)?;
        DatabaseVersion::parse(&location)
    }

    /// Dump the whole table to `path` with the default line format.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<u64> {
        self.save_to_with(path, default_line)
    }

    /// Dump the whole table to `path`, formatting each line with `formatter`.
    ///
    /// The output file is created or truncated.
    pub fn save_to_with<F>(&self, path: impl AsRef<Path>, formatter: F) -> Result<u64>
    where
        F: FnMut(u32, u32, &[u8]) -> Vec<u8>,
    {
        let path = path.as_ref();
        let db = self.open()?;
        let mut output = BufWriter::new(File::create(path)?);
        let count = db.export_all_with(&mut output, formatter)?;
        log::info!("Exported {} entries to {:?}", count, path);
        Ok(count)
    }
}
