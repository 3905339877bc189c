//! qqwry: CLI tool for IP location lookups and table export.

use clap::{Parser, Subcommand};
use qqwry::binary::default_line;
use qqwry::charset::decode_gb18030;
use qqwry::{Charset, Config, IpLocation, DEFAULT_DATABASE};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qqwry")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Look up IPv4 locations in a qqwry database", long_about = None)]
struct Cli {
    /// qqwry database file
    #[arg(short, long, global = true, default_value = DEFAULT_DATABASE)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one or more IPv4 addresses
    Lookup {
        /// Dotted-quad or numeric addresses
        #[arg(required = true)]
        ips: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Output charset for plain text results
        #[arg(short, long, default_value = "utf-8")]
        charset: String,
    },

    /// Print the database build date
    Version,

    /// Dump every range to a file
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Write UTF-8 instead of the database's GB18030 text
        #[arg(long)]
        utf8: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let locator = IpLocation::new(Config::new(&cli.db));

    let result = match cli.command {
        Commands::Lookup { ips, json, charset } => lookup(&locator, &ips, json, &charset),
        Commands::Version => version(&locator),
        Commands::Export { output, utf8 } => export(&locator, &output, utf8),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn lookup(
    locator: &IpLocation,
    ips: &[String],
    json: bool,
    charset: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let charset = Charset::for_label(charset)?;
    let details = locator.lookup_batch(ips)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &details)?;
        writeln!(out)?;
        return Ok(());
    }

    for detail in &details {
        let line = format!("{}\t{}\n", detail.ip, detail.location);
        out.write_all(&charset.encode(&line))?;
    }
    Ok(())
}

fn version(locator: &IpLocation) -> Result<(), Box<dyn std::error::Error>> {
    let version = locator.version()?;
    println!("{}", version);
    Ok(())
}

fn export(
    locator: &IpLocation,
    output: &Path,
    utf8: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = if utf8 {
        locator.save_to_with(output, |start, end, text| {
            default_line(start, end, decode_gb18030(text).as_bytes())
        })?
    } else {
        locator.save_to(output)?
    };

    println!("Exported {} ranges to {:?}", count, output);
    Ok(())
}
