//! Synthetic log-data generator.
//!
//! Writes random line-delimited-JSON log records until the output reaches a
//! minimum size. The produced files feed the log-aggregation benchmarks and
//! integration tests.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use rand::Rng;

use pullseq::record::{LogRecord, Severity};

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam \
    nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. \
    At vero eos et accusam et justo duo dolores et ea rebum. Stet clita kasd gubergren, no sea \
    takimata sanctus est Lorem ipsum dolor sit amet. Lorem ipsum dolor sit amet, consetetur \
    sadipscing elitr, sed diam nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam \
    erat, sed diam voluptua. At vero eos et accusam et justo duo dolores et e";

const APPS: &[&str] = &["", "service", "api_gateway", "auth", "repository"];

const SEVERITIES: &[Severity] = &[
    Severity::Debug,
    Severity::Info,
    Severity::Warn,
    Severity::Error,
];

#[derive(Parser)]
#[command(name = "genlog")]
#[command(about = "Generate synthetic line-delimited-JSON log data")]
#[command(version)]
struct Cli {
    /// Minimum output size in bytes
    #[arg(long, default_value_t = 1024 * 1024)]
    min_size: usize,

    /// Output file; writes to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            generate(cli.min_size, BufWriter::new(file))
        }
        None => generate(cli.min_size, std::io::stdout().lock()),
    }
}

fn generate<W: Write>(min_size: usize, mut out: W) -> Result<()> {
    let mut rng = rand::rng();
    let mut timestamp = Utc::now();
    let mut written = 0;

    while written < min_size {
        let line = serde_json::to_string(&record(&mut rng, timestamp))?;
        writeln!(out, "{line}")?;
        written += line.len() + 1;
        timestamp += Duration::milliseconds(rng.random_range(0..20));
    }

    out.flush()?;
    Ok(())
}

fn record<R: Rng>(rng: &mut R, timestamp: DateTime<Utc>) -> LogRecord {
    LogRecord {
        timestamp,
        app: APPS[rng.random_range(0..APPS.len())].to_string(),
        severity: SEVERITIES[rng.random_range(0..SEVERITIES.len())],
        msg: message(rng),
    }
}

fn message<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(50..LOREM_IPSUM.len());
    LOREM_IPSUM[..len].to_string()
}
