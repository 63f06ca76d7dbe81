use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::options::ProbeOptions;

#[derive(Parser, Debug)]
#[command(name = "argos-probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify GIF, BMP and PNG files and print their dimensions as JSON", long_about = None)]
pub struct Cli {
    /// Image files to probe
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Keep probing the remaining files after an error
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    pub fn options(&self) -> ProbeOptions {
        ProbeOptions::new(self.paths.clone())
            .with_pretty(self.pretty)
            .with_keep_going(self.keep_going)
    }

    /// Default filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

/// Logs go to stderr so stdout carries only JSON.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Keeps a global subscriber that is already installed
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
