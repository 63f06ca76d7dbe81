use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use argos_probe::cli::{init_logging, Cli};
use argos_probe::{probe_path, ImageMetadata, ProbeOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    run(&cli.options())
}

fn run(options: &ProbeOptions) -> Result<()> {
    let mut failures = 0usize;

    for path in &options.paths {
        let result = probe_path(path).with_context(|| format!("Failed to probe {}", path.display()));
        match result {
            Ok(metadata) => {
                info!(path = %path.display(), format = %metadata.format, "probed");
                println!("{}", render(&metadata, options.pretty)?);
            }
            Err(e) if options.keep_going => {
                eprintln!("error: {:#}", e);
                failures += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if failures > 0 {
        bail!("{} of {} files could not be probed", failures, options.paths.len());
    }
    Ok(())
}

fn render(metadata: &ImageMetadata, pretty: bool) -> Result<String> {
    let json = if pretty {
        metadata.to_json_pretty()?
    } else {
        metadata.to_json()?
    };
    Ok(json)
}
