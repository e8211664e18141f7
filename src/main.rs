use std::error::Error;
use std::io::Write as _;

use clap::Parser;
use maskprobe::{args::Args, config::ProbeConfig, logging::setup_tracing, probe::run_probe};
use tracing::info;

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _guard = setup_tracing(args.log_dir.as_deref())?;
    info!(version = env!("CARGO_PKG_VERSION"), "maskprobe starting");

    let config = args.apply(ProbeConfig::read_config(args.config.as_ref())?);
    let report = run_probe(&config)?;
    let rendered = report.render(config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
