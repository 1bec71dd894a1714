//! Command-line front-end for the mower batch pipeline.

use clap::Parser;
use mowitnow::{BatchPipeline, MalformedRecordPolicy, Result};
use std::path::PathBuf;

/// Simulates a batch of autonomous lawn mowers from a flat record file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file: lawn bounds on the first line, one mower per line after.
    input: PathBuf,

    /// Output file receiving one `x y heading` line per mower.
    #[arg(short, long, default_value = "mowers.out")]
    output: PathBuf,

    /// Skip records that fail to parse instead of aborting the run.
    #[arg(long)]
    skip_malformed: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let policy = if args.skip_malformed {
        MalformedRecordPolicy::Skip
    } else {
        MalformedRecordPolicy::Abort
    };

    log::info!("mowitnow v{}", env!("CARGO_PKG_VERSION"));
    let summary = BatchPipeline::new(policy).run_file(&args.input, &args.output)?;
    log::info!(
        "batch finished: {} mower(s) simulated, {} skipped, results in {}",
        summary.simulated,
        summary.skipped,
        args.output.display()
    );

    Ok(())
}
