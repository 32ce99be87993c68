//! `lcmgen-vala`: generate Vala classes from LCM schema IR documents.
//!
//! Run with: `lcmgen-vala --vala-path gen --lazy schema.json`

use anyhow::Context;
use clap::Parser;
use lcmgen::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate Vala classes from LCM schema IR documents.
#[derive(Parser, Debug)]
#[command(name = "lcmgen-vala", version, about)]
struct Cli {
    /// Location for .vala files
    #[arg(long = "vala-path", default_value = ".")]
    vala_path: String,

    /// Only regenerate files older than their schema source
    #[arg(long)]
    lazy: bool,

    /// Log more (-v for generated files, -vv for skipped ones)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON IR documents produced by the schema front end
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

impl Cli {
    fn options(&self) -> ValaOptions {
        ValaOptions::new()
            .output_dir(self.vala_path.clone())
            .lazy(self.lazy)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lcmgen-vala: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Generates every input in order, stopping at the first failure.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();

    for input in &cli.inputs {
        let report = lcmgen::generate_from_file(input, &options)
            .with_context(|| format!("failed to generate Vala for {}", input.display()))?;

        tracing::info!(
            "{}: {} written, {} up to date",
            input.display(),
            report.written.len(),
            report.skipped.len()
        );
    }

    Ok(())
}
