//! CLI for the dataset extraction pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use codeharvest::{
    extract, extract_and_partition, load_run, HarvestError, RunContext, SplitConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Walk the source root and write the CSV checkpoint only.
    Extract,
    /// Extract, then partition and persist train/test parquet subsets.
    Partition,
    /// Reload train/test subsets from an existing run directory.
    Load,
}

#[derive(Debug, Parser)]
#[command(
    name = "codeharvest",
    disable_help_subcommand = true,
    about = "Extract source-code trees into train/test datasets",
    long_about = "Extract source files from a local directory tree into a CSV checkpoint, \
                  then deterministically split them into train/test parquet subsets for \
                  fine-tuning open models."
)]
struct Cli {
    #[arg(long, value_enum, help = "Pipeline mode to run")]
    mode: Mode,
    #[arg(
        long,
        value_name = "PATH",
        help = "Source tree root (extract/partition) or run directory (load)"
    )]
    root: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "./datasets",
        help = "Output root; each run writes into a timestamped subdirectory"
    )]
    output: PathBuf,
    #[arg(
        long = "test-fraction",
        default_value_t = 0.10,
        help = "Fraction of rows assigned to the test subset"
    )]
    test_fraction: f64,
    #[arg(long, default_value_t = 42, help = "Seed for the shuffle permutation")]
    seed: u64,
}

fn run(cli: &Cli) -> Result<(), HarvestError> {
    match cli.mode {
        Mode::Extract => {
            let ctx = RunContext::new(&cli.output);
            let report = extract(&cli.root, &ctx)?;
            println!(
                "wrote {} records to {}",
                report.records,
                report.checkpoint.display()
            );
        }
        Mode::Partition => {
            let ctx = RunContext::new(&cli.output);
            let config = SplitConfig {
                test_fraction: cli.test_fraction,
                seed: cli.seed,
            };
            let report = extract_and_partition(&cli.root, &ctx, &config)?;
            println!(
                "wrote {} records to {} ({} train / {} test)",
                report.records,
                report.checkpoint.display(),
                report.train_rows,
                report.test_rows
            );
        }
        Mode::Load => {
            let split = load_run(&cli.root)?;
            println!(
                "loaded {} train rows and {} test rows from {}",
                split.train.len(),
                split.test.len(),
                cli.root.display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
