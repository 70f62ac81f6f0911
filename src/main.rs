use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transcript_cleanup::{AssemblyConfig, CleanupError, CleanupSummary, clean_transcript};

const BIN_NAME: &str = "transcript-cleanup";

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(author, version, about = "Normalize a call transcript export to one line per utterance", long_about = None)]
struct Cli {
    /// Raw transcript export (optionally with `N→` line numbers)
    input: PathBuf,

    /// Output file for the cleaned transcript
    output: PathBuf,

    /// Also write the turns and scan counters as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", err.render());
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            println!("Transcript cleaned successfully!");
            println!("Input: {}", cli.input.display());
            println!("Output: {}", cli.output.display());
            println!("Total utterances: {}", summary.stats.turns_emitted);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<CleanupError>() {
                Some(CleanupError::InputNotFound(path)) => {
                    println!("Error: Input file '{}' not found.", path.display());
                }
                _ => println!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: {BIN_NAME} <input_file> <output_file>");
    println!("Example: {BIN_NAME} transcripts/ex1.txt transcripts/ex1_cleaned.txt");
}

/// `RUST_LOG` takes precedence over `--verbose`
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: &Cli) -> Result<CleanupSummary> {
    let config = AssemblyConfig::default();
    debug!("Using {:?}", config);

    let summary = clean_transcript(&cli.input, &cli.output, cli.json.as_deref(), &config)
        .context("Failed to clean transcript")?;

    debug!("Scan counters: {:?}", summary.stats);
    Ok(summary)
}
