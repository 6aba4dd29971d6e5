use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use incidentforge_generate::{GenerateOptions, GenerationEngine, GenerationError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "incidentforge", version, about = "Synthetic IT-incident dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// RNG seed; runs with the same seed reproduce the file byte-for-byte.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional output path override.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut options = GenerateOptions::default();
    options.seed = args.seed;
    if let Some(out) = args.out {
        options.out_path = out;
    }

    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    tracing::info!(
        report = %serde_json::to_string(&result.report)?,
        out = %result.out_path.display(),
        "run finished"
    );

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
