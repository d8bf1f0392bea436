use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use euchre_engine::config::validate_seat;
use euchre_engine::{AppError, EngineConfig, Game, Seat};
use tracing_subscriber::EnvFilter;

mod encoder;
mod replay;
mod script;

#[derive(Parser)]
#[command(name = "euchre-replay")]
#[command(about = "Replay a JSONL move script through the euchre engine")]
struct Args {
    /// Move script, one JSON object per line
    #[arg(short, long)]
    script: PathBuf,

    /// Game seed (overrides EUCHRE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// First dealer's seat (overrides EUCHRE_FIRST_DEALER)
    #[arg(short, long)]
    dealer: Option<Seat>,

    /// Seat whose hand stays visible in the output
    #[arg(long)]
    viewer: Option<Seat>,

    /// Log every move at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig, AppError> {
    let mut config = EngineConfig::from_env()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(dealer) = args.dealer {
        config = config.with_first_dealer(dealer)?;
    }
    if let Some(viewer) = args.viewer {
        validate_seat("viewer", viewer)?;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::from(2);
        }
    };

    let mut game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("❌ Failed to start game: {e}");
            return ExitCode::FAILURE;
        }
    };

    let script = match File::open(&args.script) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            eprintln!("❌ Cannot open {}: {e}", args.script.display());
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match replay::run(&mut game, script, &mut out, args.viewer) {
        Ok(report) => {
            tracing::info!(
                applied = report.applied,
                rejected = report.rejected,
                "Replay finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Replay failed: {e}");
            ExitCode::FAILURE
        }
    }
}
