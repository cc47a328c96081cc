//! Othello engine speaking the referee line protocol on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use othello::protocol::Session;
use othello::{AIEngine, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "othello", version, about = "Deadline-bounded Othello move engine")]
struct Cli {
    /// Search depth in plies
    #[arg(long, default_value_t = EngineConfig::DEFAULT_DEPTH)]
    depth: u8,

    /// Time kept back from each move's budget, in milliseconds
    #[arg(long, default_value_t = EngineConfig::DEFAULT_MARGIN_MS)]
    margin_ms: u64,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_depth(self.depth)
            .with_margin(Duration::from_millis(self.margin_ms))
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries protocol replies only
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.engine_config();
    config.validate()?;
    info!(depth = config.max_depth, margin_ms = cli.margin_ms, "engine ready");

    let mut session = Session::new(AIEngine::with_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = session.handle_line(&line).inspect_err(|e| {
            error!(error = %e, "fatal protocol error");
        })?;
        match reply.line() {
            Some(text) => {
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
            None => break,
        }
    }

    info!("session closed");
    Ok(())
}
