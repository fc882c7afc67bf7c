mod app;
mod config;
mod input;
mod terminal;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Seven-digit lottery simulation for the terminal")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Skip the educational notice
    #[arg(long)]
    skip_notice: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr; stdout belongs to the TUI.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig {
        tick_ms: cli.tick_ms,
        skip_notice: cli.skip_notice,
        verbose: cli.verbose,
    };

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let result = App::new(config).run(&mut terminal).await;

    terminal::restore()?;
    result
}
