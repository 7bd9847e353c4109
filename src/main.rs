use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::{Dimensions, GameState};
use connect_four::ui::{self, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", version, about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Read column numbers from stdin instead of running the TUI
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    config.validate().context("invalid board or token settings")?;

    if cli.plain {
        run_plain(&config)
    } else {
        run_tui(config.board)
    }
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();
}

fn run_plain(config: &AppConfig) -> Result<()> {
    let mut state = GameState::new(config.board);
    let stdin = io::stdin();
    ui::text::run(&mut state, &config.tokens, stdin.lock(), io::stdout().lock())
        .context("text game loop failed")?;
    Ok(())
}

fn run_tui(dimensions: Dimensions) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(dimensions);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
