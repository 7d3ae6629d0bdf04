use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use multiplication_four::config::AppConfig;
use multiplication_four::logging;
use multiplication_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play the multiplication four-in-a-row game against the computer.
#[derive(Parser)]
#[command(name = "multiplication_four", about = "Multiplication four-in-a-row in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the save file location
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(path) = cli.save_file {
        config.save.path = path;
    }
    config.validate().context("validating config")?;

    logging::init(&config.logging)
        .with_context(|| format!("opening log file {}", config.logging.file.display()))?;
    tracing::info!(save = %config.save.path.display(), "starting");

    run(&config).context("terminal UI failed")
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
