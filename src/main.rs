mod app;
mod config;
mod editor;
mod entry;
mod journal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::{map_key, App};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "TUI diary - write, star and search short entries")]
#[command(version)]
struct Cli {
    /// Config file path (default: ~/.config/darkwall-diary/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    // Load config
    let mut config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::load_from(&Config::default_path())?,
    };
    if cli.dark {
        config.appearance.start_dark = true;
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config).context("Failed to serialize config")?);
        return Ok(());
    }

    tracing::info!("Starting diary (dark: {})", config.appearance.start_dark);
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Exiting with {} entries discarded", app.journal().len());
    result
}

/// Log to `log_file` when given. Without one the TUI owns the terminal,
/// so logs only go to stderr when RUST_LOG asks for them.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env();

    match (log_file, env_filter) {
        (Some(path), filter) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter.unwrap_or_else(|_| "diary=info".into()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        (None, Ok(filter)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
        (None, Err(_)) => {}
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(intent) = map_key(key, app.screen()) {
                app.apply(intent);
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
