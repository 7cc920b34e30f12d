use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use cinesearch::App;
use cinesearch::config::{self, TOKEN_ENV_VAR};
use cinesearch::tmdb;

/// How long to wait for input before polling the search worker again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive movie search powered by The Movie Database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "The TMDB API read access token is read from the TMDB_TOKEN environment variable.")]
struct Args {
    /// Search for this title immediately on startup
    query: Option<String>,

    /// Path to a config file (default: <config dir>/cinesearch/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let config = config::load_config(args.config.as_deref())?;

    let token = config::token_from_env().ok_or_else(|| {
        eyre!(
            "{} is not set. Export your TMDB API read access token before starting.",
            TOKEN_ENV_VAR
        )
    })?;
    let client = tmdb::client_from_config(&config.api, Some(&token));

    let mut app = App::with_worker(&config, client);
    if let Some(query) = args.query {
        app.input.set_query(&query);
        app.submit_search();
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal before any error is printed
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        app.poll_search();

        terminal.draw(|frame| app.render(frame))?;

        // Only process key press events (avoid duplicates)
        if event::poll(EVENT_POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }
    }

    Ok(())
}

/// Log to a file in the temp dir; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    let path = std::env::temp_dir().join("cinesearch-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cinesearch=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}
