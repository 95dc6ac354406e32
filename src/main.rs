mod api;
mod cache;
mod config;
mod consts;
mod environment;
mod events;
mod fetcher;
mod logging;
mod markdown;
mod network;
mod source;
mod theme;
mod ui;

use crate::api::ApiClient;
use crate::config::{get_config_path, Config};
use crate::environment::Environment;
use crate::source::Source;
use crate::ui::dashboard::UIConfig;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Source to open with (reddit, hackernews, github, techfeed, paper)
        #[arg(long, value_name = "SOURCE")]
        source: Option<Source>,

        /// Date to open with (YYYY-MM-DD). Out-of-window dates are clamped
        /// to the last 30 days.
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Disable the themed background color.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Clear the persisted theme preference.
    ResetTheme,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let nook_environment_str = std::env::var("NOOK_ENVIRONMENT").unwrap_or_default();
    let environment = nook_environment_str
        .parse::<Environment>()
        .unwrap_or_default();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            source,
            date,
            no_background_color,
        } => start(environment, config_path, source, date, !no_background_color).await,
        Command::ResetTheme => {
            println!("Clearing persisted theme preference...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard application.
///
/// # Arguments
/// * `env` - The environment to connect to.
/// * `config_path` - Where the theme preference is persisted.
/// * `source` - Source to open with, if given.
/// * `date` - Date to open with, if given.
/// * `with_background_color` - Whether to paint the themed background.
async fn start(
    env: Environment,
    config_path: PathBuf,
    source: Option<Source>,
    date: Option<NaiveDate>,
    with_background_color: bool,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let theme = Config::initial_theme(&config_path);
    let api_client = ApiClient::new(env);
    let ui_config = UIConfig {
        with_background_color,
        initial_source: source.unwrap_or(Source::HackerNews),
        initial_date: date,
    };
    let app = ui::App::new(env, Arc::new(api_client), theme, config_path, ui_config);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
