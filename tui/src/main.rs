//! folio - an animated single-page portfolio for the terminal
//!
//! Usage: `folio [content.json]`
//!
//! Content comes from the argument, the `FOLIO_CONTENT` environment
//! variable, or the document embedded at build time, in that order.
//! Content errors are fatal and reported before the terminal is touched.
//! Set `FOLIO_LOG` to a file path to capture tracing output (the screen
//! belongs to the page, so logs never go to stdout).

use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use folio_core::ContentStore;
use folio_tui::App;

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("FOLIO_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_content() -> Result<ContentStore> {
    if let Some(path) = std::env::args().nth(1) {
        return ContentStore::load(&path).with_context(|| format!("loading {path}"));
    }
    if let Ok(path) = std::env::var("FOLIO_CONTENT") {
        return ContentStore::load(&path).with_context(|| format!("loading {path}"));
    }
    Ok(ContentStore::embedded()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    // Fail on bad content while stderr is still a normal terminal
    let content = load_content()?;

    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = App::new(content).run(&mut terminal).await;

    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}
