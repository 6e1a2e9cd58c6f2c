use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::document::Document;
use folio::editor::Editor;
use folio::input::TtyInput;
use folio::terminal::{self, RawModeGuard};

/// A minimal terminal text viewer
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "View a text file in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// File to view. Omit it to open an empty document.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to a log file for diagnostics (stdout is the UI, so logging
    /// is off unless this is given)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Route tracing output to the given file. Filter comes from `RUST_LOG`,
/// defaulting to `info`.
fn init_tracing(path: &PathBuf) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_tracing(path)?;
    }

    let document = match args.file {
        Some(ref path) => Document::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?,
        None => Document::empty(),
    };

    // The guard must outlive the run loop: its drop restores the terminal
    // on every exit path, including error returns below.
    let _guard = RawModeGuard::enter().context("failed to enable raw mode")?;

    let (width, height) = terminal::window_size().context("failed to query terminal size")?;
    // Reserve the bottom row for the status bar.
    let text_height = height.saturating_sub(1);

    tracing::info!(
        "Starting session: {} lines, {}x{} window",
        document.line_count(),
        width,
        height
    );

    let mut editor = Editor::new(document, TtyInput::new(), io::stdout(), width, text_height);
    editor.run().context("session ended with an I/O error")?;

    Ok(())
}
