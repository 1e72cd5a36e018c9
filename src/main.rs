//! Quickstep — terminal dance genre explorer.
//!
//! Starts the TUI with the builtin catalog (or a user-supplied YAML one),
//! restoring the terminal on exit.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use quickstep::catalog::Catalog;
use quickstep::tui::App;

#[derive(Debug, Parser)]
#[command(name = "quickstep", version, about = "A terminal-native dance genre explorer")]
struct Cli {
    /// Initial genre id (e.g. classical, hiphop, contemporary, latin).
    #[arg(long)]
    genre: Option<String>,

    /// Initial tempo in BPM (clamped to 60-180).
    #[arg(long, default_value_t = 120.0)]
    tempo: f64,

    /// Initial movement intensity (0-100).
    #[arg(long, default_value_t = 70)]
    intensity: u8,

    /// Start with beat tones muted.
    #[arg(long)]
    mute: bool,

    /// Load the genre catalog from a YAML file instead of the builtin set.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::load_yaml(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("failed to load catalog {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    let mut app = App::new(
        catalog,
        cli.tempo,
        cli.intensity.min(100),
        cli.genre.as_deref(),
        cli.mute,
    );

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| io::Error::other(e.to_string()))?;

    let result = app.run(&mut terminal);

    // Always restore the terminal, even if the loop errored.
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}
