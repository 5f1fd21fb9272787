//! opnpage - sample personal-stats dashboard for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use opnpage_app::config::{self, Settings};
use opnpage_app::{AppState, FileStore, KeyValueStore, LayoutStore, MemoryStore};
use opnpage_core::prelude::{Error, Result, ResultExt};
use tracing::{error, info, warn};

/// opnpage - sample personal-stats dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "opnpage")]
#[command(about = "A customizable dashboard of personal metrics", long_about = None)]
struct Args {
    /// Directory holding config.toml and storage.json
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Keep the layout in memory only; nothing is read from or written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Discard the saved layout and start from the six default widgets
    #[arg(long)]
    reset_layout: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    opnpage_core::logging::init()?;

    let (backend, settings) = open_storage(&args)?;
    let mut layout = LayoutStore::load(backend);
    if args.reset_layout {
        layout.reset();
    }

    let state = AppState::new(layout, settings);
    let result = opnpage_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("opnpage exiting");
    result
}

/// Pick the persistence backend and load settings for `args`
fn open_storage(args: &Args) -> Result<(Box<dyn KeyValueStore>, Settings)> {
    if args.ephemeral {
        info!("Ephemeral session: layout changes are not saved");
        return Ok((Box::new(MemoryStore::new()), Settings::default()));
    }

    let data_dir = match &args.data_dir {
        Some(dir) => dir.clone(),
        None => config::default_data_dir()?,
    };
    info!("Data directory: {}", data_dir.display());

    if let Err(e) = config::init_config_dir(&data_dir) {
        if e.is_fatal() {
            return Err(e);
        }
        // Settings fall back to defaults without a config file
        warn!("{}", e);
    }
    let settings = config::load_settings(&data_dir);
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open storage in {}", data_dir.display()))?;

    Ok((Box::new(store), settings))
}
