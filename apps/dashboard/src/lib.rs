//! # Camel Dashboard Library
//!
//! Core library for the Camel Books terminal dashboard.
//! `run()` wires configuration, logging, the records file and the TUI.
//!
//! ## Module Organization
//! ```text
//! camel_dashboard/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── ledger.rs   ◄─── Record set + store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── entry.rs    ◄─── Submit a sale
//! │   ├── view.rs     ◄─── Table rows and metrics
//! │   └── report.rs   ◄─── PDF export
//! ├── tui/
//! │   ├── app.rs      ◄─── Form buffers, focus, status line
//! │   └── ui.rs       ◄─── Terminal loop, keys, drawing
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## State Management
//! Two focused state types instead of one big struct:
//!
//! ```text
//! ┌──────────────────────────┐ ┌──────────────────────────┐
//! │    LedgerState           │ │    ConfigState           │
//! │                          │ │                          │
//! │  • RecordSet             │ │  • data_file             │
//! │  • Box<dyn RecordStore>  │ │  • report_dir            │
//! │                          │ │  • currency_label        │
//! └──────────────────────────┘ └──────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod tui;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use camel_store::CsvStore;
use chrono::Local;
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppResult;
use state::{ConfigState, LedgerState};
use tui::App;

const LOG_FILE_NAME: &str = "dashboard.log";

/// Runs the dashboard.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Dashboard Startup                                 │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to dashboard.log      │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Config ──────────────────────────────────────────────────────► │
/// │     • $CAMEL_CONFIG or the platform config dir, then env overrides      │
/// │                                                                         │
/// │  3. Load Records ─────────────────────────────────────────────────────► │
/// │     • Missing file: empty set                                           │
/// │     • Malformed file: startup fails with the bad row                    │
/// │                                                                         │
/// │  4. Run Terminal UI ──────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing(&log_dir());

    info!("Starting Camel Books dashboard");

    let config = ConfigState::load_or_default(ConfigState::config_path_from_env());
    info!(data_file = %config.data_file.display(), "Config loaded");

    let store = CsvStore::new(&config.data_file);
    // A malformed file stops here; the conversion logs the bad row.
    let ledger = LedgerState::load(Box::new(store))?;

    let app = App::new(ledger, config, Local::now().date_naive());
    tui::run_tui(app)
}

/// `~/.config/camel-books` and `~/.local/share/camel-books` on Linux.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "camelbooks", "camel-books")
}

/// Platform data dir, or the working directory when there is none.
fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Initializes the tracing subscriber.
///
/// The terminal belongs to the UI, so log lines go to `dashboard.log`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=camel_store=trace` - Show trace for the store only
/// - Default: INFO, DEBUG for the camel crates
fn init_tracing(dir: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,camel_core=debug,camel_store=debug,camel_report=debug,camel_dashboard=debug")
    });

    let Some(file) = open_log_file(dir) else {
        return;
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn open_log_file(dir: &Path) -> Option<File> {
    let open = |dir: &Path| -> std::io::Result<File> {
        std::fs::create_dir_all(dir)?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))
    };

    open(dir).or_else(|_| open(Path::new("."))).ok()
}
