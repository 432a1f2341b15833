//! # Camel Dashboard Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Camel Books Dashboard                            │
//! │                                                                         │
//! │  main.rs ────► calls camel_dashboard::run(), maps errors to exit code   │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, records file, terminal UI               │
//! │                                                                         │
//! │  ┌──────────────────────┐                 ┌──────────────────────────┐  │
//! │  │  camel_records.csv   │ ◄── load/save ─ │  LedgerState             │  │
//! │  └──────────────────────┘                 └──────────────────────────┘  │
//! │  ┌──────────────────────┐                                               │
//! │  │ Camel_Report_*.pdf   │ ◄── Ctrl-E export                             │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match camel_dashboard::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("camel-dashboard: {}", e);
            ExitCode::FAILURE
        }
    }
}
