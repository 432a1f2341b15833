//! # Commands Module
//!
//! Everything the terminal UI can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── entry.rs    ◄─── Submit the entry form
//! ├── report.rs   ◄─── Export the daily PDF report
//! └── view.rs     ◄─── Table rows and metric lines
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  tui::ui  (key event)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tui::app::App  (builds an EntryForm from the text buffers)             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::entry::submit_entry(                                         │
//! │      ledger: &mut LedgerState,   ◄── State passed explicitly            │
//! │      form: &EntryForm,                                                  │
//! │  ) -> Result<EntryConfirmation, AppError>                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Status line shows the confirmation or "[CODE] message"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod entry;
pub mod report;
pub mod view;
