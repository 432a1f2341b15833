//! # Terminal UI
//!
//! ```text
//! crossterm event ──► ui::handle_key_event ──► App (app.rs) ──► commands/
//!                                                 │
//! ui::ui (draw) ◄─────────────────────────────────┘
//! ```

pub mod app;
pub mod ui;

pub use app::{App, Field, FormInput, Status};
pub use ui::run_tui;
