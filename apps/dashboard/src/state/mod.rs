//! # State Module
//!
//! Application state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────────────────┐      ┌────────────────────────────┐    │
//! │  │       LedgerState          │      │       ConfigState          │    │
//! │  │                            │      │                            │    │
//! │  │  RecordSet (in memory)     │      │  data_file                 │    │
//! │  │  Box<dyn RecordStore>      │      │  report_dir                │    │
//! │  │                            │      │  currency_label            │    │
//! │  └────────────────────────────┘      └────────────────────────────┘    │
//! │                                                                         │
//! │  Both are owned by the TUI App and passed explicitly to commands.      │
//! │  There is one thread, so neither needs a lock.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::ConfigState;
pub use ledger::LedgerState;

#[cfg(test)]
pub(crate) use ledger::tests::{sale, MemoryStore};
