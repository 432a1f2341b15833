//! # Report Commands

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::AppResult;
use crate::state::{ConfigState, LedgerState};

/// Exports today's report into the configured directory.
///
/// The directory is created if missing. Re-exporting on the same day
/// overwrites the earlier file.
pub fn export_report(
    ledger: &LedgerState,
    config: &ConfigState,
    today: NaiveDate,
) -> AppResult<PathBuf> {
    debug!(dir = %config.report_dir.display(), "export_report command");

    std::fs::create_dir_all(&config.report_dir)?;
    let path = camel_report::export_report(
        ledger.records(),
        &config.report_dir,
        today,
        &config.currency_label,
    )?;

    Ok(path)
}
