//! # Entry Commands

use camel_core::{Derived, EntryForm, SaleRecord, Summary};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::LedgerState;

/// What the user sees after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryConfirmation {
    /// Position of the new record in the set.
    pub index: usize,
    pub record: SaleRecord,
    pub figures: Derived,
}

impl EntryConfirmation {
    /// `Record added successfully! Profit: 1,650 KES`
    pub fn message(&self, label: &str) -> String {
        format!(
            "Record added successfully! Profit: {}",
            self.figures.profit.format_with_label(label)
        )
    }
}

/// Validates the form, appends the record and saves the whole set.
///
/// A record that would push the set totals past the cent range is rejected
/// before it is appended. On a save failure the record has still been
/// appended in memory, but no confirmation is returned.
pub fn submit_entry(ledger: &mut LedgerState, form: &EntryForm) -> AppResult<EntryConfirmation> {
    debug!(item = %form.item, quantity = form.quantity, "submit_entry command");

    let record = form.submit()?;
    let figures = Derived::of(&record);

    Summary::from_records(ledger.records())?
        .unwrap_or_default()
        .with_record(&record)?;

    let index = ledger.append_and_save(record.clone())?;

    info!(
        index,
        revenue = %figures.revenue,
        profit = %figures.profit,
        "Record added"
    );

    Ok(EntryConfirmation {
        index,
        record,
        figures,
    })
}
