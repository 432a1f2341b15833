//! # Ledger State
//!
//! The record set for the run, and the store it came from.
//!
//! ## Lifecycle
//! ```text
//! startup ──► load() ──► records ──► append_and_save() ──► ... ──► exit
//!                           │               │
//!                           │               └─ append in memory, then
//!                           │                  rewrite the whole file
//!                           └─ read by the table, metrics and report
//! ```
//!
//! Records are never edited or removed once appended.

use camel_core::{RecordSet, SaleRecord};
use camel_store::{RecordStore, StoreResult};
use tracing::debug;

/// Record set plus its backing store.
pub struct LedgerState {
    store: Box<dyn RecordStore>,
    records: RecordSet,
}

impl std::fmt::Debug for LedgerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerState")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl LedgerState {
    /// Loads every record from `store`.
    pub fn load(store: Box<dyn RecordStore>) -> StoreResult<Self> {
        let records = store.load()?;
        Ok(LedgerState { store, records })
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Appends `record` and persists the full set.
    ///
    /// Returns the new record's index. If the save fails the record stays
    /// in memory and the error is returned.
    pub fn append_and_save(&mut self, record: SaleRecord) -> StoreResult<usize> {
        let index = self.records.append(record);
        debug!(index, total = self.records.len(), "Appended record");
        self.store.save(&self.records)?;
        Ok(index)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use camel_core::{Expenses, Item, Money, PaymentMethod};
    use camel_store::StoreError;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory store that can be told to fail on save.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryStore {
        pub saved: Rc<RefCell<Vec<RecordSet>>>,
        pub fail_save: bool,
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> StoreResult<RecordSet> {
            Ok(self.saved.borrow().last().cloned().unwrap_or_default())
        }

        fn save(&self, records: &RecordSet) -> StoreResult<()> {
            if self.fail_save {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "disk is read-only",
                )));
            }
            self.saved.borrow_mut().push(records.clone());
            Ok(())
        }
    }

    pub(crate) fn sale(quantity: i64) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            item: Item::Meat,
            quantity,
            buying_price: Money::from_major(300),
            selling_price: Money::from_major(500),
            payment_method: PaymentMethod::Cash,
            debt: Money::zero(),
            expenses: Expenses::default(),
        }
    }

    #[test]
    fn test_append_saves_full_set() {
        let store = MemoryStore::default();
        let saved = store.saved.clone();
        let mut ledger = LedgerState::load(Box::new(store)).unwrap();

        assert_eq!(ledger.append_and_save(sale(1)).unwrap(), 0);
        assert_eq!(ledger.append_and_save(sale(2)).unwrap(), 1);

        let history = saved.borrow();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].len(), 2);
        assert_eq!(history[1].get(0), Some(&sale(1)));
    }

    #[test]
    fn test_failed_save_keeps_record_in_memory() {
        let store = MemoryStore {
            fail_save: true,
            ..Default::default()
        };
        let mut ledger = LedgerState::load(Box::new(store)).unwrap();

        assert!(ledger.append_and_save(sale(3)).is_err());
        assert_eq!(ledger.records().len(), 1);
    }
}
