//! # CSV Store
//!
//! Loads and saves the whole record set.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup          load()   ── whole file → RecordSet                    │
//! │  each submit      save()   ── whole RecordSet → file (overwrite)        │
//! │                                                                         │
//! │  There is no append at this layer and no lock. Last writer wins.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use camel_core::RecordSet;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::schema::{OutRow, StoredRow, COLUMNS};

/// Persistence for the record set.
///
/// The dashboard talks to this trait so tests can swap in a store that
/// fails on save.
pub trait RecordStore {
    /// Reads every record. A store with nothing in it yields an empty set.
    fn load(&self) -> StoreResult<RecordSet>;

    /// Replaces everything stored with `records`.
    fn save(&self, records: &RecordSet) -> StoreResult<()>;
}

/// Record store backed by a single CSV file.
///
/// ## Usage
/// ```rust,no_run
/// use camel_store::{CsvStore, RecordStore};
///
/// let store = CsvStore::new("data/camel_records.csv");
/// let mut records = store.load()?;
/// // ... append ...
/// store.save(&records)?;
/// # Ok::<(), camel_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }

    /// Location of the records file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> StoreResult<RecordSet> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No records file yet, starting empty");
                return Ok(RecordSet::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "Records file lacks columns, filling with zero");
        }

        let mut records = RecordSet::new();
        let mut stale = 0usize;

        for (index, row) in reader.deserialize::<StoredRow>().enumerate() {
            let parsed = row?.into_record(index + 1)?;
            if parsed.stale {
                stale += 1;
            }
            records.append(parsed.record);
        }

        if stale > 0 {
            debug!(stale, "Stored derived columns disagree with recomputed values");
        }
        info!(path = %self.path.display(), count = records.len(), "Loaded records");

        Ok(records)
    }

    fn save(&self, records: &RecordSet) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.serialize(OutRow::from_record(record))?;
        }
        writer.flush()?;

        info!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::io::Write;

    fn write_file(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("records.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("nope.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_header_only_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), &format!("{}\n", COLUMNS.join(",")));
        assert!(CsvStore::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_bad_cell_names_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "Date,Item,Quantity\n2025-03-14,Camel Meat,3\n2025-03-15,Camel Meat,lots\n",
        );
        match CsvStore::new(path).load() {
            Err(StoreError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Quantity");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("records.csv");
        let store = CsvStore::new(&path);

        store.save(&RecordSet::new()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), COLUMNS.join(","));
    }
}
