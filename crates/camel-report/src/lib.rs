//! # camel-report: Daily Report Exporter
//!
//! Writes the whole record set and its totals to a paginated PDF.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RecordSet + currency label                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReportLayout::build()  (layout.rs, pure)                              │
//! │       │   title, one line per record, page breaks, summary block       │
//! │       ▼                                                                 │
//! │  render_pdf()           (pdf.rs)                                       │
//! │       │   printpdf, Helvetica / Helvetica-Bold                         │
//! │       ▼                                                                 │
//! │  {dir}/Camel_Report_YYYYMMDD.pdf                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use camel_core::RecordSet;
//! use chrono::NaiveDate;
//!
//! let records = RecordSet::new();
//! let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let path = camel_report::export_report(&records, ".", day, "KES")?;
//! assert!(path.ends_with("Camel_Report_20250314.pdf"));
//! # Ok::<(), camel_report::ReportError>(())
//! ```

pub mod error;
pub mod layout;
pub mod pdf;

use std::path::{Path, PathBuf};

use camel_core::RecordSet;
use chrono::NaiveDate;
use tracing::info;

pub use error::{ReportError, ReportResult};
pub use layout::{FontWeight, Page, PlacedLine, ReportLayout};

/// Heading printed at the top of the first page.
pub const REPORT_TITLE: &str = "Camel Meat Business Daily Report";

/// `Camel_Report_YYYYMMDD.pdf` for the given day.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Camel_Report_{}.pdf", date.format("%Y%m%d"))
}

/// Lays out and renders the report into `dir`, overwriting any report
/// already exported for `date`. Returns the path written.
pub fn export_report(
    records: &RecordSet,
    dir: impl AsRef<Path>,
    date: NaiveDate,
    label: &str,
) -> ReportResult<PathBuf> {
    let path = dir.as_ref().join(report_file_name(date));
    let layout = ReportLayout::build(records, label)?;

    pdf::render_pdf(&layout, &path)?;

    info!(
        path = %path.display(),
        records = records.len(),
        pages = layout.pages().len(),
        "Exported report"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(report_file_name(day), "Camel_Report_20250304.pdf");
    }

    #[test]
    fn test_export_same_day_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let first = export_report(&RecordSet::new(), dir.path(), day, "KES").unwrap();
        let second = export_report(&RecordSet::new(), dir.path(), day, "KES").unwrap();

        assert_eq!(first, second);
        assert_eq!(first, dir.path().join("Camel_Report_20250314.pdf"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
