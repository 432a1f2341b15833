//! # Report Layout
//!
//! Decides what text goes where, without touching a PDF.
//!
//! ## Page Geometry (A4, points, origin bottom-left)
//! ```text
//! ┌──────────────────────────────────────────┐ 842
//! │                                          │
//! │            Camel Meat Business ...       │ 800  title, bold 14pt, x=180
//! │                                          │
//! │  2025-03-14 | Camel Meat | Qty: 10 | ... │ 770  first record, 12pt, x=30
//! │  2025-03-15 | Camel Liver | Qty: 4 | ... │ 750
//! │  ...                                     │      20pt per line
//! │                                          │
//! │  Total Revenue: 7,000 KES                │      40pt gap, then five
//! │  Total COGS: 4,200 KES                   │      bold lines 20pt apart
//! │  ...                                     │
//! │- - - - - - - - - - - - - - - - - - - - - │ 60   bottom margin
//! └──────────────────────────────────────────┘ 0
//! ```
//!
//! Continuation pages start at y=800. The summary block is kept whole: if
//! its last line would fall below the margin the block starts a new page.

use camel_core::{derive_all, Derived, Money, RecordSet, SaleRecord, Summary};

use crate::error::ReportResult;
use crate::REPORT_TITLE;

// =============================================================================
// Geometry
// =============================================================================

pub const PAGE_WIDTH_PT: f32 = 595.0;
pub const PAGE_HEIGHT_PT: f32 = 842.0;

pub const TITLE_X: f32 = 180.0;
pub const TITLE_Y: f32 = 800.0;
pub const TITLE_SIZE: f32 = 14.0;

pub const LINE_X: f32 = 30.0;
pub const FIRST_LINE_Y: f32 = 770.0;
pub const LINE_STEP: f32 = 20.0;
pub const BODY_SIZE: f32 = 12.0;

/// Lines are never placed below this.
pub const BOTTOM_MARGIN: f32 = 60.0;

/// Cursor position at the top of a continuation page.
pub const PAGE_TOP: f32 = 800.0;

/// Space between the last record line and the summary block.
pub const SUMMARY_GAP: f32 = 40.0;

/// Text shown instead of record lines when there is nothing to report.
pub const EMPTY_NOTICE: &str = "No records.";

// =============================================================================
// Layout Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

impl Page {
    /// Line texts in placement order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// The full report, page by page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pages: Vec<Page>,
}

impl ReportLayout {
    /// Lays out the title, one line per record and the summary block.
    ///
    /// An empty set gets the title and [`EMPTY_NOTICE`] only. Fails when the
    /// summary totals overflow.
    pub fn build(records: &RecordSet, label: &str) -> ReportResult<Self> {
        let mut layout = ReportLayout {
            pages: vec![Page::default()],
        };
        layout.place(REPORT_TITLE.to_string(), TITLE_X, TITLE_Y, TITLE_SIZE, FontWeight::Bold);

        let Some(summary) = Summary::from_records(records)? else {
            layout.place(
                EMPTY_NOTICE.to_string(),
                LINE_X,
                FIRST_LINE_Y,
                BODY_SIZE,
                FontWeight::Regular,
            );
            return Ok(layout);
        };

        let mut y = FIRST_LINE_Y;
        for (record, figures) in records.iter().zip(derive_all(records)) {
            layout.place(record_line(record, &figures), LINE_X, y, BODY_SIZE, FontWeight::Regular);
            y -= LINE_STEP;
            if y < BOTTOM_MARGIN {
                layout.pages.push(Page::default());
                y = PAGE_TOP;
            }
        }

        let lines = summary.lines();
        let block_height = LINE_STEP * (lines.len() - 1) as f32;
        y -= SUMMARY_GAP;
        if y - block_height < BOTTOM_MARGIN {
            layout.pages.push(Page::default());
            y = PAGE_TOP;
        }

        for (name, amount) in lines {
            layout.place(summary_line(name, amount, label), LINE_X, y, BODY_SIZE, FontWeight::Bold);
            y -= LINE_STEP;
        }

        Ok(layout)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Places a line on the last page.
    fn place(&mut self, text: String, x: f32, y: f32, size: f32, weight: FontWeight) {
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                x,
                y,
                size,
                weight,
            });
        }
    }
}

/// `2025-03-14 | Camel Meat | Qty: 10 | Rev: 5000 | Profit: 1650 | Pay: Cash | Debt: 0`
pub fn record_line(record: &SaleRecord, figures: &Derived) -> String {
    format!(
        "{} | {} | Qty: {} | Rev: {} | Profit: {} | Pay: {} | Debt: {}",
        record.date.format("%Y-%m-%d"),
        record.item.label(),
        record.quantity,
        figures.revenue,
        figures.profit,
        record.payment_method.label(),
        record.debt,
    )
}

/// `Total Revenue: 5,000 KES`
pub fn summary_line(name: &str, amount: Money, label: &str) -> String {
    format!("{}: {}", name, amount.format_with_label(label))
}

// =============================================================================
// Unit Tests
// =============================================================================
