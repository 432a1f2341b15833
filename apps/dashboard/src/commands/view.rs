//! # View Commands
//!
//! Turns the record set into what the table and metrics panes draw.
//! Derived columns are recomputed here on every call.

use camel_core::{derive_all, CoreResult, RecordSet, Summary};

/// Column headers of the records table, in file order.
pub const TABLE_HEADERS: [&str; 15] = camel_store::COLUMNS;

/// One table row per record, insertion order, source and derived columns.
pub fn table_rows(records: &RecordSet) -> Vec<[String; 15]> {
    records
        .iter()
        .zip(derive_all(records))
        .map(|(r, d)| {
            [
                r.date.format("%Y-%m-%d").to_string(),
                r.item.label().to_string(),
                r.quantity.to_string(),
                r.buying_price.to_string(),
                r.selling_price.to_string(),
                d.revenue.to_string(),
                d.cogs.to_string(),
                d.profit.to_string(),
                r.payment_method.label().to_string(),
                r.debt.to_string(),
                r.expenses.transport.to_string(),
                r.expenses.workers.to_string(),
                r.expenses.slaughter.to_string(),
                r.expenses.other.to_string(),
                d.total_expenses.to_string(),
            ]
        })
        .collect()
}

/// `(name, "1,650 KES")` pairs for the metrics pane, or `None` when there
/// are no records.
pub fn metric_lines(
    records: &RecordSet,
    label: &str,
) -> CoreResult<Option<Vec<(&'static str, String)>>> {
    let summary = Summary::from_records(records)?;
    Ok(summary.map(|summary| {
        summary
            .lines()
            .into_iter()
            .map(|(name, amount)| (name, amount.format_with_label(label)))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sale;
    use camel_core::{Money, PaymentMethod};

    #[test]
    fn test_rows_follow_headers() {
        let records = RecordSet::from_records(vec![sale(10)]);
        let rows = table_rows(&records);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        let cell = |name: &str| {
            let idx = TABLE_HEADERS.iter().position(|h| *h == name).unwrap();
            row[idx].as_str()
        };
        assert_eq!(cell("Date"), "2025-03-14");
        assert_eq!(cell("Item"), "Camel Meat");
        assert_eq!(cell("Revenue"), "5000");
        assert_eq!(cell("COGS"), "3000");
        assert_eq!(cell("Profit"), "2000");
        assert_eq!(cell("Total Expenses"), "0");
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let records = RecordSet::from_records(vec![sale(3), sale(1), sale(2)]);
        let quantities: Vec<String> = table_rows(&records).into_iter().map(|r| r[2].clone()).collect();
        assert_eq!(quantities, ["3", "1", "2"]);
    }

    #[test]
    fn test_no_metrics_for_empty_set() {
        assert!(metric_lines(&RecordSet::new(), "KES").unwrap().is_none());
    }

    #[test]
    fn test_metric_formatting() {
        let mut debt_sale = sale(10);
        debt_sale.payment_method = PaymentMethod::Debt;
        debt_sale.debt = Money::from_major(500);
        let records = RecordSet::from_records(vec![sale(10), debt_sale]);

        let lines = metric_lines(&records, "KES").unwrap().unwrap();
        assert_eq!(lines[0], ("Total Revenue", "10,000 KES".to_string()));
        assert_eq!(lines[3], ("Total Profit", "3,500 KES".to_string()));
        assert_eq!(lines[4], ("Total Debt", "500 KES".to_string()));
    }

    #[test]
    fn test_metrics_report_overflowing_totals() {
        let mut huge = sale(1);
        huge.selling_price = Money::from_major(50_000_000_000_000_000);
        let records = RecordSet::from_records(vec![huge.clone(), huge]);

        assert!(metric_lines(&records, "KES").is_err());
    }
}
