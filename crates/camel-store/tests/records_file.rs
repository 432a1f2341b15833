//! Round-trips and legacy files through a real records file on disk.

use std::fs;

use camel_core::{derive_all, Expenses, Item, Money, PaymentMethod, RecordSet, SaleRecord};
use camel_store::{CsvStore, RecordStore, StoreError, COLUMNS};
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn record(day: u32, item: Item, quantity: i64, method: PaymentMethod, debt: i64) -> SaleRecord {
    SaleRecord {
        date: date(day),
        item,
        quantity,
        buying_price: Money::from_major(300),
        selling_price: Money::from_major(500),
        payment_method: method,
        debt: Money::from_major(debt),
        expenses: Expenses {
            transport: Money::from_major(200),
            workers: Money::from_major(100),
            slaughter: Money::from_major(50),
            other: Money::zero(),
        },
    }
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("camel_records.csv"));

    let mut records = RecordSet::new();
    records.append(record(14, Item::Meat, 10, PaymentMethod::Cash, 0));
    records.append(record(12, Item::Liver, 3, PaymentMethod::Debt, 500));
    let mut odd = record(13, Item::Sarara, 7, PaymentMethod::MobileMoney, 0);
    odd.selling_price = Money::from_cents(31250);
    records.append(odd);

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_append_then_save_keeps_prior_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("camel_records.csv"));

    let mut records = RecordSet::new();
    records.append(record(14, Item::Meat, 10, PaymentMethod::Cash, 0));
    store.save(&records).unwrap();

    let mut reloaded = store.load().unwrap();
    let before: Vec<SaleRecord> = reloaded.iter().cloned().collect();
    reloaded.append(record(15, Item::Liver, 2, PaymentMethod::Cash, 0));
    store.save(&reloaded).unwrap();

    let after = store.load().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after.as_slice()[..before.len()], before.as_slice());
}

#[test]
fn test_written_header_and_derived_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("camel_records.csv");
    let store = CsvStore::new(&path);

    let mut records = RecordSet::new();
    records.append(record(14, Item::Meat, 10, PaymentMethod::Debt, 500));
    store.save(&records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
    assert_eq!(
        lines.next().unwrap(),
        "2025-03-14,Camel Meat,10,300,500,5000,3000,1150,Debt,500,200,100,50,0,350"
    );
    assert!(lines.next().is_none());
}

#[test]
fn test_legacy_file_missing_columns_is_zero_filled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.csv");
    fs::write(
        &path,
        "Date,Item,Quantity,Buying Price,Selling Price,Revenue,COGS,Profit,Payment Method\n\
         2025-03-14,Camel Meat,10.0,300,500,5000,3000,2000,Cash\n\
         2025/03/15,Camel Liver,4,200,350,1400,800,600,Mpesa\n",
    )
    .unwrap();

    let loaded = CsvStore::new(&path).load().unwrap();
    assert_eq!(loaded.len(), 2);

    let first = loaded.get(0).unwrap();
    assert_eq!(first.quantity, 10);
    assert!(first.debt.is_zero());
    assert_eq!(first.expenses, Expenses::default());

    let second = loaded.get(1).unwrap();
    assert_eq!(second.date, date(15));
    assert_eq!(second.payment_method, PaymentMethod::MobileMoney);

    let figures = derive_all(&loaded);
    assert_eq!(figures[0].profit, Money::from_major(2000));
    assert_eq!(figures[1].profit, Money::from_major(600));
}

#[test]
fn test_stored_derived_values_are_not_trusted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stale.csv");
    fs::write(
        &path,
        format!(
            "{}\n2025-03-14,Camel Meat,10,300,500,1,2,3,Cash,0,200,100,50,0,4\n",
            COLUMNS.join(",")
        ),
    )
    .unwrap();

    let loaded = CsvStore::new(&path).load().unwrap();
    let figures = derive_all(&loaded);

    assert_eq!(figures[0].revenue, Money::from_major(5000));
    assert_eq!(figures[0].cogs, Money::from_major(3000));
    assert_eq!(figures[0].total_expenses, Money::from_major(350));
    assert_eq!(figures[0].profit, Money::from_major(1650));
}

#[test]
fn test_extra_columns_and_blank_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extra.csv");
    fs::write(
        &path,
        "Date,Item,Quantity,Selling Price,Notes,Payment Method,Debt\n\
         2025-03-14,,2,500,paid late,,\n",
    )
    .unwrap();

    let loaded = CsvStore::new(&path).load().unwrap();
    let only = loaded.get(0).unwrap();

    assert_eq!(only.item, Item::Meat);
    assert_eq!(only.payment_method, PaymentMethod::Cash);
    assert!(only.debt.is_zero());
    assert_eq!(derive_all(&loaded)[0].profit, Money::from_major(1000));
}

#[test]
fn test_missing_date_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nodate.csv");
    fs::write(&path, "Item,Quantity\nCamel Meat,2\n").unwrap();

    match CsvStore::new(&path).load() {
        Err(StoreError::MissingValue { row, column }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "Date");
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
}
