//! # Seed Data Generator
//!
//! Writes a demonstration records file for development.
//!
//! ## Usage
//! ```bash
//! # 30 records into ./camel_records.csv (default)
//! cargo run -p camel-store --bin seed
//!
//! # Custom amount
//! cargo run -p camel-store --bin seed -- --count 200
//!
//! # Specify file path
//! cargo run -p camel-store --bin seed -- --path ./data/camel_records.csv
//! ```
//!
//! ## Generated Records
//! One sale per day going back from today, cycling through the three items
//! and three payment methods. Every fifth sale is on debt. Amounts are
//! deterministic so two runs with the same count produce the same file
//! (apart from the dates).

use std::env;
use std::path::Path;

use camel_core::{Expenses, Item, Money, PaymentMethod, RecordSet, SaleRecord};
use camel_store::{CsvStore, RecordStore};
use chrono::{Duration, Local, NaiveDate};

/// Buying and selling price per kg, in whole units, by item.
const PRICES: &[(Item, i64, i64)] = &[
    (Item::Meat, 550, 800),
    (Item::Liver, 400, 650),
    (Item::Sarara, 250, 400),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 30;
    let mut path = String::from("./camel_records.csv");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--path" | "-p" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Camel Books Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of records to generate (default: 30)");
                println!("  -p, --path <PATH>   Records file path (default: ./camel_records.csv)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Camel Books Seed Data Generator");
    println!("==================================");
    println!("File:    {}", path);
    println!("Records: {}", count);
    println!();

    if Path::new(&path).exists() {
        println!("⚠ {} already exists", path);
        println!("  Skipping seed to avoid overwriting real records.");
        println!("  Delete the file to regenerate.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut records = RecordSet::new();
    for seed in 0..count {
        // Oldest first, so the file reads in entry order.
        let date = today - Duration::days((count - 1 - seed) as i64);
        records.append(generate_record(date, seed));
    }

    let store = CsvStore::new(&path);
    store.save(&records)?;
    println!("✓ Wrote {} records", records.len());

    let reloaded = store.load()?;
    println!("✓ Reloaded {} records", reloaded.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one sale on `date`.
fn generate_record(date: NaiveDate, seed: usize) -> SaleRecord {
    let (item, buying, selling) = PRICES[seed % PRICES.len()];
    let payment_method = if seed % 5 == 4 {
        PaymentMethod::Debt
    } else {
        PaymentMethod::ALL[seed % 2]
    };

    let quantity = 5 + ((seed * 7) % 40) as i64;
    let debt = if payment_method.is_debt() {
        Money::from_major(selling * quantity / 4)
    } else {
        Money::zero()
    };

    SaleRecord {
        date,
        item,
        quantity,
        buying_price: Money::from_major(buying),
        selling_price: Money::from_major(selling),
        payment_method,
        debt,
        expenses: Expenses {
            transport: Money::from_major(100 + ((seed * 13) % 5) as i64 * 50),
            workers: Money::from_major(200),
            slaughter: Money::from_major(if item == Item::Meat { 150 } else { 0 }),
            other: Money::from_major(((seed * 11) % 3) as i64 * 50),
        },
    }
}

