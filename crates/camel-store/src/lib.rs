//! # camel-store: Records File for Camel Books
//!
//! This crate reads and writes the CSV file that holds every sale.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Camel Books Data Flow                             │
//! │                                                                         │
//! │  Dashboard startup               Dashboard submit                       │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   camel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CsvStore    │    │    schema     │    │    error     │  │   │
//! │  │   │  (store.rs)   │    │  (schema.rs)  │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load()        │◄───│ COLUMNS       │    │ StoreError   │  │   │
//! │  │   │ save()        │    │ StoredRow     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     camel_records.csv                           │   │
//! │  │   Date,Item,Quantity,Buying Price,Selling Price,Revenue,...     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use camel_store::{CsvStore, RecordStore};
//!
//! let store = CsvStore::new("camel_records.csv");
//! let records = store.load()?;
//! store.save(&records)?;
//! # Ok::<(), camel_store::StoreError>(())
//! ```

pub mod error;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use schema::COLUMNS;
pub use store::{CsvStore, RecordStore};
