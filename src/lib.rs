// src/lib.rs
//! Click-to-sort tables.
//!
//! Each sort infers the clicked column's type from its current cells (date,
//! then numeric, then text) and reorders the table's data rows by it. A
//! [`TableSorter`] remembers the last direction per table and column, and
//! talks to the rendered table through [`SortableTable`].

pub mod classify;
pub mod compare;
pub mod controller;
pub mod csv_handler;
pub mod data_types;
pub mod error;
pub mod indicator;
pub mod parse;
pub mod sorter;
pub mod state;

pub use classify::classify_column;
pub use compare::{compare_keys, SortKey};
pub use controller::{sortable_columns, SortableTable, TableSorter};
pub use csv_handler::{CSVHandler, CsvOptions};
pub use data_types::{
    Cell, CellKind, ColumnKind, DataSource, Header, Row, SortDirection, TableData, TableId,
};
pub use error::{Error, Result};
pub use sorter::{sort_order, sort_rows, SortOutcome};
pub use state::SortState;
