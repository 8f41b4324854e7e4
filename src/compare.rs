// src/compare.rs
use std::cmp::Ordering;

use crate::data_types::{ColumnKind, SortDirection};
use crate::parse::{parse_number, parse_timestamp};

/// Comparison key of a single cell under a column's inferred kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Timestamp(f64),
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Key for a trimmed cell value.
    pub fn extract(kind: ColumnKind, value: &str) -> Self {
        match kind {
            ColumnKind::Date => SortKey::Timestamp(parse_timestamp(value)),
            ColumnKind::Numeric => SortKey::Number(parse_number(value)),
            ColumnKind::Text => SortKey::Text(value.to_lowercase()),
        }
    }
}

/// Orders two numbers, placing `NaN` after every real value.
///
/// `NaN`s tie with each other, and `-0.0` ties with `0.0`.
pub fn compare_numbers(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

pub fn compare_text(x: &str, y: &str) -> Ordering {
    x.cmp(y)
}

/// Ascending order of two keys of the same column.
pub fn compare_ascending(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Timestamp(x), SortKey::Timestamp(y)) => compare_numbers(*x, *y),
        (SortKey::Number(x), SortKey::Number(y)) => compare_numbers(*x, *y),
        (SortKey::Text(x), SortKey::Text(y)) => compare_text(x, y),
        // Keys of one sort all come from the same column kind.
        _ => Ordering::Equal,
    }
}

pub fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    let ordering = compare_ascending(a, b);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
