// src/classify.rs
use log::debug;

use crate::data_types::{ColumnKind, Row};
use crate::parse::{clean_number, is_date, parse_float_prefix};

/// Minimum number of leading populated cells checked for dates.
pub const DATE_SAMPLE_FLOOR: usize = 10;
/// Share of populated cells checked for dates when that exceeds the floor.
pub const DATE_SAMPLE_RATIO: f64 = 0.1;

/// How many leading populated cells the date check looks at.
pub fn date_sample_size(populated: usize) -> usize {
    let ratio = (populated as f64 * DATE_SAMPLE_RATIO).round() as usize;
    populated.min(DATE_SAMPLE_FLOOR.max(ratio))
}

/// Trimmed, non-empty values of `column`, in row order.
pub fn populated_values(rows: &[Row], column: usize) -> Vec<&str> {
    rows.iter()
        .map(|row| row.value(column))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Date check over the leading sample only. Later rows are never looked at.
pub fn is_date_column(values: &[&str]) -> bool {
    let sample = date_sample_size(values.len());
    values[..sample].iter().all(|value| is_date(value))
}

/// Numeric check over every populated value.
pub fn is_numeric_column(values: &[&str]) -> bool {
    values
        .iter()
        .all(|value| parse_float_prefix(&clean_number(value)).is_some())
}

/// Infers the value type of `column`, falling back date → numeric → text.
///
/// A column with no populated cells is text.
pub fn classify_column(rows: &[Row], column: usize) -> ColumnKind {
    let values = populated_values(rows, column);
    let kind = if values.is_empty() {
        ColumnKind::Text
    } else if is_date_column(&values) {
        ColumnKind::Date
    } else if is_numeric_column(&values) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    };

    debug!(
        "column {} classified as {:?} ({} populated of {} rows)",
        column,
        kind,
        values.len(),
        rows.len()
    );
    kind
}
