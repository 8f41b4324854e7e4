// src/sorter.rs
use log::debug;

use crate::classify::classify_column;
use crate::compare::{compare_keys, SortKey};
use crate::data_types::{ColumnKind, Row, SortDirection};

/// Index of the first row without header cells, or `rows.len()` if every
/// row is a header row.
pub fn data_start(rows: &[Row]) -> usize {
    rows.iter().position(Row::is_data).unwrap_or(rows.len())
}

/// Result of ordering one column.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    pub kind: ColumnKind,
    /// `order[i]` is the input index of the row that ends up at position `i`.
    pub order: Vec<usize>,
}

/// Classifies `column` and returns the stable sorted order of `rows`.
///
/// Rows that compare equal keep their input order.
pub fn sort_order(rows: &[Row], column: usize, direction: SortDirection) -> SortOutcome {
    let kind = classify_column(rows, column);

    let mut keyed: Vec<(usize, SortKey)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (index, SortKey::extract(kind, row.value(column))))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| compare_keys(a, b, direction));

    debug!(
        "sorted {} rows by column {} ({:?}, {:?})",
        rows.len(),
        column,
        kind,
        direction
    );

    SortOutcome {
        kind,
        order: keyed.into_iter().map(|(index, _)| index).collect(),
    }
}

/// Moves rows into the positions given by `order`, without touching cells.
pub fn apply_order(rows: &mut Vec<Row>, order: &[usize]) {
    let mut slots: Vec<Option<Row>> = rows.drain(..).map(Some).collect();
    rows.extend(order.iter().filter_map(|&index| slots.get_mut(index).and_then(Option::take)));
    // Anything the order skipped keeps its relative position at the end.
    rows.extend(slots.into_iter().flatten());
}

/// Sorts `rows` in place by `column` and returns the inferred kind.
pub fn sort_rows(rows: &mut Vec<Row>, column: usize, direction: SortDirection) -> ColumnKind {
    let outcome = sort_order(rows, column, direction);
    apply_order(rows, &outcome.order);
    outcome.kind
}
