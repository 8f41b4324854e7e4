// src/controller.rs
use log::debug;

use crate::data_types::{Header, Row, SortDirection, TableData, TableId};
use crate::indicator::apply_indicator;
use crate::sorter::{apply_order, sort_order};
use crate::state::SortState;

/// What a sorter needs from a rendered table.
pub trait SortableTable {
    fn table_id(&self) -> &TableId;

    fn headers(&self) -> &[Header];

    /// Data rows only, in current display order.
    fn rows(&self) -> &[Row];

    /// Re-attaches the data rows so that position `i` holds `rows()[order[i]]`.
    fn reorder(&mut self, order: &[usize]);

    fn set_indicator(&mut self, column: usize, direction: SortDirection);
}

/// Columns a user can click: the explicitly marked ones, or every header
/// with text when none is marked.
pub fn sortable_columns(headers: &[Header]) -> Vec<usize> {
    let marked: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.sortable)
        .map(|(index, _)| index)
        .collect();

    if !marked.is_empty() {
        return marked;
    }

    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.text.is_empty())
        .map(|(index, _)| index)
        .collect()
}

/// Drives header clicks for any number of tables.
#[derive(Debug, Default)]
pub struct TableSorter {
    state: SortState,
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Handles a click on the header of `column`.
    ///
    /// Returns the direction applied, or `None` when the column is not
    /// clickable on this table.
    pub fn click<T>(&mut self, table: &mut T, column: usize) -> Option<SortDirection>
    where
        T: SortableTable + ?Sized,
    {
        if !sortable_columns(table.headers()).contains(&column) {
            debug!("ignoring click on column {} of {}", column, table.table_id());
            return None;
        }

        let direction = self.state.toggle(table.table_id(), column);
        let outcome = sort_order(table.rows(), column, direction);
        table.reorder(&outcome.order);
        table.set_indicator(column, direction);
        Some(direction)
    }
}

impl SortableTable for TableData {
    fn table_id(&self) -> &TableId {
        &self.id
    }

    fn headers(&self) -> &[Header] {
        &self.headers
    }

    fn rows(&self) -> &[Row] {
        self.data_rows()
    }

    fn reorder(&mut self, order: &[usize]) {
        let start = self.data_start();
        let mut body = self.rows.split_off(start);
        apply_order(&mut body, order);
        self.rows.append(&mut body);
    }

    fn set_indicator(&mut self, column: usize, direction: SortDirection) {
        let selectable = sortable_columns(&self.headers);
        apply_indicator(&mut self.headers, &selectable, column, direction);
    }
}
