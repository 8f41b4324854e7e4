// src/state.rs
use std::collections::HashMap;

use crate::data_types::{SortDirection, TableId};

/// Last direction applied to each (table, column) pair.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    directions: HashMap<(TableId, usize), SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self, table: &TableId, column: usize) -> Option<SortDirection> {
        self.directions.get(&(table.clone(), column)).copied()
    }

    /// Flips the stored direction. The first toggle of a column is ascending.
    pub fn toggle(&mut self, table: &TableId, column: usize) -> SortDirection {
        let next = match self.direction(table, column) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.directions.insert((table.clone(), column), next);
        next
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_per_column() {
        let mut state = SortState::new();
        let table = TableId::new("scores");
        assert_eq!(state.direction(&table, 0), None);
        assert_eq!(state.toggle(&table, 0), SortDirection::Ascending);
        assert_eq!(state.toggle(&table, 0), SortDirection::Descending);
        assert_eq!(state.toggle(&table, 0), SortDirection::Ascending);

        // Other columns keep their own history.
        assert_eq!(state.toggle(&table, 1), SortDirection::Ascending);
        assert_eq!(state.direction(&table, 0), Some(SortDirection::Ascending));
    }

    #[test]
    fn tables_do_not_share_keys() {
        let mut state = SortState::new();
        let first = TableId::from_index(0);
        let second = TableId::from_index(1);
        state.toggle(&first, 2);
        assert_eq!(state.toggle(&second, 2), SortDirection::Ascending);
        assert_eq!(state.toggle(&first, 2), SortDirection::Descending);
        assert_eq!(state.len(), 2);
    }
}
