// src/data_types.rs
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(PathBuf),
}

/// Identity of a table within one [`TableSorter`](crate::TableSorter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        TableId(id.into())
    }

    /// Id handed to tables that don't carry one, based on load order.
    pub fn from_index(index: usize) -> Self {
        TableId(format!("sortable-table-{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Value type inferred for a column at sort time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Date,
    Numeric,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub kind: CellKind,
}

impl Cell {
    pub fn data(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            kind: CellKind::Data,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            kind: CellKind::Header,
        }
    }

    pub fn value(&self) -> &str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Builds a data row from plain cell texts.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row {
            cells: texts.into_iter().map(Cell::data).collect(),
        }
    }

    pub fn is_data(&self) -> bool {
        self.cells.iter().all(|cell| cell.kind != CellKind::Header)
    }

    /// Trimmed text at `column`. Missing cells read as empty.
    pub fn value(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", Cell::value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    pub text: String,
    /// Explicitly marked as a sortable column.
    pub sortable: bool,
}

impl Header {
    pub fn new(text: impl Into<String>) -> Self {
        Header {
            text: text.into(),
            sortable: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Header {
            text: text.into(),
            sortable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub id: TableId,
    pub headers: Vec<Header>,
    /// Body rows. Leading rows holding header cells stay in place when sorting.
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(id: TableId, headers: Vec<Header>, rows: Vec<Row>) -> Self {
        TableData { id, headers, rows }
    }

    pub fn empty() -> Self {
        TableData {
            id: TableId::from_index(0),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Index of the first body row without header cells.
    pub fn data_start(&self) -> usize {
        crate::sorter::data_start(&self.rows)
    }

    pub fn data_rows(&self) -> &[Row] {
        &self.rows[self.data_start()..]
    }
}
