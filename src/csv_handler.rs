// src/csv_handler.rs
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::{debug, warn};
use tokio::task;

use crate::data_types::{Header, Row, TableData, TableId};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Field delimiter. Detected from the first line when unset.
    pub delimiter: Option<u8>,
    /// Header names (case-insensitive) to mark as sortable.
    pub sortable_columns: Vec<String>,
    pub table_id: Option<TableId>,
}

pub struct CSVHandler {
    options: CsvOptions,
}

impl Default for CSVHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CSVHandler {
    pub fn new() -> Self {
        CSVHandler {
            options: CsvOptions::default(),
        }
    }

    pub fn with_options(options: CsvOptions) -> Self {
        CSVHandler { options }
    }

    pub async fn read_csv(&self, path: impl Into<PathBuf>) -> Result<TableData> {
        let path = path.into();
        let options = self.options.clone();
        task::spawn_blocking(move || Self::read_csv_blocking(&path, &options)).await?
    }

    pub fn read_csv_blocking(path: &Path, options: &CsvOptions) -> Result<TableData> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let delimiter = match options.delimiter {
            Some(delimiter) => delimiter,
            None => Self::detect_delimiter(File::open(path).map_err(io_error)?),
        };
        let file = File::open(path).map_err(io_error)?;

        let data = Self::read_from(file, delimiter, options)?;
        debug!(
            "loaded {} rows, {} columns from {}",
            data.rows.len(),
            data.headers.len(),
            path.display()
        );
        Ok(data)
    }

    pub fn read_from<R: Read>(source: R, delimiter: u8, options: &CsvOptions) -> Result<TableData> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(source);

        let header_names: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if header_names.is_empty() {
            return Err(Error::MissingHeader);
        }
        let headers = Self::mark_headers(header_names, &options.sortable_columns);

        let mut rows = Vec::new();
        for (line, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    // Skip empty rows
                    if record.iter().all(|field| field.trim().is_empty()) {
                        continue;
                    }
                    rows.push(Row::from_texts(record.iter()));
                }
                Err(err) => warn!("skipping record {}: {}", line + 1, err),
            }
        }

        let id = options.table_id.clone().unwrap_or_else(|| TableId::from_index(0));
        Ok(TableData::new(id, headers, rows))
    }

    /// `;` when the first line contains one, `,` otherwise.
    pub fn detect_delimiter<R: Read>(source: R) -> u8 {
        let mut reader = BufReader::new(source);
        let mut first_line = String::new();

        if reader.read_line(&mut first_line).is_ok() && first_line.contains(';') {
            return b';';
        }

        b','
    }

    fn mark_headers(names: Vec<String>, sortable: &[String]) -> Vec<Header> {
        names
            .into_iter()
            .map(|name| {
                let marked = sortable
                    .iter()
                    .any(|col| col.trim().eq_ignore_ascii_case(name.trim()));
                Header {
                    text: name,
                    sortable: marked,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_semicolons_on_the_first_line() {
        assert_eq!(CSVHandler::detect_delimiter("a;b\n1;2".as_bytes()), b';');
        assert_eq!(CSVHandler::detect_delimiter("a,b\n1;2".as_bytes()), b',');
        assert_eq!(CSVHandler::detect_delimiter("".as_bytes()), b',');
    }

    #[test]
    fn skips_blank_rows_and_keeps_ragged_ones() {
        let input = "Name,Score\nBob,7\n , \nalice\n";
        let data = CSVHandler::read_from(input.as_bytes(), b',', &CsvOptions::default()).unwrap();
        assert_eq!(data.headers, vec![Header::new("Name"), Header::new("Score")]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[1].value(1), "");
        assert_eq!(data.id, TableId::from_index(0));
    }

    #[test]
    fn marks_configured_columns() {
        let options = CsvOptions {
            sortable_columns: vec!["score".to_string()],
            table_id: Some(TableId::new("results")),
            ..CsvOptions::default()
        };
        let data = CSVHandler::read_from("Name;Score\nBob;7\n".as_bytes(), b';', &options).unwrap();
        assert!(!data.headers[0].sortable);
        assert!(data.headers[1].sortable);
        assert_eq!(data.id.as_str(), "results");
    }

    #[test]
    fn empty_input_has_no_header() {
        let result = CSVHandler::read_from("".as_bytes(), b',', &CsvOptions::default());
        assert!(matches!(result, Err(Error::MissingHeader)));
    }
}
