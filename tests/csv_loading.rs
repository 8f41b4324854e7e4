use std::io::Write;

use sortable_table::{
    CSVHandler, CsvOptions, Error, SortDirection, SortableTable, TableId, TableSorter,
};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn loads_and_sorts_a_semicolon_file() {
    let file = write_csv("Name;Points;Finished\nBob;1,200;2024-03-02\nalice;950;\nCarol;2,010;2024-01-15\n");

    let data = CSVHandler::new().read_csv(file.path()).await.unwrap();
    assert_eq!(data.headers.len(), 3);
    assert_eq!(data.rows.len(), 3);

    let mut table = data;
    let mut sorter = TableSorter::new();

    assert_eq!(sorter.click(&mut table, 1), Some(SortDirection::Ascending));
    let names: Vec<&str> = table.rows().iter().map(|r| r.value(0)).collect();
    assert_eq!(names, vec!["alice", "Bob", "Carol"]);

    assert_eq!(sorter.click(&mut table, 2), Some(SortDirection::Ascending));
    let names: Vec<&str> = table.rows().iter().map(|r| r.value(0)).collect();
    assert_eq!(names, vec!["alice", "Carol", "Bob"]);
}

#[tokio::test]
async fn options_mark_columns_and_name_the_table() {
    let file = write_csv("Rank,Name,Club\n2,Bob,North\n1,alice,South\n");
    let options = CsvOptions {
        sortable_columns: vec!["RANK".to_string()],
        table_id: Some(TableId::new("results")),
        ..CsvOptions::default()
    };

    let mut table = CSVHandler::with_options(options)
        .read_csv(file.path())
        .await
        .unwrap();
    assert_eq!(table.table_id().as_str(), "results");

    let mut sorter = TableSorter::new();
    assert_eq!(sorter.click(&mut table, 1), None);
    assert_eq!(sorter.click(&mut table, 0), Some(SortDirection::Ascending));
    assert_eq!(table.rows()[0].value(1), "alice");
    assert_eq!(table.headers[0].text, "Rank ▲");
}

#[test]
fn explicit_delimiter_overrides_detection() {
    let file = write_csv("a;b|c\n1;2|3\n");
    let options = CsvOptions {
        delimiter: Some(b'|'),
        ..CsvOptions::default()
    };
    let data = CSVHandler::read_csv_blocking(file.path(), &options).unwrap();
    assert_eq!(data.headers.len(), 2);
    assert_eq!(data.headers[0].text, "a;b");
}

#[tokio::test]
async fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = CSVHandler::new().read_csv(&path).await.unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {}", other),
    }
}
