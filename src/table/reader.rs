//! Loading delimited text files into a [`Table`].

use super::{Table, Value};
use crate::config::TableConfig;
use crate::error::{CleanError, Result};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Reads a delimited file with a header row.
///
/// A zero-byte file is rejected with `EmptyInput` before any parsing.
pub fn read_table(path: &Path, config: &TableConfig) -> Result<Table> {
    if !path.exists() {
        return Err(CleanError::FileNotFound(path.to_path_buf()));
    }
    if fs::metadata(path)?.len() == 0 {
        warn!("File {} is empty", path.display());
        return Err(CleanError::EmptyInput(path.to_path_buf()));
    }

    let table = read_table_from(File::open(path)?, config)?;
    debug!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.width(),
        path.display()
    );
    Ok(table)
}

/// Reads delimited data with a header row from any reader.
pub fn read_table_from<R: Read>(reader: R, config: &TableConfig) -> Result<Table> {
    if !config.delimiter.is_ascii() {
        return Err(CleanError::Config(format!(
            "delimiter must be a single ASCII character, got {:?}",
            config.delimiter
        )));
    }
    let delimiter = config.delimiter as u8;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(Value::from).collect());
    }

    Table::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::io::{Cursor, Write};
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    /// Keeps formatted warnings so tests can look for them.
    struct CaptureLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.records.lock() {
                    records.push((record.level(), record.args().to_string()));
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    fn captured() -> &'static CaptureLogger {
        // the logger is process-wide; later installs are no-ops
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Warn);
        &LOGGER
    }

    #[test]
    fn test_semicolon_delimited() {
        let data = "id;text\n1;Hello, world\n2;\"quoted; with delimiter\"\n";
        let table = read_table_from(Cursor::new(data), &TableConfig::default()).unwrap();

        assert_eq!(table.headers(), &["id", "text"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(0).unwrap().get("text").and_then(Value::as_text), Some("Hello, world"));
        assert_eq!(
            table.row(1).unwrap().get("text").and_then(Value::as_text),
            Some("quoted; with delimiter")
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let config = TableConfig {
            delimiter: ',',
            ..TableConfig::default()
        };
        let table = read_table_from(Cursor::new("a,b\n1,2\n"), &config).unwrap();
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn test_header_only() {
        let table = read_table_from(Cursor::new("id;text\n"), &TableConfig::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn test_ragged_record() {
        let result = read_table_from(Cursor::new("a;b\n1;2;3\n"), &TableConfig::default());
        assert!(matches!(result, Err(CleanError::Csv(_))));
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let config = TableConfig {
            delimiter: '→',
            ..TableConfig::default()
        };
        let result = read_table_from(Cursor::new("a→b\n"), &config);
        assert!(matches!(result, Err(CleanError::Config(_))));
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let result = read_table(file.path(), &TableConfig::default());
        assert!(matches!(result, Err(CleanError::EmptyInput(_))));
    }

    #[test]
    fn test_empty_file_logs_warning() {
        let logger = captured();
        let file = NamedTempFile::new().unwrap();
        let expected = format!("File {} is empty", file.path().display());

        let result = read_table(file.path(), &TableConfig::default());
        assert!(matches!(result, Err(CleanError::EmptyInput(_))));

        let records = logger.records.lock().unwrap();
        assert!(records
            .iter()
            .any(|(level, message)| *level == Level::Warn && *message == expected));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id;text").unwrap();
        writeln!(file, "1;cats").unwrap();

        let table = read_table(file.path(), &TableConfig::default()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = read_table(Path::new("/nonexistent/table.csv"), &TableConfig::default());
        assert!(matches!(result, Err(CleanError::FileNotFound(_))));
    }
}
