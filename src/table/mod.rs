//! In-memory tables and delimited-file loading.

mod reader;

pub use reader::{read_table, read_table_from};

use crate::error::{CleanError, Result};
use serde::{Deserialize, Serialize};

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Absent marker.
    Null,
    /// Raw text read from storage.
    Text(String),
    /// Ordered lemma list of a derived column.
    Tokens(Vec<String>),
}

impl Value {
    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The token list, if this is a derived cell.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Value::Tokens(t) => Some(t),
            _ => None,
        }
    }

    /// Checks for the absent marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(tokens: Vec<String>) -> Self {
        Value::Tokens(tokens)
    }
}

/// Ordered columns and rows. Every row has one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// A borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Value],
}

impl<'a> Row<'a> {
    /// Cell under `column`, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let cells = self.cells;
        self.headers.iter().position(|h| h == column).map(|i| &cells[i])
    }

    /// Cells in column order.
    pub fn cells(&self) -> &'a [Value] {
        self.cells
    }
}

impl Table {
    /// Creates a table, checking that each row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != headers.len()) {
            return Err(CleanError::Shape(format!(
                "row {} has {} fields, expected {}",
                i,
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    /// Column names in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of `column` in the header.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Position of `column`, or a `MissingColumn` error.
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column).ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
            available: self.headers.clone(),
        })
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(move |cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Iterates the cells of one column.
    pub fn column(&self, column: &str) -> Result<impl Iterator<Item = &Value> + '_> {
        let idx = self.require_column(column)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Returns a table with `values` under `name`.
    ///
    /// An existing column of that name is replaced in place; otherwise the
    /// column is appended at the end.
    pub fn with_column(mut self, name: &str, values: Vec<Value>) -> Result<Self> {
        if values.len() != self.rows.len() {
            return Err(CleanError::Shape(format!(
                "column '{}' has {} values, table has {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(self)
    }
}
