use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TableError;

static MISSING: Cell = Cell::Missing;

/// One sheet cell. `Missing` serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Cell::Missing => "missing",
            Cell::Bool(_) => "bool",
            Cell::Int(_) => "int",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Bool(v) => write!(f, "{v}"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

/// A named sheet: ordered columns, ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, columns: &[S]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row; rows shorter than the header are padded with `Missing`.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        debug_assert!(row.len() <= self.columns.len(), "row wider than header");
        row.resize(self.columns.len(), Cell::Missing);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::MissingColumn {
                sheet: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// Resolves every column or reports the first one absent.
    pub fn require_columns(&self, names: &[&str]) -> Result<Vec<usize>, TableError> {
        names.iter().map(|n| self.require_column(n)).collect()
    }

    pub fn row_views(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(move |(index, cells)| RowView {
                table: self,
                index,
                cells,
            })
    }
}

/// Borrowed row with typed, error-reporting accessors.
pub struct RowView<'a> {
    table: &'a Table,
    index: usize,
    cells: &'a [Cell],
}

impl<'a> RowView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cell(&self, col: usize) -> &'a Cell {
        self.cells.get(col).unwrap_or(&MISSING)
    }

    pub fn bad(&self, col: usize, message: impl Into<String>) -> TableError {
        TableError::BadCell {
            sheet: self.table.name.clone(),
            row: self.index,
            column: self.table.columns.get(col).cloned().unwrap_or_default(),
            message: message.into(),
        }
    }

    pub fn text(&self, col: usize) -> Result<&'a str, TableError> {
        let cell = self.cell(col);
        cell.as_str()
            .ok_or_else(|| self.bad(col, format!("expected text, found {}", cell.kind())))
    }

    pub fn int(&self, col: usize) -> Result<i64, TableError> {
        let cell = self.cell(col);
        cell.as_i64()
            .ok_or_else(|| self.bad(col, format!("expected int, found {}", cell.kind())))
    }

    pub fn float(&self, col: usize) -> Result<f64, TableError> {
        let cell = self.cell(col);
        cell.as_f64()
            .ok_or_else(|| self.bad(col, format!("expected number, found {}", cell.kind())))
    }

    pub fn boolean(&self, col: usize) -> Result<bool, TableError> {
        let cell = self.cell(col);
        cell.as_bool()
            .ok_or_else(|| self.bad(col, format!("expected bool, found {}", cell.kind())))
    }

    /// Non-negative integer that fits `T`.
    pub fn count<T: TryFrom<i64>>(&self, col: usize) -> Result<T, TableError> {
        let v = self.int(col)?;
        T::try_from(v).map_err(|_| self.bad(col, format!("value {v} out of range")))
    }

    /// Text cell parsed with `FromStr`.
    pub fn parsed<T>(&self, col: usize) -> Result<T, TableError>
    where
        T: std::str::FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.text(col)?;
        raw.parse::<T>().map_err(|e| self.bad(col, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_serializes_as_null() {
        let row = vec![Cell::Missing, Cell::Int(3), Cell::Float(2.5), Cell::text("x"), Cell::Bool(true)];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[null,3,2.5,"x",true]"#);
        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut t = Table::new("S", &["a", "b", "c"]);
        t.push_row(vec![Cell::Int(1)]);
        assert_eq!(t.rows[0], vec![Cell::Int(1), Cell::Missing, Cell::Missing]);
    }

    #[test]
    fn typed_accessors_report_sheet_row_and_column() {
        let mut t = Table::new("Sales", &["Year"]);
        t.push_row(vec![Cell::text("abc")]);
        let row = t.row_views().next().unwrap();
        let err = row.int(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sheet `Sales` row 0 column `Year`: expected int, found text"
        );
    }

    #[test]
    fn require_column_names_the_sheet() {
        let t = Table::new("HR", &["ID"]);
        let err = t.require_column("Year").unwrap_err();
        assert!(err.is_source_unavailable());
        assert_eq!(err.to_string(), "sheet `HR` has no column `Year`");
    }
}
