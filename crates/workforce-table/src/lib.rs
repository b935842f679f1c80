//! Tabular I/O for Workforce Synth
//!
//! The generators only ever see typed records; this crate is the boundary
//! where records become named sheets of loosely-typed cells and back:
//!
//! - `Cell` / `Table`: an ordered sheet with named columns
//! - `Workbook`: read a named sheet, write (append or replace) a named sheet
//! - `JsonWorkbook`: file-backed workbook, one JSON document per workbook
//! - `codec`: `Employee` / `PsychometricProfile` / `PerformanceRecord` ↔ `Table`
//!
//! Sheet writes are independent: a failure while writing one sheet leaves
//! previously written sheets on disk as they were.

pub mod codec;
pub mod error;
pub mod table;
pub mod workbook;

pub use error::TableError;
pub use table::{Cell, RowView, Table};
pub use workbook::{JsonWorkbook, MemoryWorkbook, Workbook};
