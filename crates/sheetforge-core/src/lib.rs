//! # sheetforge-core
//!
//! Core data structures for the sheetforge spreadsheet writer.
//!
//! This crate provides the fundamental types consumed by the package
//! assembly engine:
//! - [`CellValue`] - Represents cell values (empty, booleans, numbers, text, pictures)
//! - [`CellStyle`] and [`Alignment`] - Cell formatting
//! - [`Workbook`], [`Worksheet`], [`Row`] - The main document structures
//!
//! It is deliberately free of any I/O or serialization logic; the types here
//! are plain data that the `sheetforge-xlsx` crate turns into a package.
//!
//! ## Example
//!
//! ```rust
//! use sheetforge_core::{Cell, Row, Workbook, Worksheet};
//!
//! let mut sheet = Worksheet::new("Sheet1");
//! sheet.push_row(Row::from_cells(vec![Cell::text("Hello"), Cell::number(42.0)]));
//!
//! let mut workbook = Workbook::new("sheetforge");
//! workbook.push_sheet(sheet);
//! ```

pub mod cell;
pub mod column;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellValue, Picture};
pub use column::Column;
pub use row::Row;
pub use style::{Alignment, CellStyle, HorizontalAlignment, VerticalAlignment};
pub use workbook::Workbook;
pub use worksheet::Worksheet;
