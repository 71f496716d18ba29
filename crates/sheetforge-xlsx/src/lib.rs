//! # sheetforge-xlsx
//!
//! XLSX (Office Open XML) package assembly and writer for sheetforge.
//!
//! [`XlsxWriter::build`] turns a [`sheetforge_core::Workbook`] into a
//! [`Package`]: the logical file tree of a SpreadsheetML package, every
//! cross-reference (relationship ids, shared-string ordinals, style indices,
//! rich-value indices) already consistent. [`XlsxWriter::write`] and friends
//! additionally pack that tree into a compressed .xlsx archive.

pub mod error;
pub mod intern;
pub mod media;
pub mod pack;
pub mod package;
pub mod writer;
pub mod xml;

pub use error::{XlsxError, XlsxResult};
pub use package::Package;
pub use writer::XlsxWriter;
