//! Workbook type

use crate::worksheet::Worksheet;

/// A workbook: the root of the document model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    /// Producing application name, written to the extended properties part
    pub app_name: String,
    /// Worksheets in display order
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new<S: Into<String>>(app_name: S) -> Self {
        Self {
            app_name: app_name.into(),
            sheets: Vec::new(),
        }
    }

    /// Append a worksheet
    pub fn push_sheet(&mut self, sheet: Worksheet) {
        self.sheets.push(sheet);
    }

    /// Number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}
