//! Worksheet type

use std::collections::BTreeMap;

use crate::column::Column;
use crate::row::Row;

/// A single worksheet: ordered rows plus sparse per-column settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Worksheet {
    /// Sheet name, also used to derive the worksheet part name
    pub name: String,
    /// Rows in top-to-bottom order, starting at row 1
    pub rows: Vec<Row>,
    /// Sparse column settings, keyed by 1-based column number
    pub columns: BTreeMap<u32, Column>,
}

impl Worksheet {
    /// Create an empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            columns: BTreeMap::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Set settings for a 1-based column number
    pub fn set_column(&mut self, number: u32, column: Column) {
        self.columns.insert(number, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_sparse_columns() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_column(3, Column::with_width(12));
        sheet.set_column(1, Column::with_width(8));
        let keys: Vec<u32> = sheet.columns.keys().copied().collect();
        assert_eq!(keys, vec![1, 3]);
    }

    #[test]
    fn test_rows_keep_order() {
        let mut sheet = Worksheet::new("Data");
        sheet.push_row(Row::from_cells(vec![Cell::text("a")]));
        sheet.push_row(Row::from_cells(vec![Cell::text("b")]));
        assert_eq!(sheet.rows.len(), 2);
    }
}
