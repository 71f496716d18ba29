//! Row type

use crate::cell::Cell;

/// A single row of cells
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Cells in column order, starting at column A
    pub cells: Vec<Cell>,
    /// Explicit row height; 0 means the default height
    pub height: u32,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from a list of cells
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells, height: 0 }
    }

    /// Set an explicit row height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Append a cell
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}
