//! Column settings

/// Per-column settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Column {
    /// Explicit column width; 0 means the default width
    pub width: u32,
}

impl Column {
    /// Create a column with an explicit width
    pub fn with_width(width: u32) -> Self {
        Self { width }
    }
}
