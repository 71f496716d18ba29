//! Cell value types

use crate::style::CellStyle;

/// Represents the value stored in a cell
///
/// This is a closed sum: the serializer matches exhaustively on it, so adding
/// a new kind of value is a compile-time decision point rather than a silent
/// fallthrough.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value
    Number(f32),

    /// Text value, deduplicated through the shared-string table on write
    Text(String),

    /// An embedded picture, stored as a rich value on write
    Picture(Picture),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// An image embedded in a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// File extension of the encoded image ("png", "jpg", "jpeg")
    pub extension: String,
    /// Raw encoded image bytes
    pub bytes: Vec<u8>,
}

impl Picture {
    /// Create a picture from an extension and encoded bytes
    pub fn new<S: Into<String>>(extension: S, bytes: Vec<u8>) -> Self {
        Self {
            extension: extension.into(),
            bytes,
        }
    }
}

/// A single cell: a value plus optional formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// The cell's formatting; an entirely unset style emits nothing
    pub style: CellStyle,
}

impl Cell {
    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a boolean cell
    pub fn boolean(value: bool) -> Self {
        Self {
            value: CellValue::Boolean(value),
            style: CellStyle::default(),
        }
    }

    /// Create a number cell
    pub fn number(value: f32) -> Self {
        Self {
            value: CellValue::Number(value),
            style: CellStyle::default(),
        }
    }

    /// Create a text cell
    pub fn text<S: Into<String>>(value: S) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            style: CellStyle::default(),
        }
    }

    /// Create a picture cell
    pub fn picture(picture: Picture) -> Self {
        Self {
            value: CellValue::Picture(picture),
            style: CellStyle::default(),
        }
    }

    /// Attach a style to the cell
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Self {
            value,
            style: CellStyle::default(),
        }
    }
}
