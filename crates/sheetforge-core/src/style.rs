//! Cell formatting types

/// Cell formatting
///
/// Currently only alignment is modeled. A style where every field is unset is
/// considered empty and is never written to the styles part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// Text alignment
    pub alignment: Alignment,
}

impl CellStyle {
    /// Create a style from an alignment
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// Check whether every field of the style is unset
    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }
}

/// Text alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment, `None` leaves the cell at the format default
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment, `None` leaves the cell at the format default
    pub vertical: Option<VerticalAlignment>,
}

impl Alignment {
    /// Create a new unset alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Check whether both components are unset
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed (like justify, but for East Asian text)
    Distributed,
}

impl HorizontalAlignment {
    /// The SpreadsheetML keyword for this alignment
    pub fn as_xlsx_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::CenterContinuous => "centerContinuous",
            HorizontalAlignment::Distributed => "distributed",
        }
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}

impl VerticalAlignment {
    /// The SpreadsheetML keyword for this alignment
    pub fn as_xlsx_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Justify => "justify",
            VerticalAlignment::Distributed => "distributed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style() {
        assert!(CellStyle::default().is_empty());
        assert!(Alignment::new().is_empty());
    }

    #[test]
    fn test_populated_style() {
        let style = CellStyle::new(Alignment::new().with_vertical(VerticalAlignment::Top));
        assert!(!style.is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let a = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
        let b = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
        let c = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Left));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
