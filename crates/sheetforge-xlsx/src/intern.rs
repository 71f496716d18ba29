//! Value interning tables
//!
//! Cells do not carry their text or style inline in the package; they
//! reference entries in shared tables. Both tables here follow the same
//! contract: the first occurrence of a value (by structural equality) appends
//! it and records its index, later equal values return the existing index,
//! and serialization order equals first-seen order.

use ahash::AHashMap;
use sheetforge_core::CellStyle;

/// The shared-string table
///
/// Workbooks typically repeat the same text in many cells. Each distinct
/// string is stored once and referenced by its 0-based ordinal.
#[derive(Debug, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
    index_map: AHashMap<String, u32>,
}

impl SharedStrings {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or insert a string, returning its ordinal
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.index_map.get(s) {
            return idx;
        }
        let idx = self.strings.len() as u32;
        self.index_map.insert(s.to_owned(), idx);
        self.strings.push(s.to_owned());
        idx
    }

    /// Iterate strings in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    /// Number of distinct strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if no string has been interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// The cell-style table
///
/// Holds only custom, non-empty styles; callers must not intern an empty
/// style. The emitted `cellXfs` block always prepends an implicit default
/// entry, so cells reference custom styles 1-based via [`StyleTable::xf_id`].
#[derive(Debug, Default)]
pub struct StyleTable {
    styles: Vec<CellStyle>,
    index_map: AHashMap<CellStyle, u32>,
}

impl StyleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or insert a style, returning its 0-based index among custom styles
    pub fn intern(&mut self, style: &CellStyle) -> u32 {
        debug_assert!(!style.is_empty(), "empty styles are never interned");
        if let Some(&idx) = self.index_map.get(style) {
            return idx;
        }
        let idx = self.styles.len() as u32;
        self.index_map.insert(style.clone(), idx);
        self.styles.push(style.clone());
        idx
    }

    /// The 1-based xf id a cell uses to reference the custom style at `index`
    pub fn xf_id(index: u32) -> u32 {
        index + 1
    }

    /// Iterate custom styles in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CellStyle> {
        self.styles.iter()
    }

    /// Number of custom styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if no custom style has been interned
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetforge_core::{Alignment, HorizontalAlignment, VerticalAlignment};

    #[test]
    fn shared_strings_are_idempotent() {
        let mut table = SharedStrings::new();
        assert_eq!(table.intern("alpha"), 0);
        assert_eq!(table.intern("beta"), 1);
        assert_eq!(table.intern("alpha"), 0);
        assert_eq!(table.intern("gamma"), 2);
        assert_eq!(table.len(), 3);

        let ordered: Vec<&str> = table.iter().collect();
        assert_eq!(ordered, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn style_interning_dedups_structurally() {
        let mut table = StyleTable::new();

        let centered =
            CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
        let centered_again =
            CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
        let topped = CellStyle::new(Alignment::new().with_vertical(VerticalAlignment::Top));

        let a = table.intern(&centered);
        let b = table.intern(&centered_again);
        let c = table.intern(&topped);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn xf_ids_are_one_based() {
        assert_eq!(StyleTable::xf_id(0), 1);
        assert_eq!(StyleTable::xf_id(4), 5);
    }
}
