//! Part registry, relationship tables and content types
//!
//! The package is a flat map from absolute virtual path to serialized
//! content, plus the bookkeeping that makes the parts mutually consistent:
//! three independent relationship id domains, extension-default and per-part
//! content types, and the sidecar parts summarizing them.

use std::collections::BTreeMap;

use crate::xml::XmlWriter;

/// The assembled package: absolute virtual path to serialized content
///
/// This is the engine's output; handing it to [`crate::pack`] turns it into
/// one compressed .xlsx archive.
#[derive(Debug, Default)]
pub struct Package {
    parts: BTreeMap<String, Vec<u8>>,
}

impl Package {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a part; each path is generated exactly once per conversion
    pub fn insert(&mut self, path: String, content: Vec<u8>) {
        debug_assert!(
            !self.parts.contains_key(&path),
            "part generated twice: {path}"
        );
        log::debug!("part {} ({} bytes)", path, content.len());
        self.parts.insert(path, content);
    }

    /// Look up a part by absolute path
    pub fn part(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(Vec::as_slice)
    }

    /// Iterate parts in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the package holds no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// A typed, named pointer from one part to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship type URI
    pub type_uri: String,
    /// Target path, relative to the declaring document
    pub target: String,
}

/// One relationship domain
///
/// An id only needs to be unique within the single XML document that
/// references it, so the workbook, the package root and the rich-data part
/// each own an independent table.
#[derive(Debug, Default)]
pub struct RelTable {
    rels: BTreeMap<String, Relationship>,
}

impl RelTable {
    /// Record a relationship under the given id
    pub fn insert<T: Into<String>, U: Into<String>>(&mut self, id: String, type_uri: T, target: U) {
        self.rels.insert(
            id,
            Relationship {
                type_uri: type_uri.into(),
                target: target.into(),
            },
        );
    }

    /// Serialize the table as a relationships sidecar part
    pub fn to_part(&self) -> Vec<u8> {
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "Relationships",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/package/2006/relationships",
            )],
            |w| {
                for (id, rel) in &self.rels {
                    w.element(
                        "Relationship",
                        &[
                            ("Id", id),
                            ("Type", &rel.type_uri),
                            ("Target", &rel.target),
                        ],
                    );
                }
            },
        );
        w.into_bytes()
    }
}

/// Content-type resolution for every part in the package
///
/// Two layers: a default per file extension, and a per-path override for the
/// XML parts that all share the `xml` extension but carry distinct OOXML
/// content types.
#[derive(Debug)]
pub struct ContentTypes {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create the registry with the extension defaults every package carries
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("xml".to_owned(), "application/xml".to_owned());
        defaults.insert(
            "rels".to_owned(),
            "application/vnd.openxmlformats-package.relationships+xml".to_owned(),
        );
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register a default content type for an extension
    pub fn set_default<E: Into<String>, C: Into<String>>(&mut self, extension: E, content_type: C) {
        self.defaults.insert(extension.into(), content_type.into());
    }

    /// Register a content type for one specific part
    pub fn set_override<P: Into<String>, C: Into<String>>(&mut self, path: P, content_type: C) {
        self.overrides.insert(path.into(), content_type.into());
    }

    /// Serialize the `[Content_Types].xml` manifest
    pub fn to_part(&self) -> Vec<u8> {
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "Types",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/package/2006/content-types",
            )],
            |w| {
                for (extension, content_type) in &self.defaults {
                    w.element(
                        "Default",
                        &[("Extension", extension), ("ContentType", content_type)],
                    );
                }
                for (path, content_type) in &self.overrides {
                    w.element(
                        "Override",
                        &[("PartName", path), ("ContentType", content_type)],
                    );
                }
            },
        );
        w.into_bytes()
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic relationship id allocator for one domain
///
/// Starts at zero and increments before first use, so the first id handed
/// out is `rId1`.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    /// Allocate the next numeric id
    pub fn next(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    /// Allocate the next id, formatted
    pub fn next_rel_id(&mut self) -> String {
        format_rel_id(self.next())
    }
}

/// Format a numeric id as a relationship id
pub fn format_rel_id(id: u32) -> String {
    format!("rId{id}")
}
