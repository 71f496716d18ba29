//! Media content-addressing
//!
//! Embedded images are stored once per distinct payload. The key is a 64-bit
//! FNV-1a hash of the raw bytes rendered as lowercase hex, joined with the
//! normalized extension; the key doubles as the media file name under
//! `/xl/media/`.

use ahash::AHashMap;

use crate::error::{XlsxError, XlsxResult};

const FNV64_OFFSET: u64 = 14695981039346656037;
const FNV64_PRIME: u64 = 1099511628211;

/// 64-bit FNV-1a hash
pub fn fnv64(data: &[u8]) -> u64 {
    let mut hash = FNV64_OFFSET;
    for &byte in data {
        hash = hash.wrapping_mul(FNV64_PRIME);
        hash ^= u64::from(byte);
    }
    hash
}

/// Normalize an image extension, rejecting anything outside the supported set
pub fn normalize_extension(extension: &str) -> XlsxResult<&'static str> {
    match extension {
        "jpg" | "jpeg" => Ok("jpeg"),
        "png" => Ok("png"),
        other => Err(XlsxError::UnsupportedMediaType {
            extension: other.to_owned(),
        }),
    }
}

/// MIME content type for a normalized image extension
pub fn image_content_type(extension: &str) -> &'static str {
    if extension == "jpeg" {
        "image/jpeg"
    } else {
        "image/png"
    }
}

/// One deduplicated media payload
#[derive(Debug)]
pub struct MediaEntry {
    /// File name under `/xl/media/` (hex hash + normalized extension)
    pub name: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
    /// Normalized extension
    pub extension: &'static str,
    /// Insertion-order index, 0-based
    pub index: u32,
    /// Relationship id in the rich-data domain
    pub rel_id: String,
}

/// Content-addressed table of embedded media
///
/// Identical bytes under the same normalized extension collapse to a single
/// entry, so an image referenced by many cells is stored and related exactly
/// once.
#[derive(Debug, Default)]
pub struct MediaTable {
    entries: Vec<MediaEntry>,
    index_map: AHashMap<String, u32>,
}

impl MediaTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload, returning its insertion-order index.
    ///
    /// `next_rel_id` is called only when the payload is seen for the first
    /// time; a duplicate registration allocates nothing.
    pub fn register<F>(&mut self, bytes: &[u8], extension: &str, next_rel_id: F) -> XlsxResult<u32>
    where
        F: FnOnce() -> String,
    {
        let extension = normalize_extension(extension)?;
        let name = format!("{:x}.{}", fnv64(bytes), extension);

        if let Some(&index) = self.index_map.get(&name) {
            return Ok(index);
        }

        let index = self.entries.len() as u32;
        let rel_id = next_rel_id();
        log::trace!("registered media {} as {} (index {})", name, rel_id, index);
        self.index_map.insert(name.clone(), index);
        self.entries.push(MediaEntry {
            name,
            bytes: bytes.to_vec(),
            extension,
            index,
            rel_id,
        });
        Ok(index)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MediaEntry> {
        self.entries.iter()
    }

    /// Number of distinct payloads
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no media has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
