//! Zip packing collaborator
//!
//! Turns the assembled [`Package`] into one compressed archive. Entry names
//! are the virtual part paths with the single leading `/` stripped. The
//! underlying `ZipWriter` is released on every path, including failures,
//! through its `Drop` impl.

use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;

use crate::error::{XlsxError, XlsxResult};
use crate::package::Package;

/// Pack every part of `package` into a zip archive written to `writer`.
///
/// Returns the inner writer on success so in-memory callers can recover
/// their buffer.
pub fn pack<W: Write + Seek>(package: &Package, writer: W) -> XlsxResult<W> {
    let mut zip = zip::ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (path, bytes) in package.iter() {
        let name = path.strip_prefix('/').unwrap_or(path);
        zip.start_file(name, options)
            .map_err(|source| XlsxError::ArchiveEntry {
                name: name.to_owned(),
                source,
            })?;
        zip.write_all(bytes)?;
    }

    let inner = zip.finish().map_err(XlsxError::ArchiveFinalize)?;
    log::debug!("packed {} parts", package.len());
    Ok(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn entry_names_lose_the_leading_slash() {
        let mut package = Package::new();
        package.insert("/xl/workbook.xml".into(), b"<workbook/>".to_vec());
        package.insert("/[Content_Types].xml".into(), b"<Types/>".to_vec());

        let cursor = pack(&package, Cursor::new(Vec::new())).unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_owned())
            .collect();
        assert!(names.contains(&"xl/workbook.xml".to_owned()));
        assert!(names.contains(&"[Content_Types].xml".to_owned()));

        let mut content = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<workbook/>");
    }
}
