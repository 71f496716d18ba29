//! XLSX writer
//!
//! [`XlsxWriter`] is the public facade; [`PackageBuilder`] is the
//! per-conversion session that owns every counter and table and runs part
//! generation in strict dependency order. Later phases read side effects
//! recorded by earlier ones (interned strings, styles, registered media), so
//! the sequence in [`PackageBuilder::build`] is not reorderable.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use sheetforge_core::{CellValue, Row, Workbook, Worksheet};

use crate::error::XlsxResult;
use crate::intern::{SharedStrings, StyleTable};
use crate::media::{self, MediaTable};
use crate::pack;
use crate::package::{format_rel_id, ContentTypes, IdAllocator, Package, RelTable};
use crate::xml::XmlWriter;

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_RICHDATA: &str = "http://schemas.microsoft.com/office/spreadsheetml/2017/richdata";

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Assemble the package for a workbook without archiving it
    pub fn build(workbook: &Workbook) -> XlsxResult<Package> {
        PackageBuilder::new().build(workbook)
    }

    /// Write a workbook to a writer as a compressed archive
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<W> {
        let package = Self::build(workbook)?;
        pack::pack(&package, writer)
    }

    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)?;
        Ok(())
    }

    /// Write a workbook to an in-memory archive buffer
    pub fn write_to_bytes(workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        let cursor = Self::write(workbook, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }
}

/// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
pub fn column_letters(mut n: u32) -> String {
    let mut result = String::new();
    while n > 0 {
        n -= 1;
        result.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }
    result
}

/// Render a number cell value as the shortest round-trippable decimal
fn format_number(n: f32) -> String {
    let mut buffer = ryu::Buffer::new();
    let s = buffer.format(n);
    // ryu renders integral floats as "1.0"; cell values use the bare integer
    s.strip_suffix(".0").unwrap_or(s).to_owned()
}

/// One cell after the fallible classification pass
///
/// Emission works from these, so the XML closures stay infallible and every
/// opened tag closes exactly once.
struct ResolvedCell {
    reference: String,
    cell_type: Option<&'static str>,
    value: Option<String>,
    style_id: Option<String>,
    value_meta: Option<String>,
}

struct ResolvedRow {
    number: u32,
    height: u32,
    cells: Vec<ResolvedCell>,
}

/// Per-conversion session owning all mutable state
///
/// Exactly one conversion per instance; nothing survives across conversions.
/// Concurrent conversions use separate builders, so no locking is needed.
struct PackageBuilder {
    package: Package,
    content_types: ContentTypes,
    global_rels: RelTable,
    workbook_rels: RelTable,
    rich_data_rels: RelTable,
    global_ids: IdAllocator,
    workbook_ids: IdAllocator,
    rich_data_ids: IdAllocator,
    shared_strings: SharedStrings,
    styles: StyleTable,
    media: MediaTable,
}

impl PackageBuilder {
    fn new() -> Self {
        Self {
            package: Package::new(),
            content_types: ContentTypes::new(),
            global_rels: RelTable::default(),
            workbook_rels: RelTable::default(),
            rich_data_rels: RelTable::default(),
            global_ids: IdAllocator::default(),
            workbook_ids: IdAllocator::default(),
            rich_data_ids: IdAllocator::default(),
            shared_strings: SharedStrings::new(),
            styles: StyleTable::new(),
            media: MediaTable::new(),
        }
    }

    /// Generate every part in dependency order
    fn build(mut self, workbook: &Workbook) -> XlsxResult<Package> {
        // Populates the shared-string, style and media tables as a side
        // effect; everything after depends on them being complete.
        self.write_workbook(workbook)?;

        if !self.media.is_empty() {
            self.write_media();
            self.write_rich_value_rel();
            let sidecar = self.rich_data_rels.to_part();
            self.package
                .insert("/xl/richData/_rels/richValueRel.xml.rels".into(), sidecar);
            self.write_rich_value_structure();
            self.write_rich_value_types();
            self.write_rich_value_data();
            self.write_metadata();
        }

        self.write_core_properties();
        self.write_extended_properties(&workbook.app_name);

        if !self.shared_strings.is_empty() {
            self.write_shared_strings();
        }
        if !self.styles.is_empty() {
            self.write_styles();
        }

        let workbook_rels = self.workbook_rels.to_part();
        self.package
            .insert("/xl/_rels/workbook.xml.rels".into(), workbook_rels);
        let global_rels = self.global_rels.to_part();
        self.package.insert("/_rels/.rels".into(), global_rels);

        // Last: the manifest must observe every part and extension above
        let manifest = self.content_types.to_part();
        self.package.insert("/[Content_Types].xml".into(), manifest);

        log::debug!("assembled package with {} parts", self.package.len());
        Ok(self.package)
    }

    fn write_workbook(&mut self, workbook: &Workbook) -> XlsxResult<()> {
        let rid = self.global_ids.next_rel_id();
        self.content_types.set_override(
            "/xl/workbook.xml",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
        );
        self.global_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
            "xl/workbook.xml",
        );

        // Sheet ids and sheet relationship ids share the workbook domain
        let mut sheets = Vec::with_capacity(workbook.sheets.len());
        for sheet in &workbook.sheets {
            let sheet_id = self.workbook_ids.next();
            let sheet_rid = format_rel_id(sheet_id);
            self.write_sheet(sheet, &sheet_rid)?;
            sheets.push((sheet.name.clone(), sheet_id.to_string(), sheet_rid));
        }

        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "workbook",
            &[("xmlns", NS_MAIN), ("xmlns:r", NS_REL)],
            |w| {
                w.element_with("sheets", &[], |w| {
                    for (name, sheet_id, sheet_rid) in &sheets {
                        w.element(
                            "sheet",
                            &[("name", name), ("sheetId", sheet_id), ("r:id", sheet_rid)],
                        );
                    }
                });
            },
        );
        self.package.insert("/xl/workbook.xml".into(), w.into_bytes());
        Ok(())
    }

    fn write_sheet(&mut self, sheet: &Worksheet, rid: &str) -> XlsxResult<()> {
        let path = format!("/xl/worksheets/{}.xml", sheet.name);
        self.content_types.set_override(
            path.clone(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml",
        );
        self.workbook_rels.insert(
            rid.to_owned(),
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet",
            format!("worksheets/{}.xml", sheet.name),
        );

        // Fallible pass first: interning and media registration happen here
        let mut rows = Vec::with_capacity(sheet.rows.len());
        for (i, row) in sheet.rows.iter().enumerate() {
            let number = i as u32 + 1;
            rows.push(ResolvedRow {
                number,
                height: row.height,
                cells: self.resolve_row(row, number)?,
            });
        }

        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "worksheet",
            &[("xmlns", NS_MAIN), ("xmlns:r", NS_REL)],
            |w| {
                if !sheet.columns.is_empty() {
                    w.element_with("cols", &[], |w| {
                        for (&number, column) in &sheet.columns {
                            let n = number.to_string();
                            if column.width > 0 {
                                let width = column.width.to_string();
                                w.element(
                                    "col",
                                    &[
                                        ("min", &n),
                                        ("max", &n),
                                        ("width", &width),
                                        ("customWidth", "1"),
                                    ],
                                );
                            } else {
                                w.element("col", &[("min", &n), ("max", &n)]);
                            }
                        }
                    });
                }

                w.element_with("sheetData", &[], |w| {
                    for row in &rows {
                        let r = row.number.to_string();
                        let ht = row.height.to_string();
                        let mut attrs: Vec<(&str, &str)> = vec![("r", &r)];
                        if row.height > 0 {
                            attrs.push(("ht", &ht));
                            attrs.push(("customHeight", "1"));
                        }
                        w.element_with("row", &attrs, |w| {
                            for cell in &row.cells {
                                emit_cell(w, cell);
                            }
                        });
                    }
                });
            },
        );
        self.package.insert(path, w.into_bytes());
        Ok(())
    }

    /// Classify one row of cells, populating the shared tables
    fn resolve_row(&mut self, row: &Row, row_number: u32) -> XlsxResult<Vec<ResolvedCell>> {
        let mut resolved = Vec::with_capacity(row.cells.len());
        for (i, cell) in row.cells.iter().enumerate() {
            let reference = format!("{}{}", column_letters(i as u32 + 1), row_number);

            let style_id = if cell.style.is_empty() {
                None
            } else {
                Some(StyleTable::xf_id(self.styles.intern(&cell.style)).to_string())
            };

            let (cell_type, value, value_meta) = match &cell.value {
                CellValue::Empty => (None, None, None),
                CellValue::Boolean(b) => {
                    let rendered = if *b { "1" } else { "0" };
                    (Some("b"), Some(rendered.to_owned()), None)
                }
                CellValue::Number(n) => (Some("n"), Some(format_number(*n)), None),
                CellValue::Text(s) => (
                    Some("s"),
                    Some(self.shared_strings.intern(s).to_string()),
                    None,
                ),
                CellValue::Picture(picture) => {
                    let extension = media::normalize_extension(&picture.extension)?;
                    self.content_types
                        .set_default(extension, media::image_content_type(extension));

                    let rich_data_ids = &mut self.rich_data_ids;
                    let index = self.media.register(&picture.bytes, &picture.extension, || {
                        rich_data_ids.next_rel_id()
                    })?;

                    // Pictures surface as error cells; the vm attribute links
                    // the 1-based value-metadata record carrying the image
                    (
                        Some("e"),
                        Some("#VALUE!".to_owned()),
                        Some((index + 1).to_string()),
                    )
                }
            };

            resolved.push(ResolvedCell {
                reference,
                cell_type,
                value,
                style_id,
                value_meta,
            });
        }
        Ok(resolved)
    }

    fn write_media(&mut self) {
        let entries: Vec<(String, Vec<u8>, String)> = self
            .media
            .iter()
            .map(|m| (m.name.clone(), m.bytes.clone(), m.rel_id.clone()))
            .collect();
        for (name, bytes, rel_id) in entries {
            self.rich_data_rels.insert(
                rel_id,
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image",
                format!("../media/{name}"),
            );
            self.package.insert(format!("/xl/media/{name}"), bytes);
        }
    }

    fn write_rich_value_rel(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/richData/richValueRel.xml";
        self.content_types
            .set_override(path, "application/vnd.ms-excel.richvaluerel+xml");
        self.workbook_rels.insert(
            rid,
            "http://schemas.microsoft.com/office/2022/10/relationships/richValueRel",
            "richData/richValueRel.xml",
        );

        // A dense table: position n holds the relationship id of rich value n
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "richValueRels",
            &[
                (
                    "xmlns",
                    "http://schemas.microsoft.com/office/spreadsheetml/2022/richvaluerel",
                ),
                ("xmlns:r", NS_REL),
            ],
            |w| {
                for entry in self.media.iter() {
                    w.element("rel", &[("r:id", &entry.rel_id)]);
                }
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_rich_value_structure(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/richData/rdrichvaluestructure.xml";
        self.content_types
            .set_override(path, "application/vnd.ms-excel.rdrichvaluestructure+xml");
        self.workbook_rels.insert(
            rid,
            "http://schemas.microsoft.com/office/2017/06/relationships/rdRichValueStructure",
            "richData/rdrichvaluestructure.xml",
        );

        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "rvStructures",
            &[("xmlns", NS_RICHDATA), ("count", "1")],
            |w| {
                w.element_with("s", &[("t", "_localImage")], |w| {
                    w.element("k", &[("n", "_rvRel:LocalImageIdentifier"), ("t", "i")]);
                    w.element("k", &[("n", "CalcOrigin"), ("t", "i")]);
                });
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_rich_value_types(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/richData/rdRichValueTypes.xml";
        self.content_types
            .set_override(path, "application/vnd.ms-excel.rdrichvaluetypes+xml");
        self.workbook_rels.insert(
            rid,
            "http://schemas.microsoft.com/office/2017/06/relationships/rdRichValueTypes",
            "richData/rdRichValueTypes.xml",
        );

        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "rvTypesInfo",
            &[
                (
                    "xmlns",
                    "http://schemas.microsoft.com/office/spreadsheetml/2017/richdata2",
                ),
                (
                    "xmlns:mc",
                    "http://schemas.openxmlformats.org/markup-compatibility/2006",
                ),
                ("xmlns:x", NS_MAIN),
                ("mc:Ignorable", "x"),
            ],
            |w| {
                w.element_with("global", &[], |w| {
                    w.element_with("key", &[("name", "_Self")], |w| {
                        w.element("flag", &[("name", "ExcludeFromFile"), ("value", "1")]);
                        w.element(
                            "flag",
                            &[("name", "ExcludeFromCalcComparison"), ("value", "1")],
                        );
                    });

                    for flag in [
                        "_DisplayString",
                        "_Flags",
                        "_Format",
                        "_SubLabel",
                        "_Attribution",
                        "_Icon",
                        "_Display",
                        "_CanonicalPropertyNames",
                        "_ClassificationId",
                    ] {
                        w.element_with("key", &[("name", "v")], |w| {
                            w.element("flag", &[("name", flag), ("value", "1")]);
                        });
                    }
                });
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_rich_value_data(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/richData/rdrichvalue.xml";
        self.content_types
            .set_override(path, "application/vnd.ms-excel.rdrichvalue+xml");
        self.workbook_rels.insert(
            rid,
            "http://schemas.microsoft.com/office/2017/06/relationships/rdRichValue",
            "richData/rdrichvalue.xml",
        );

        let count = self.media.len().to_string();
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "rvData",
            &[("xmlns", NS_RICHDATA), ("count", &count)],
            |w| {
                for entry in self.media.iter() {
                    w.element_with("rv", &[("s", "0")], |w| {
                        // Fields in structure order: local image identifier,
                        // then CalcOrigin
                        w.text_element("v", &[], &entry.index.to_string());
                        w.text_element("v", &[], "5");
                    });
                }
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_metadata(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/metadata.xml";
        self.content_types.set_override(
            path,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheetMetadata+xml",
        );
        self.workbook_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sheetMetadata",
            "metadata.xml",
        );

        let count = self.media.len().to_string();
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "metadata",
            &[("xmlns", NS_MAIN), ("xmlns:xlrd", NS_RICHDATA)],
            |w| {
                w.element_with("metadataTypes", &[("count", "1")], |w| {
                    w.element(
                        "metadataType",
                        &[
                            ("name", "XLRICHVALUE"),
                            ("minSupportedVersion", "120000"),
                            ("copy", "1"),
                            ("pasteAll", "1"),
                            ("pasteValues", "1"),
                            ("merge", "1"),
                            ("splitFirst", "1"),
                            ("rowColShift", "1"),
                            ("clearFormats", "1"),
                            ("clearComments", "1"),
                            ("assign", "1"),
                            ("coerce", "1"),
                        ],
                    );
                });

                w.element_with(
                    "futureMetadata",
                    &[("name", "XLRICHVALUE"), ("count", &count)],
                    |w| {
                        for entry in self.media.iter() {
                            w.element_with("bk", &[], |w| {
                                w.element_with("extLst", &[], |w| {
                                    w.element_with(
                                        "ext",
                                        &[("uri", "{3e2802c4-a4d2-4d8b-9148-e3be6c30e623}")],
                                        |w| {
                                            let i = entry.index.to_string();
                                            w.element("xlrd:rvb", &[("i", &i)]);
                                        },
                                    );
                                });
                            });
                        }
                    },
                );

                w.element_with("valueMetadata", &[("count", &count)], |w| {
                    for entry in self.media.iter() {
                        w.element_with("bk", &[], |w| {
                            let v = entry.index.to_string();
                            w.element("rc", &[("t", "1"), ("v", &v)]);
                        });
                    }
                });
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_core_properties(&mut self) {
        let rid = self.global_ids.next_rel_id();
        let path = "/docProps/core.xml";
        self.content_types.set_override(
            path,
            "application/vnd.openxmlformats-package.core-properties+xml",
        );
        self.global_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        );

        let mut w = XmlWriter::new();
        w.decl();
        w.element(
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_extended_properties(&mut self, app_name: &str) {
        let rid = self.global_ids.next_rel_id();
        let path = "/docProps/app.xml";
        self.content_types.set_override(
            path,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        );
        self.global_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties",
            "docProps/app.xml",
        );

        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "Properties",
            &[
                (
                    "xmlns",
                    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
                ),
                (
                    "xmlns:vt",
                    "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
                ),
            ],
            |w| {
                if !app_name.is_empty() {
                    w.text_element("Application", &[], app_name);
                }
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_shared_strings(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/sharedStrings.xml";
        self.content_types.set_override(
            path,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml",
        );
        self.workbook_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings",
            "sharedStrings.xml",
        );

        let count = self.shared_strings.len().to_string();
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with(
            "sst",
            &[("xmlns", NS_MAIN), ("count", &count), ("uniqueCount", &count)],
            |w| {
                for s in self.shared_strings.iter() {
                    w.element_with("si", &[], |w| {
                        w.text_element("t", &[], s);
                    });
                }
            },
        );
        self.package.insert(path.into(), w.into_bytes());
    }

    fn write_styles(&mut self) {
        let rid = self.workbook_ids.next_rel_id();
        let path = "/xl/styles.xml";
        self.content_types.set_override(
            path,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml",
        );
        self.workbook_rels.insert(
            rid,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
            "styles.xml",
        );

        const DEFAULT_XF: [(&str, &str); 5] = [
            ("numFmtId", "0"),
            ("fontId", "0"),
            ("fillId", "0"),
            ("borderId", "0"),
            ("xfId", "0"),
        ];

        let count = (self.styles.len() + 1).to_string();
        let mut w = XmlWriter::new();
        w.decl();
        w.element_with("styleSheet", &[("xmlns", NS_MAIN)], |w| {
            w.element_with("fonts", &[("count", "1")], |w| {
                w.element("font", &[]);
            });

            w.element_with("fills", &[("count", "1")], |w| {
                w.element_with("fill", &[], |w| {
                    w.element("patternFill", &[("patternType", "none")]);
                });
            });

            w.element_with("borders", &[("count", "1")], |w| {
                w.element_with("border", &[], |w| {
                    w.element("left", &[]);
                    w.element("right", &[]);
                    w.element("top", &[]);
                    w.element("bottom", &[]);
                    w.element("diagonal", &[]);
                });
            });

            w.element_with("cellStyleXfs", &[("count", "1")], |w| {
                w.element(
                    "xf",
                    &[
                        ("numFmtId", "0"),
                        ("fontId", "0"),
                        ("fillId", "0"),
                        ("borderId", "0"),
                    ],
                );
            });

            w.element_with("cellXfs", &[("count", &count)], |w| {
                // Position 0 is the implicit default; custom styles follow
                // in first-seen order, referenced 1-based by cells
                w.element("xf", &DEFAULT_XF);
                for style in self.styles.iter() {
                    let mut attrs: Vec<(&str, &str)> = DEFAULT_XF.to_vec();
                    if !style.alignment.is_empty() {
                        attrs.push(("applyAlignment", "1"));
                    }
                    w.element_with("xf", &attrs, |w| {
                        if !style.alignment.is_empty() {
                            let mut align: Vec<(&str, &str)> = Vec::new();
                            if let Some(h) = &style.alignment.horizontal {
                                align.push(("horizontal", h.as_xlsx_str()));
                            }
                            if let Some(v) = &style.alignment.vertical {
                                align.push(("vertical", v.as_xlsx_str()));
                            }
                            w.element("alignment", &align);
                        }
                    });
                }
            });
        });
        self.package.insert(path.into(), w.into_bytes());
    }
}

fn emit_cell(w: &mut XmlWriter, cell: &ResolvedCell) {
    let mut attrs: Vec<(&str, &str)> = vec![("r", &cell.reference)];
    if let Some(t) = cell.cell_type {
        attrs.push(("t", t));
    }
    if let Some(s) = &cell.style_id {
        attrs.push(("s", s));
    }
    if let Some(vm) = &cell.value_meta {
        attrs.push(("vm", vm));
    }

    match &cell.value {
        Some(value) => w.element_with("c", &attrs, |w| {
            w.text_element("v", &[], value);
        }),
        // Style-only cells survive; bare empty cells emit nothing
        None => {
            if cell.style_id.is_some() {
                w.element("c", &attrs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letter_conversion() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
    }

    #[test]
    fn number_formatting_is_shortest_form() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.25), "3.25");
    }
}
