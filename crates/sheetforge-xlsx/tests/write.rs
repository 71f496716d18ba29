//! End-to-end package assembly tests

use pretty_assertions::assert_eq;
use sheetforge_core::{
    Alignment, Cell, CellStyle, Column, HorizontalAlignment, Picture, Row, Workbook, Worksheet,
};
use sheetforge_xlsx::{Package, XlsxError, XlsxWriter};

fn part_str<'a>(package: &'a Package, path: &str) -> &'a str {
    let bytes = package
        .part(path)
        .unwrap_or_else(|| panic!("missing part {path}"));
    std::str::from_utf8(bytes).expect("part is not utf-8")
}

fn single_sheet_workbook(cells: Vec<Cell>) -> Workbook {
    let mut sheet = Worksheet::new("Sheet1");
    sheet.push_row(Row::from_cells(cells));
    let mut workbook = Workbook::new("sheetforge");
    workbook.push_sheet(sheet);
    workbook
}

#[test]
fn minimal_workbook_package() {
    let workbook = single_sheet_workbook(vec![Cell::text("Hi"), Cell::boolean(true)]);
    let package = XlsxWriter::build(&workbook).unwrap();

    // Shared strings: exactly ["Hi"] at ordinal 0
    let sst = part_str(&package, "/xl/sharedStrings.xml");
    assert!(sst.contains(r#"count="1" uniqueCount="1""#), "{sst}");
    assert!(sst.contains("<si><t>Hi</t></si>"), "{sst}");

    // Sheet: text cell references ordinal 0, boolean renders 1
    let sheet = part_str(&package, "/xl/worksheets/Sheet1.xml");
    assert!(sheet.contains(r#"<c r="A1" t="s"><v>0</v></c>"#), "{sheet}");
    assert!(sheet.contains(r#"<c r="B1" t="b"><v>1</v></c>"#), "{sheet}");

    // No custom styles, so no styles part at all
    assert!(package.part("/xl/styles.xml").is_none());

    // Content types: defaults for xml/rels, overrides for each XML part
    let types = part_str(&package, "/[Content_Types].xml");
    assert!(types.contains(r#"<Default Extension="rels""#));
    assert!(types.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
    for part in [
        "/xl/workbook.xml",
        "/xl/worksheets/Sheet1.xml",
        "/xl/sharedStrings.xml",
        "/docProps/core.xml",
        "/docProps/app.xml",
    ] {
        assert!(
            types.contains(&format!(r#"<Override PartName="{part}""#)),
            "missing override for {part}: {types}"
        );
    }

    // Relationship wiring: package root points at the workbook, the
    // workbook points at its sheet and the shared strings
    let root_rels = part_str(&package, "/_rels/.rels");
    assert!(root_rels.contains(r#"Target="xl/workbook.xml"/>"#));
    let workbook_rels = part_str(&package, "/xl/_rels/workbook.xml.rels");
    assert!(workbook_rels.contains(r#"Id="rId1""#));
    assert!(workbook_rels.contains(r#"Target="worksheets/Sheet1.xml"/>"#));
    assert!(workbook_rels.contains(r#"Target="sharedStrings.xml"/>"#));

    // Workbook lists the sheet under the same relationship id
    let workbook_xml = part_str(&package, "/xl/workbook.xml");
    assert!(workbook_xml.contains(r#"<sheet name="Sheet1" sheetId="1" r:id="rId1"/>"#));
}

#[test]
fn shared_strings_dedup_across_sheets() {
    let mut workbook = Workbook::new("sheetforge");
    for name in ["First", "Second"] {
        let mut sheet = Worksheet::new(name);
        sheet.push_row(Row::from_cells(vec![
            Cell::text("shared"),
            Cell::text(name),
        ]));
        workbook.push_sheet(sheet);
    }
    let package = XlsxWriter::build(&workbook).unwrap();

    let sst = part_str(&package, "/xl/sharedStrings.xml");
    assert!(sst.contains(r#"count="3" uniqueCount="3""#), "{sst}");
    // First-seen order: shared, First, Second
    let shared = sst.find("<si><t>shared</t></si>").unwrap();
    let first = sst.find("<si><t>First</t></si>").unwrap();
    let second = sst.find("<si><t>Second</t></si>").unwrap();
    assert!(shared < first && first < second);

    // Both sheets reference ordinal 0 for the shared text
    for sheet in ["First", "Second"] {
        let xml = part_str(&package, &format!("/xl/worksheets/{sheet}.xml"));
        assert!(xml.contains(r#"<c r="A1" t="s"><v>0</v></c>"#), "{xml}");
    }
}

#[test]
fn custom_style_gets_one_based_reference() {
    let style = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
    let workbook = single_sheet_workbook(vec![
        Cell::text("styled").with_style(style.clone()),
        Cell::text("plain"),
        Cell::text("styled too").with_style(style),
    ]);
    let package = XlsxWriter::build(&workbook).unwrap();

    let styles = part_str(&package, "/xl/styles.xml");
    // Default entry plus one custom entry
    assert!(styles.contains(r#"<cellXfs count="2">"#), "{styles}");
    assert!(styles.contains(r#"applyAlignment="1""#), "{styles}");
    assert!(styles.contains(r#"<alignment horizontal="center"/>"#), "{styles}");

    let sheet = part_str(&package, "/xl/worksheets/Sheet1.xml");
    assert!(sheet.contains(r#"<c r="A1" t="s" s="1"><v>0</v></c>"#), "{sheet}");
    assert!(sheet.contains(r#"<c r="B1" t="s"><v>1</v></c>"#), "{sheet}");
    // The equal style resolves to the same xf id
    assert!(sheet.contains(r#"<c r="C1" t="s" s="1"><v>2</v></c>"#), "{sheet}");
}

#[test]
fn style_only_cells_survive() {
    let style = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Right));
    let workbook = single_sheet_workbook(vec![
        Cell::empty().with_style(style),
        Cell::empty(),
        Cell::number(1.5),
    ]);
    let package = XlsxWriter::build(&workbook).unwrap();

    let sheet = part_str(&package, "/xl/worksheets/Sheet1.xml");
    assert!(sheet.contains(r#"<c r="A1" s="1"/>"#), "{sheet}");
    // The bare empty cell emits nothing but still occupies its column
    assert!(!sheet.contains(r#"r="B1""#), "{sheet}");
    assert!(sheet.contains(r#"<c r="C1" t="n"><v>1.5</v></c>"#), "{sheet}");
}

#[test]
fn number_cells_render_shortest_decimal() {
    let workbook = single_sheet_workbook(vec![Cell::number(2.0), Cell::number(0.25)]);
    let package = XlsxWriter::build(&workbook).unwrap();

    let sheet = part_str(&package, "/xl/worksheets/Sheet1.xml");
    assert!(sheet.contains(r#"<c r="A1" t="n"><v>2</v></c>"#), "{sheet}");
    assert!(sheet.contains(r#"<c r="B1" t="n"><v>0.25</v></c>"#), "{sheet}");
    // Numbers never touch the shared-string table
    assert!(package.part("/xl/sharedStrings.xml").is_none());
}

#[test]
fn column_widths_and_row_heights() {
    let mut sheet = Worksheet::new("Sized");
    sheet.set_column(2, Column::with_width(12));
    sheet.push_row(Row::from_cells(vec![Cell::text("x")]).with_height(20));
    let mut workbook = Workbook::new("sheetforge");
    workbook.push_sheet(sheet);

    let package = XlsxWriter::build(&workbook).unwrap();
    let xml = part_str(&package, "/xl/worksheets/Sized.xml");
    assert!(
        xml.contains(r#"<col min="2" max="2" width="12" customWidth="1"/>"#),
        "{xml}"
    );
    assert!(xml.contains(r#"<row r="1" ht="20" customHeight="1">"#), "{xml}");
}

#[test]
fn embedded_pictures_are_content_addressed() {
    let photo = b"jpeg-payload".to_vec();
    let icon = b"png-payload".to_vec();
    let workbook = single_sheet_workbook(vec![
        Cell::picture(Picture::new("jpg", photo.clone())),
        Cell::picture(Picture::new("jpeg", photo.clone())),
        Cell::picture(Picture::new("png", icon)),
    ]);
    let package = XlsxWriter::build(&workbook).unwrap();

    // Identical bytes under jpg/jpeg collapse into one media part
    let media_parts: Vec<&str> = package
        .iter()
        .map(|(path, _)| path)
        .filter(|path| path.starts_with("/xl/media/"))
        .collect();
    assert_eq!(media_parts.len(), 2, "{media_parts:?}");

    // Cells referencing the same payload share a vm index; vm is 1-based
    let sheet = part_str(&package, "/xl/worksheets/Sheet1.xml");
    assert!(
        sheet.contains(r#"<c r="A1" t="e" vm="1"><v>#VALUE!</v></c>"#),
        "{sheet}"
    );
    assert!(
        sheet.contains(r#"<c r="B1" t="e" vm="1"><v>#VALUE!</v></c>"#),
        "{sheet}"
    );
    assert!(
        sheet.contains(r#"<c r="C1" t="e" vm="2"><v>#VALUE!</v></c>"#),
        "{sheet}"
    );

    // One relationship per distinct payload, in insertion order
    let rel_index = part_str(&package, "/xl/richData/richValueRel.xml");
    assert!(rel_index.contains(r#"<rel r:id="rId1"/>"#), "{rel_index}");
    assert!(rel_index.contains(r#"<rel r:id="rId2"/>"#), "{rel_index}");
    let sidecar = part_str(&package, "/xl/richData/_rels/richValueRel.xml.rels");
    assert!(sidecar.contains(r#"Target="../media/"#), "{sidecar}");

    // Metadata binds each rich value, 0-based inside the records
    let metadata = part_str(&package, "/xl/metadata.xml");
    assert!(metadata.contains(r#"<valueMetadata count="2">"#), "{metadata}");
    assert!(metadata.contains(r#"<rc t="1" v="0"/>"#), "{metadata}");
    assert!(metadata.contains(r#"<rc t="1" v="1"/>"#), "{metadata}");
    assert!(metadata.contains(r#"<xlrd:rvb i="0"/>"#), "{metadata}");

    // The structure/types/data parts all exist
    for part in [
        "/xl/richData/rdrichvaluestructure.xml",
        "/xl/richData/rdRichValueTypes.xml",
        "/xl/richData/rdrichvalue.xml",
    ] {
        assert!(package.part(part).is_some(), "missing {part}");
    }

    // Image extensions became content-type defaults
    let types = part_str(&package, "/[Content_Types].xml");
    assert!(types.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
    assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
}

#[test]
fn unsupported_picture_extension_aborts() {
    let workbook = single_sheet_workbook(vec![
        Cell::text("fine"),
        Cell::picture(Picture::new("gif", b"gif-bytes".to_vec())),
    ]);
    let err = XlsxWriter::build(&workbook).unwrap_err();
    assert!(matches!(
        err,
        XlsxError::UnsupportedMediaType { ref extension } if extension == "gif"
    ));
}

#[test]
fn workbook_without_sheets_still_assembles() {
    let workbook = Workbook::new("sheetforge");
    let package = XlsxWriter::build(&workbook).unwrap();

    assert!(package.part("/xl/workbook.xml").is_some());
    assert!(package.part("/docProps/core.xml").is_some());
    assert!(package.part("/docProps/app.xml").is_some());
    assert!(package.part("/[Content_Types].xml").is_some());
    assert!(package.part("/xl/sharedStrings.xml").is_none());
    assert!(package.part("/xl/styles.xml").is_none());

    let app = part_str(&package, "/docProps/app.xml");
    assert!(app.contains("<Application>sheetforge</Application>"), "{app}");
}

#[test]
fn every_xml_part_is_well_formed() {
    let style = CellStyle::new(Alignment::new().with_horizontal(HorizontalAlignment::Center));
    let workbook = single_sheet_workbook(vec![
        Cell::text("a & <b>\nc"),
        Cell::boolean(false).with_style(style),
        Cell::number(1.25),
        Cell::picture(Picture::new("png", b"png-bytes".to_vec())),
    ]);
    let package = XlsxWriter::build(&workbook).unwrap();

    for (path, bytes) in package.iter() {
        if !path.ends_with(".xml") && !path.ends_with(".rels") {
            continue;
        }
        let text = std::str::from_utf8(bytes).expect("xml part is utf-8");
        let mut reader = quick_xml::Reader::from_str(text);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("{path} is not well-formed: {e}"),
            }
        }
    }
}

#[test]
fn packed_archive_round_trips() {
    let workbook = single_sheet_workbook(vec![Cell::text("Hi"), Cell::boolean(true)]);
    let bytes = XlsxWriter::write_to_bytes(&workbook).unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_owned())
        .collect();

    // Entry names carry no leading slash
    assert!(names.iter().all(|n| !n.starts_with('/')), "{names:?}");
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/worksheets/Sheet1.xml",
        "xl/sharedStrings.xml",
    ] {
        assert!(names.contains(&expected.to_owned()), "missing {expected}");
    }
}

#[test]
fn write_file_creates_a_readable_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let workbook = single_sheet_workbook(vec![Cell::text("disk")]);
    XlsxWriter::write_file(&workbook, &path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    assert!(archive.len() > 0);
}
