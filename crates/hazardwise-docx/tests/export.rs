//! Integration tests for document export.

mod common;

use hazardwise_docx::{
    build_document, build_document_with, write_document, write_document_with, Cell, DocxBlock,
    DocxError, DosDateTime, Paragraph, Table, PART_PATHS,
};

use common::{assert_well_formed, fixed_options, fixed_time, part, read_zip, run_texts};

fn sample_blocks() -> Vec<DocxBlock> {
    vec![
        Paragraph::title("Clinical Safety Case").into(),
        Paragraph::heading1("Hazard 1: Wrong patient").into(),
        Paragraph::bullet("Similar names", 0).into(),
        Paragraph::bullet("No DOB shown", 1).into(),
        Paragraph::new("Highest risk: 3 (Undesirable)")
            .bold()
            .highlight("yellow")
            .into(),
        Table::new()
            .headers(["Impact", "Severity", "Likelihood"])
            .row(["Wrong drug", "Major", "Unlikely"])
            .row([Cell::new("Delay").bold(), Cell::new("Minor")])
            .into(),
        Paragraph::empty().into(),
    ]
}

// ============================================================================
// Archive structure
// ============================================================================

#[test]
fn test_round_trip_yields_exactly_the_eight_parts() {
    let blob = build_document("Safety case", &sample_blocks());
    let entries = read_zip(&blob.bytes);

    let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, PART_PATHS);
    assert!(entries.iter().all(|e| e.method == 0));
}

#[test]
fn test_round_trip_with_no_blocks() {
    let blob = build_document("", &[]);
    let entries = read_zip(&blob.bytes);
    assert_eq!(entries.len(), 8);
    assert!(part(&entries, "docProps/core.xml").contains("HazardWise Export"));
}

#[test]
fn test_every_part_is_well_formed_xml() {
    let blob = build_document("Tricky <title> & \"quotes\"", &sample_blocks());
    let entries = read_zip(&blob.bytes);
    for entry in &entries {
        assert_well_formed(&String::from_utf8(entry.data.clone()).unwrap());
    }
}

#[test]
fn test_entries_carry_the_export_timestamp() {
    let blob = build_document_with("t", &[], &fixed_options());
    let stamp = DosDateTime::from_datetime(&fixed_time());
    for entry in read_zip(&blob.bytes) {
        assert_eq!(entry.dos_time, stamp.time);
        assert_eq!(entry.dos_date, stamp.date);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_fixed_timestamp_is_byte_identical() {
    let blocks = sample_blocks();
    let first = build_document_with("Safety case", &blocks, &fixed_options());
    let second = build_document_with("Safety case", &blocks, &fixed_options());
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn test_only_timestamps_differ_between_times() {
    let blocks = sample_blocks();
    let early = build_document_with("Safety case", &blocks, &fixed_options());
    let later = build_document_with(
        "Safety case",
        &blocks,
        &fixed_options().with_created(fixed_time() + chrono::Duration::days(400)),
    );

    let early = read_zip(&early.bytes);
    let later = read_zip(&later.bytes);
    for (a, b) in early.iter().zip(&later) {
        if a.path == "docProps/core.xml" {
            assert_ne!(a.data, b.data);
        } else {
            assert_eq!(a.data, b.data, "{} changed", a.path);
        }
    }
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_escaped_text_round_trips() {
    let text = r#"A & B < C > "D""#;
    let blob = build_document("t", &[Paragraph::new(text).into()]);
    let document = part(&read_zip(&blob.bytes), "word/document.xml");

    assert!(document.contains("A &amp; B &lt; C &gt; &quot;D&quot;"));
    assert_eq!(run_texts(&document), vec![text.to_string()]);
}

#[test]
fn test_table_has_one_header_row_and_one_data_row() {
    let table = Table::new()
        .headers(["H1", "H2"])
        .row(["a", "b"]);
    let blob = build_document("t", &[table.into()]);
    let document = part(&read_zip(&blob.bytes), "word/document.xml");

    let start = document.find("<w:tbl>").unwrap();
    let end = document.find("</w:tbl>").unwrap();
    let fragment = &document[start..end];

    assert_eq!(fragment.matches("<w:tr>").count(), 2);
    assert_eq!(fragment.matches("<w:tblHeader/>").count(), 1);
    assert_eq!(fragment.matches("<w:tc>").count(), 4);
    assert_eq!(run_texts(fragment_with_root(fragment).as_str()), ["H1", "H2", "a", "b"]);
}

fn fragment_with_root(fragment: &str) -> String {
    format!(
        "<root xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">{fragment}</w:tbl></root>"
    )
}

#[test]
fn test_paragraph_text_order_is_preserved() {
    let blob = build_document("t", &sample_blocks());
    let document = part(&read_zip(&blob.bytes), "word/document.xml");
    let texts = run_texts(&document);
    assert_eq!(texts[0], "Clinical Safety Case");
    assert_eq!(texts[2], "Similar names");
    assert!(texts.contains(&"Delay".to_string()));
}

// ============================================================================
// File sink
// ============================================================================

#[test]
fn test_write_document_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.docx");

    let blob = write_document_with(&path, "Safety case", &sample_blocks(), &fixed_options())
        .unwrap();
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, blob.bytes);
    assert_eq!(read_zip(&written).len(), 8);
}

#[test]
fn test_write_document_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("case.docx");

    let err = write_document(&path, "t", &[]).unwrap_err();
    match err {
        DocxError::Io { path: failed, .. } => assert_eq!(failed, path),
    }
    assert!(!path.exists());
}
