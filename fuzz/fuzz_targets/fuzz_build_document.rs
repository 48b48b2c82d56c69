//! Fuzz target for document export.
//!
//! Feeds arbitrary text into titles, paragraphs and table cells and checks
//! the archive framing stays intact.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_build_document -- -max_total_time=600

#![no_main]

use hazardwise_docx::{build_document, Cell, DocxBlock, Paragraph, Table, PART_PATHS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\u{1}');
    let title = parts.next().unwrap_or_default();

    let mut blocks: Vec<DocxBlock> = Vec::new();
    for (i, chunk) in parts.enumerate() {
        match i % 3 {
            0 => blocks.push(Paragraph::new(chunk).into()),
            1 => blocks.push(Paragraph::bullet(chunk, (i % 12) as u8).bold().into()),
            _ => {
                let cells: Vec<Cell> = chunk.split('\t').map(Cell::from).collect();
                blocks.push(Table::default().headers(cells.clone()).row(cells).into());
            }
        }
    }

    let blob = build_document(title, &blocks);
    let bytes = blob.into_bytes();

    // Local file header signature first, end of central directory last.
    assert!(bytes.starts_with(&[0x50, 0x4b, 0x03, 0x04]));
    let eocd = bytes.len() - 22;
    assert_eq!(&bytes[eocd..eocd + 4], &[0x50, 0x4b, 0x05, 0x06]);

    let count = u16::from_le_bytes([bytes[eocd + 10], bytes[eocd + 11]]);
    assert_eq!(usize::from(count), PART_PATHS.len());
});
