//! Common test utilities for hazardwise-docx integration tests.
//!
//! A small independent ZIP reader and XML helpers for checking exported
//! documents.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use hazardwise_docx::{crc32, DocumentOptions};
use quick_xml::events::Event;
use quick_xml::Reader;

/// An entry read back from an archive, with the header fields that must
/// agree between the local and central records.
#[derive(Debug, Clone)]
pub struct ReadEntry {
    pub path: String,
    pub data: Vec<u8>,
    pub crc: u32,
    pub method: u16,
    pub dos_time: u16,
    pub dos_date: u16,
}

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Read an archive through its central directory and cross-check every
/// entry against its local header. Panics on any inconsistency.
pub fn read_zip(bytes: &[u8]) -> Vec<ReadEntry> {
    assert!(bytes.len() >= 22, "archive too short");
    let end = bytes.len() - 22;
    assert_eq!(u32_at(bytes, end), 0x0605_4B50, "missing end record");
    let count = usize::from(u16_at(bytes, end + 10));
    assert_eq!(u16_at(bytes, end + 8), u16_at(bytes, end + 10));
    let cd_size = u32_at(bytes, end + 12) as usize;
    let cd_offset = u32_at(bytes, end + 16) as usize;
    assert_eq!(cd_offset + cd_size, end, "central directory does not abut end record");

    let mut entries = Vec::with_capacity(count);
    let mut at = cd_offset;
    for _ in 0..count {
        assert_eq!(u32_at(bytes, at), 0x0201_4B50, "bad central header");
        let method = u16_at(bytes, at + 10);
        let dos_time = u16_at(bytes, at + 12);
        let dos_date = u16_at(bytes, at + 14);
        let crc = u32_at(bytes, at + 16);
        let compressed = u32_at(bytes, at + 20) as usize;
        let size = u32_at(bytes, at + 24) as usize;
        let name_len = usize::from(u16_at(bytes, at + 28));
        let extra_len = usize::from(u16_at(bytes, at + 30));
        let comment_len = usize::from(u16_at(bytes, at + 32));
        let local = u32_at(bytes, at + 42) as usize;
        let path = String::from_utf8(bytes[at + 46..at + 46 + name_len].to_vec()).unwrap();
        assert_eq!(compressed, size);

        assert_eq!(u32_at(bytes, local), 0x0403_4B50, "bad local header for {path}");
        assert_eq!(u16_at(bytes, local + 8), method);
        assert_eq!(u16_at(bytes, local + 10), dos_time);
        assert_eq!(u16_at(bytes, local + 12), dos_date);
        assert_eq!(u32_at(bytes, local + 14), crc, "crc mismatch for {path}");
        assert_eq!(u32_at(bytes, local + 18) as usize, size);
        assert_eq!(u32_at(bytes, local + 22) as usize, size);
        let local_name_len = usize::from(u16_at(bytes, local + 26));
        let local_extra_len = usize::from(u16_at(bytes, local + 28));
        assert_eq!(&bytes[local + 30..local + 30 + local_name_len], path.as_bytes());
        let data_at = local + 30 + local_name_len + local_extra_len;
        let data = bytes[data_at..data_at + size].to_vec();
        assert_eq!(crc32(&data), crc, "stored crc wrong for {path}");

        entries.push(ReadEntry {
            path,
            data,
            crc,
            method,
            dos_time,
            dos_date,
        });
        at += 46 + name_len + extra_len + comment_len;
    }
    entries
}

/// UTF-8 content of one part.
pub fn part(entries: &[ReadEntry], path: &str) -> String {
    let entry = entries
        .iter()
        .find(|e| e.path == path)
        .unwrap_or_else(|| panic!("missing part {path}"));
    String::from_utf8(entry.data.clone()).unwrap()
}

/// Parse the whole document, failing on malformed XML.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
    assert_eq!(depth, 0, "unbalanced elements");
}

/// Unescaped text of every `w:t` element, in document order.
pub fn run_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut texts = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => {
                in_text = true;
                texts.push(String::new());
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
            Ok(Event::Text(e)) if in_text => {
                if let Some(last) = texts.last_mut() {
                    last.push_str(&e.unescape().unwrap());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {e}"),
        }
    }
    texts
}

/// A fixed export timestamp.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 12).unwrap()
}

/// Options with a fixed timestamp.
pub fn fixed_options() -> DocumentOptions {
    DocumentOptions::default().with_created(fixed_time())
}
