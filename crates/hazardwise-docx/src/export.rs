//! Document assembly and file output.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::blocks::{DocxBlock, DocxParagraph};
use crate::dos_time::DosDateTime;
use crate::error::{DocxError, DocxResult};
use crate::parts;
use crate::zip::{ZipArchive, ZipEntry};

/// MIME type of a `.docx` file.
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Title used when the caller's title is blank.
pub const DEFAULT_TITLE: &str = "HazardWise Export";

/// Creator written to `docProps/core.xml` by default.
pub const DEFAULT_AUTHOR: &str = "HazardWise";

/// Default page margin in twips (half an inch).
pub const DEFAULT_PAGE_MARGIN: u32 = 720;

/// Every part of the package, in archive order.
pub const PART_PATHS: [&str; 8] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/core.xml",
    "docProps/app.xml",
    "word/document.xml",
    "word/styles.xml",
    "word/numbering.xml",
    "word/_rels/document.xml.rels",
];

/// Settings for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// `dc:creator` and `cp:lastModifiedBy`.
    pub author: String,
    /// Core-properties timestamps and the ZIP entry stamps.
    pub created: DateTime<Utc>,
    /// Margin on all four sides, in twips.
    pub page_margin: u32,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            created: Utc::now(),
            page_margin: DEFAULT_PAGE_MARGIN,
        }
    }
}

impl DocumentOptions {
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        if !author.trim().is_empty() {
            self.author = author;
        }
        self
    }

    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    #[must_use]
    pub fn with_page_margin(mut self, page_margin: u32) -> Self {
        self.page_margin = page_margin;
        self
    }
}

/// A finished document and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxBlob {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl DocxBlob {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Build the package parts without serializing them.
#[must_use]
pub fn build_archive(title: &str, blocks: &[DocxBlock], options: &DocumentOptions) -> ZipArchive {
    let title = match title.trim() {
        "" => DEFAULT_TITLE,
        t => t,
    };

    let contents = [
        parts::content_types_xml(),
        parts::package_rels_xml(),
        parts::core_xml(title, &options.author, &options.created),
        parts::app_xml(),
        parts::document_xml(blocks, options.page_margin),
        parts::styles_xml(),
        parts::numbering_xml(),
        parts::document_rels_xml(),
    ];

    let mut archive = ZipArchive::new();
    for (path, xml) in PART_PATHS.iter().zip(contents) {
        tracing::debug!(part = %path, bytes = xml.len(), "Assembled document part");
        archive.push(ZipEntry::new(*path, xml.into_bytes()));
    }
    archive
}

/// Build a document stamped with the current time.
#[must_use]
pub fn build_document(title: &str, blocks: &[DocxBlock]) -> DocxBlob {
    build_document_with(title, blocks, &DocumentOptions::default())
}

/// Build a document with explicit options.
///
/// Identical inputs and options produce byte-identical output. The archive
/// has no ZIP64 records, so each part must stay under 4 GiB.
#[must_use]
pub fn build_document_with(
    title: &str,
    blocks: &[DocxBlock],
    options: &DocumentOptions,
) -> DocxBlob {
    let archive = build_archive(title, blocks, options);
    let bytes = archive.to_bytes(DosDateTime::from_datetime(&options.created));
    DocxBlob {
        bytes,
        mime_type: MIME_TYPE,
    }
}

/// Build a document from plain paragraphs.
#[must_use]
pub fn build_plain_document(title: &str, paragraphs: &[DocxParagraph]) -> DocxBlob {
    let blocks: Vec<DocxBlock> = paragraphs.iter().cloned().map(Into::into).collect();
    build_document(title, &blocks)
}

/// Write a finished document to `path`.
///
/// Parent directories are not created.
///
/// # Errors
///
/// Returns [`DocxError::Io`] when the file cannot be written.
pub fn write_blob(path: impl AsRef<Path>, blob: &DocxBlob) -> DocxResult<()> {
    let path = path.as_ref();
    std::fs::write(path, &blob.bytes).map_err(|source| DocxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = blob.len(), "Wrote document");
    Ok(())
}

/// Build a document and write it to `path`.
///
/// # Errors
///
/// Returns [`DocxError::Io`] when the file cannot be written.
pub fn write_document(
    path: impl AsRef<Path>,
    title: &str,
    blocks: &[DocxBlock],
) -> DocxResult<DocxBlob> {
    write_document_with(path, title, blocks, &DocumentOptions::default())
}

/// Build a document with explicit options and write it to `path`.
///
/// # Errors
///
/// Returns [`DocxError::Io`] when the file cannot be written.
pub fn write_document_with(
    path: impl AsRef<Path>,
    title: &str,
    blocks: &[DocxBlock],
    options: &DocumentOptions,
) -> DocxResult<DocxBlob> {
    let blob = build_document_with(title, blocks, options);
    write_blob(path, &blob)?;
    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Paragraph;

    fn entry<'a>(archive: &'a ZipArchive, path: &str) -> &'a str {
        let entry = archive
            .entries()
            .iter()
            .find(|e| e.path == path)
            .unwrap();
        std::str::from_utf8(&entry.data).unwrap()
    }

    #[test]
    fn test_archive_has_every_part_in_order() {
        let archive = build_archive("t", &[], &DocumentOptions::default());
        let paths: Vec<&str> = archive.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, PART_PATHS);
    }

    #[test]
    fn test_blank_title_falls_back() {
        let archive = build_archive("  ", &[], &DocumentOptions::default());
        assert!(entry(&archive, "docProps/core.xml")
            .contains("<dc:title>HazardWise Export</dc:title>"));
    }

    #[test]
    fn test_author_option() {
        let options = DocumentOptions::default().with_author("Dr. Patel");
        let archive = build_archive("t", &[], &options);
        assert!(entry(&archive, "docProps/core.xml").contains("<dc:creator>Dr. Patel</dc:creator>"));

        let options = DocumentOptions::default().with_author(" ");
        assert_eq!(options.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_blob_mime_type() {
        let blob = build_document("t", &[Paragraph::new("x").into()]);
        assert_eq!(blob.mime_type, MIME_TYPE);
        assert!(!blob.is_empty());
        assert_eq!(&blob.bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_plain_document_bolds_runs() {
        let blob = build_plain_document("t", &[DocxParagraph::new("Heading", true)]);
        let text = String::from_utf8_lossy(&blob.bytes);
        assert!(text.contains("<w:r><w:rPr><w:b/></w:rPr><w:t xml:space=\"preserve\">Heading</w:t></w:r>"));
    }
}
