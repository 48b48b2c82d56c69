//! HazardWise document export.
//!
//! Builds a minimal `.docx` (an OOXML word-processing package in a stored,
//! uncompressed ZIP) from paragraphs and tables. No compression, no external
//! templates.
//!
//! # Example
//!
//! ```
//! use hazardwise_docx::{build_document, DocxBlock, Paragraph, Table, MIME_TYPE};
//!
//! let blocks: Vec<DocxBlock> = vec![
//!     Paragraph::title("Safety case").into(),
//!     Paragraph::new("Prepared for review").bold().into(),
//!     Table::new()
//!         .headers(["Hazard", "Risk"])
//!         .row(["Wrong patient", "Undesirable"])
//!         .into(),
//! ];
//!
//! let blob = build_document("Safety case", &blocks);
//! assert_eq!(blob.mime_type, MIME_TYPE);
//! assert_eq!(&blob.bytes[..2], b"PK");
//! ```

pub mod blocks;
pub mod crc32;
pub mod dos_time;
pub mod error;
pub mod export;
mod parts;
pub mod xml;
pub mod zip;

pub use blocks::{
    Alignment, Cell, DocxBlock, DocxParagraph, Highlight, Paragraph, ParagraphStyle, Table,
};
pub use crc32::crc32;
pub use dos_time::DosDateTime;
pub use error::{DocxError, DocxResult};
pub use export::{
    build_archive, build_document, build_document_with, build_plain_document, write_blob,
    write_document, write_document_with, DocumentOptions, DocxBlob, DEFAULT_AUTHOR,
    DEFAULT_PAGE_MARGIN, DEFAULT_TITLE, MIME_TYPE, PART_PATHS,
};
pub use xml::xml_escape;
pub use zip::{ZipArchive, ZipEntry};
