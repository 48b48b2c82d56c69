//! Generators for the XML parts of a word-processing package.

mod document;
mod package;
mod properties;
mod styles;

pub(crate) use document::document_xml;
pub(crate) use package::{content_types_xml, document_rels_xml, package_rels_xml};
pub(crate) use properties::{app_xml, core_xml};
pub(crate) use styles::{numbering_xml, styles_xml};

pub(crate) const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
