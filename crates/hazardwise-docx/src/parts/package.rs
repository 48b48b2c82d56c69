//! Package manifest and relationship parts.

use crate::xml::DECLARATION;

const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// `[Content_Types].xml`
pub(crate) fn content_types_xml() -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(DECLARATION);
    xml.push_str("<Types xmlns=\"");
    xml.push_str(NS_CONTENT_TYPES);
    xml.push_str("\">");
    xml.push_str("<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>");
    xml.push_str("<Default Extension=\"xml\" ContentType=\"application/xml\"/>");
    for (part, content_type) in [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/word/numbering.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ] {
        xml.push_str("<Override PartName=\"");
        xml.push_str(part);
        xml.push_str("\" ContentType=\"");
        xml.push_str(content_type);
        xml.push_str("\"/>");
    }
    xml.push_str("</Types>");
    xml
}

fn relationships_xml(rels: &[(&str, String, &str)]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(DECLARATION);
    xml.push_str("<Relationships xmlns=\"");
    xml.push_str(NS_RELATIONSHIPS);
    xml.push_str("\">");
    for (id, rel_type, target) in rels {
        xml.push_str("<Relationship Id=\"");
        xml.push_str(id);
        xml.push_str("\" Type=\"");
        xml.push_str(rel_type);
        xml.push_str("\" Target=\"");
        xml.push_str(target);
        xml.push_str("\"/>");
    }
    xml.push_str("</Relationships>");
    xml
}

/// `_rels/.rels`
pub(crate) fn package_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", format!("{REL_BASE}/officeDocument"), "word/document.xml"),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .to_string(),
            "docProps/core.xml",
        ),
        ("rId3", format!("{REL_BASE}/extended-properties"), "docProps/app.xml"),
    ])
}

/// `word/_rels/document.xml.rels`
pub(crate) fn document_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", format!("{REL_BASE}/styles"), "styles.xml"),
        ("rId2", format!("{REL_BASE}/numbering"), "numbering.xml"),
    ])
}
