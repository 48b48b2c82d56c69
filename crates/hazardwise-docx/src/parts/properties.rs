//! Document metadata parts (`docProps/core.xml`, `docProps/app.xml`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::xml::{xml_escape, DECLARATION};

/// `docProps/core.xml`. `title` and `author` are escaped here.
pub(crate) fn core_xml(title: &str, author: &str, created: &DateTime<Utc>) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Millis, true);
    let author = xml_escape(author);

    let mut xml = String::with_capacity(768);
    xml.push_str(DECLARATION);
    xml.push_str("<cp:coreProperties");
    xml.push_str(" xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\"");
    xml.push_str(" xmlns:dc=\"http://purl.org/dc/elements/1.1/\"");
    xml.push_str(" xmlns:dcterms=\"http://purl.org/dc/terms/\"");
    xml.push_str(" xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\"");
    xml.push_str(" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">");
    xml.push_str("<dc:title>");
    xml.push_str(&xml_escape(title));
    xml.push_str("</dc:title><dc:creator>");
    xml.push_str(&author);
    xml.push_str("</dc:creator><cp:lastModifiedBy>");
    xml.push_str(&author);
    xml.push_str("</cp:lastModifiedBy>");
    xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
    xml.push_str(&stamp);
    xml.push_str("</dcterms:created><dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
    xml.push_str(&stamp);
    xml.push_str("</dcterms:modified></cp:coreProperties>");
    xml
}

/// `docProps/app.xml`
pub(crate) fn app_xml() -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(DECLARATION);
    xml.push_str("<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\"");
    xml.push_str(" xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">");
    xml.push_str("<Application>HazardWise</Application></Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_xml_timestamps_have_millis() {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let xml = core_xml("Case <1>", "Safety & Co", &created);
        assert!(xml.contains("<dc:title>Case &lt;1&gt;</dc:title>"));
        assert!(xml.contains("<dc:creator>Safety &amp; Co</dc:creator>"));
        assert!(xml.contains(">2025-01-02T03:04:05.000Z</dcterms:created>"));
        assert!(xml.contains(">2025-01-02T03:04:05.000Z</dcterms:modified>"));
    }
}
