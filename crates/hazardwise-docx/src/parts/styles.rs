//! Style and numbering definitions (`word/styles.xml`, `word/numbering.xml`).

use super::NS_MAIN;
use crate::xml::DECLARATION;

/// Id of the single bullet list instance referenced by `w:numPr`.
pub(crate) const BULLET_NUM_ID: u32 = 1;
/// Deepest bullet level (0-based) defined by the numbering part.
pub(crate) const MAX_BULLET_LEVEL: u8 = 8;

const BULLET_GLYPHS: [&str; 3] = ["\u{2022}", "\u{25E6}", "\u{25AA}"];

struct ParagraphStyleDef {
    id: &'static str,
    name: &'static str,
    ppr: &'static str,
    rpr: &'static str,
}

const PARAGRAPH_STYLES: [ParagraphStyleDef; 3] = [
    ParagraphStyleDef {
        id: "Title",
        name: "Title",
        ppr: "<w:spacing w:after=\"240\"/>",
        rpr: "<w:b/><w:sz w:val=\"40\"/><w:szCs w:val=\"40\"/>",
    },
    ParagraphStyleDef {
        id: "Heading1",
        name: "heading 1",
        ppr: "<w:keepNext/><w:spacing w:before=\"360\" w:after=\"120\"/><w:outlineLvl w:val=\"0\"/>",
        rpr: "<w:b/><w:color w:val=\"1F3864\"/><w:sz w:val=\"32\"/><w:szCs w:val=\"32\"/>",
    },
    ParagraphStyleDef {
        id: "Heading2",
        name: "heading 2",
        ppr: "<w:keepNext/><w:spacing w:before=\"240\" w:after=\"80\"/><w:outlineLvl w:val=\"1\"/>",
        rpr: "<w:b/><w:color w:val=\"2F5496\"/><w:sz w:val=\"26\"/><w:szCs w:val=\"26\"/>",
    },
];

/// `word/styles.xml`: Normal, Title, Heading1, Heading2 and TableGrid.
pub(crate) fn styles_xml() -> String {
    let mut xml = String::with_capacity(3072);
    xml.push_str(DECLARATION);
    xml.push_str("<w:styles xmlns:w=\"");
    xml.push_str(NS_MAIN);
    xml.push_str("\">");

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    xml.push_str("<w:rFonts w:ascii=\"Calibri\" w:hAnsi=\"Calibri\" w:cs=\"Calibri\"/>");
    xml.push_str("<w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/>");
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>");
    xml.push_str("<w:spacing w:after=\"120\" w:line=\"264\" w:lineRule=\"auto\"/>");
    xml.push_str("</w:pPr></w:pPrDefault></w:docDefaults>");

    xml.push_str("<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">");
    xml.push_str("<w:name w:val=\"Normal\"/><w:qFormat/></w:style>");

    for style in &PARAGRAPH_STYLES {
        xml.push_str("<w:style w:type=\"paragraph\" w:styleId=\"");
        xml.push_str(style.id);
        xml.push_str("\"><w:name w:val=\"");
        xml.push_str(style.name);
        xml.push_str("\"/><w:basedOn w:val=\"Normal\"/><w:next w:val=\"Normal\"/><w:qFormat/>");
        xml.push_str("<w:pPr>");
        xml.push_str(style.ppr);
        xml.push_str("</w:pPr><w:rPr>");
        xml.push_str(style.rpr);
        xml.push_str("</w:rPr></w:style>");
    }

    xml.push_str("<w:style w:type=\"table\" w:styleId=\"TableGrid\">");
    xml.push_str("<w:name w:val=\"Table Grid\"/><w:pPr><w:spacing w:after=\"0\"/></w:pPr>");
    xml.push_str("<w:tblPr><w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        xml.push_str("<w:");
        xml.push_str(edge);
        xml.push_str(" w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>");
    }
    xml.push_str("</w:tblBorders><w:tblCellMar>");
    xml.push_str("<w:left w:w=\"108\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/>");
    xml.push_str("</w:tblCellMar></w:tblPr></w:style>");

    xml.push_str("</w:styles>");
    xml
}

/// `word/numbering.xml`: one bullet list with nine levels.
pub(crate) fn numbering_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(DECLARATION);
    xml.push_str("<w:numbering xmlns:w=\"");
    xml.push_str(NS_MAIN);
    xml.push_str("\">");

    xml.push_str("<w:abstractNum w:abstractNumId=\"0\">");
    xml.push_str("<w:multiLevelType w:val=\"hybridMultilevel\"/>");
    for level in 0..=u32::from(MAX_BULLET_LEVEL) {
        let glyph = BULLET_GLYPHS[level as usize % BULLET_GLYPHS.len()];
        let indent = 720 * (level + 1);
        xml.push_str(&format!(
            "<w:lvl w:ilvl=\"{level}\"><w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/>\
             <w:lvlText w:val=\"{glyph}\"/><w:lvlJc w:val=\"left\"/>\
             <w:pPr><w:ind w:left=\"{indent}\" w:hanging=\"360\"/></w:pPr></w:lvl>"
        ));
    }
    xml.push_str("</w:abstractNum>");

    xml.push_str(&format!(
        "<w:num w:numId=\"{BULLET_NUM_ID}\"><w:abstractNumId w:val=\"0\"/></w:num>"
    ));
    xml.push_str("</w:numbering>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_define_every_style_id() {
        let xml = styles_xml();
        for id in ["Normal", "Title", "Heading1", "Heading2", "TableGrid"] {
            assert!(xml.contains(&format!("w:styleId=\"{id}\"")), "{id}");
        }
    }

    #[test]
    fn test_numbering_has_nine_bullet_levels() {
        let xml = numbering_xml();
        assert_eq!(xml.matches("<w:lvl ").count(), 9);
        assert_eq!(xml.matches("w:val=\"bullet\"").count(), 9);
        assert!(xml.contains("<w:num w:numId=\"1\">"));
    }
}
