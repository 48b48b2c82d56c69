//! Document body (`word/document.xml`).
//!
//! Translates [`DocxBlock`]s into WordprocessingML. Caller data is never
//! rejected: ragged table rows are padded, bullet levels are clamped and
//! characters XML cannot carry are dropped.

use super::styles::{BULLET_NUM_ID, MAX_BULLET_LEVEL};
use super::NS_MAIN;
use crate::blocks::{Cell, DocxBlock, Highlight, Paragraph, Table};
use crate::xml::{xml_escape, DECLARATION};

/// US Letter width in twips.
pub(crate) const PAGE_WIDTH: u32 = 12240;
/// US Letter height in twips.
pub(crate) const PAGE_HEIGHT: u32 = 15840;
/// Narrowest column the grid will produce, in twips.
pub(crate) const MIN_COLUMN_WIDTH: u32 = 360;

const HEADER_FILL: &str = "D9E2F3";

/// `word/document.xml`
pub(crate) fn document_xml(blocks: &[DocxBlock], page_margin: u32) -> String {
    let content_width = content_width(page_margin);

    let mut xml = String::with_capacity(4096);
    xml.push_str(DECLARATION);
    xml.push_str("<w:document xmlns:w=\"");
    xml.push_str(NS_MAIN);
    xml.push_str("\"><w:body>");

    let mut ends_with_table = false;
    for (index, block) in blocks.iter().enumerate() {
        match block {
            DocxBlock::Paragraph(paragraph) => {
                push_paragraph(&mut xml, paragraph);
                ends_with_table = false;
            }
            DocxBlock::Table(table) => {
                if push_table(&mut xml, table, content_width, index) {
                    ends_with_table = true;
                }
            }
        }
    }
    // A body may not end in a table.
    if ends_with_table {
        xml.push_str("<w:p/>");
    }

    let margin = page_margin.to_string();
    xml.push_str("<w:sectPr>");
    xml.push_str(&format!(
        "<w:pgSz w:w=\"{PAGE_WIDTH}\" w:h=\"{PAGE_HEIGHT}\"/>"
    ));
    xml.push_str(&format!(
        "<w:pgMar w:top=\"{margin}\" w:right=\"{margin}\" w:bottom=\"{margin}\" \
         w:left=\"{margin}\" w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>"
    ));
    xml.push_str("</w:sectPr></w:body></w:document>");
    xml
}

/// Usable width between the side margins.
pub(crate) fn content_width(page_margin: u32) -> u32 {
    PAGE_WIDTH
        .saturating_sub(page_margin.saturating_mul(2))
        .max(MIN_COLUMN_WIDTH)
}

// ============================================================================
// Paragraphs
// ============================================================================

fn push_paragraph(xml: &mut String, paragraph: &Paragraph) {
    if paragraph.text.trim().is_empty() {
        xml.push_str("<w:p/>");
        return;
    }

    xml.push_str("<w:p>");
    push_paragraph_properties(xml, paragraph);
    push_run(
        xml,
        &paragraph.text,
        paragraph.bold,
        paragraph.highlight,
        paragraph.underline,
    );
    xml.push_str("</w:p>");
}

fn push_paragraph_properties(xml: &mut String, paragraph: &Paragraph) {
    let mut ppr = String::new();
    if let Some(style) = paragraph.style {
        ppr.push_str("<w:pStyle w:val=\"");
        ppr.push_str(style.style_id());
        ppr.push_str("\"/>");
    }
    if let Some(level) = paragraph.bullet_level {
        let level = level.min(MAX_BULLET_LEVEL);
        ppr.push_str(&format!(
            "<w:numPr><w:ilvl w:val=\"{level}\"/><w:numId w:val=\"{BULLET_NUM_ID}\"/></w:numPr>"
        ));
    }
    if paragraph.spacing_before.is_some() || paragraph.spacing_after.is_some() {
        ppr.push_str("<w:spacing");
        if let Some(before) = paragraph.spacing_before {
            ppr.push_str(&format!(" w:before=\"{before}\""));
        }
        if let Some(after) = paragraph.spacing_after {
            ppr.push_str(&format!(" w:after=\"{after}\""));
        }
        ppr.push_str("/>");
    }
    if let Some(align) = paragraph.align {
        ppr.push_str("<w:jc w:val=\"");
        ppr.push_str(align.jc());
        ppr.push_str("\"/>");
    }

    if !ppr.is_empty() {
        xml.push_str("<w:pPr>");
        xml.push_str(&ppr);
        xml.push_str("</w:pPr>");
    }
}

fn push_run(
    xml: &mut String,
    text: &str,
    bold: bool,
    highlight: Option<Highlight>,
    underline: bool,
) {
    xml.push_str("<w:r>");
    if bold || underline || highlight.is_some() {
        xml.push_str("<w:rPr>");
        if bold {
            xml.push_str("<w:b/>");
        }
        if let Some(highlight) = highlight {
            xml.push_str("<w:highlight w:val=\"");
            xml.push_str(highlight.as_str());
            xml.push_str("\"/>");
        }
        if underline {
            xml.push_str("<w:u w:val=\"single\"/>");
        }
        xml.push_str("</w:rPr>");
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str("<w:t xml:space=\"preserve\">");
        xml.push_str(&xml_escape(line.trim_end_matches('\r')));
        xml.push_str("</w:t>");
    }
    xml.push_str("</w:r>");
}

// ============================================================================
// Tables
// ============================================================================

/// Grid widths: explicit widths first, then an equal split of what is left
/// of the content width. The last split column absorbs the rounding.
pub(crate) fn column_widths(table: &Table, columns: usize, content_width: u32) -> Vec<u32> {
    let mut widths: Vec<u32> = table
        .column_widths
        .iter()
        .take(columns)
        .map(|&w| w.max(MIN_COLUMN_WIDTH))
        .collect();

    let remaining = columns - widths.len();
    if remaining == 0 {
        return widths;
    }

    let used: u32 = widths.iter().fold(0u32, |acc, &w| acc.saturating_add(w));
    let budget = content_width.saturating_sub(used);
    let count = u32::try_from(remaining).unwrap_or(u32::MAX);
    let each = budget / count;
    let last = budget.saturating_sub(each.saturating_mul(count - 1));

    widths.extend(std::iter::repeat(each.max(MIN_COLUMN_WIDTH)).take(remaining - 1));
    widths.push(last.max(MIN_COLUMN_WIDTH));
    widths
}

/// Returns `false` when the table has no columns and was skipped.
fn push_table(xml: &mut String, table: &Table, content_width: u32, block_index: usize) -> bool {
    let columns = table.column_count();
    if columns == 0 {
        tracing::warn!(block = block_index, "Skipping table with no columns");
        return false;
    }

    let widths = column_widths(table, columns, content_width);
    let total: u32 = widths.iter().fold(0u32, |acc, &w| acc.saturating_add(w));

    xml.push_str("<w:tbl><w:tblPr><w:tblStyle w:val=\"TableGrid\"/>");
    xml.push_str(&format!("<w:tblW w:w=\"{total}\" w:type=\"dxa\"/>"));
    xml.push_str("<w:tblLayout w:type=\"fixed\"/></w:tblPr><w:tblGrid>");
    for width in &widths {
        xml.push_str(&format!("<w:gridCol w:w=\"{width}\"/>"));
    }
    xml.push_str("</w:tblGrid>");

    if !table.headers.is_empty() {
        xml.push_str("<w:tr><w:trPr><w:tblHeader/></w:trPr>");
        push_cells(xml, &table.headers, &widths, true);
        xml.push_str("</w:tr>");
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        if row.len() < columns {
            tracing::warn!(
                block = block_index,
                row = row_index,
                cells = row.len(),
                columns,
                "Padding short table row"
            );
        }
        xml.push_str("<w:tr>");
        push_cells(xml, row, &widths, false);
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    true
}

fn push_cells(xml: &mut String, cells: &[Cell], widths: &[u32], header: bool) {
    let empty = Cell::default();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).unwrap_or(&empty);
        xml.push_str(&format!(
            "<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"dxa\"/>"
        ));
        if header {
            xml.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{HEADER_FILL}\"/>"
            ));
        }
        xml.push_str("</w:tcPr>");

        if cell.text.trim().is_empty() {
            xml.push_str("<w:p/>");
        } else {
            xml.push_str("<w:p>");
            push_run(
                xml,
                &cell.text,
                cell.bold || header,
                cell.highlight,
                false,
            );
            xml.push_str("</w:p>");
        }
        xml.push_str("</w:tc>");
    }
}
