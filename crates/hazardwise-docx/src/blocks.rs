//! Content blocks accepted by the exporter.
//!
//! Blocks are built by the caller and consumed read-only by
//! [`build_document`](crate::build_document).

/// Named paragraph style defined in `word/styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    Title,
    Heading1,
    Heading2,
}

impl ParagraphStyle {
    /// Style id referenced by `w:pStyle`.
    #[must_use]
    pub fn style_id(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of `w:jc`.
    #[must_use]
    pub fn jc(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// A run highlight colour: one of the `ST_HighlightColor` values.
///
/// Word rejects any other `w:highlight` value, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    Yellow,
    White,
    DarkBlue,
    DarkCyan,
    DarkGreen,
    DarkMagenta,
    DarkRed,
    DarkYellow,
    DarkGray,
    LightGray,
    None,
}

impl Highlight {
    pub const ALL: [Highlight; 17] = [
        Self::Black,
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Magenta,
        Self::Red,
        Self::Yellow,
        Self::White,
        Self::DarkBlue,
        Self::DarkCyan,
        Self::DarkGreen,
        Self::DarkMagenta,
        Self::DarkRed,
        Self::DarkYellow,
        Self::DarkGray,
        Self::LightGray,
        Self::None,
    ];

    /// Value of `w:highlight`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::DarkBlue => "darkBlue",
            Self::DarkCyan => "darkCyan",
            Self::DarkGreen => "darkGreen",
            Self::DarkMagenta => "darkMagenta",
            Self::DarkRed => "darkRed",
            Self::DarkYellow => "darkYellow",
            Self::DarkGray => "darkGray",
            Self::LightGray => "lightGray",
            Self::None => "none",
        }
    }

    /// Parse a colour name, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|h| h.as_str().eq_ignore_ascii_case(name))
    }
}

/// Unknown colours are dropped so the run renders without a highlight.
fn parse_highlight(color: &str) -> Option<Highlight> {
    let parsed = Highlight::from_name(color);
    if parsed.is_none() {
        tracing::warn!(color = %color, "Ignoring unsupported highlight colour");
    }
    parsed
}

/// A single paragraph with one run of text.
///
/// Newlines in `text` become line breaks within the paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub bold: bool,
    pub underline: bool,
    pub style: Option<ParagraphStyle>,
    pub align: Option<Alignment>,
    /// Bullet indent level (0-based). `None` for no bullet.
    pub bullet_level: Option<u8>,
    /// Space before the paragraph, in twips.
    pub spacing_before: Option<u32>,
    /// Space after the paragraph, in twips.
    pub spacing_after: Option<u32>,
    pub highlight: Option<Highlight>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// An empty spacer paragraph.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text).style(ParagraphStyle::Title)
    }

    pub fn heading1(text: impl Into<String>) -> Self {
        Self::new(text).style(ParagraphStyle::Heading1)
    }

    pub fn heading2(text: impl Into<String>) -> Self {
        Self::new(text).style(ParagraphStyle::Heading2)
    }

    pub fn bullet(text: impl Into<String>, level: u8) -> Self {
        Self::new(text).bullet_level(level)
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn bullet_level(mut self, level: u8) -> Self {
        self.bullet_level = Some(level);
        self
    }

    #[must_use]
    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing_before = Some(before);
        self.spacing_after = Some(after);
        self
    }

    /// Set the highlight by colour name. Names outside `ST_HighlightColor`
    /// leave the highlight unset.
    #[must_use]
    pub fn highlight(mut self, color: impl AsRef<str>) -> Self {
        self.highlight = parse_highlight(color.as_ref());
        self
    }
}

/// A table cell with one paragraph of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
    pub highlight: Option<Highlight>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the highlight by colour name. Names outside `ST_HighlightColor`
    /// leave the highlight unset.
    #[must_use]
    pub fn highlight(mut self, color: impl AsRef<str>) -> Self {
        self.highlight = parse_highlight(color.as_ref());
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A table with an optional header row.
///
/// Rows may be ragged; the column count is the widest of the header and
/// every row, and short rows are padded with empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    /// Explicit column widths in twips. Missing columns share the rest of
    /// the page width.
    pub column_widths: Vec<u32>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn headers<I, C>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn column_widths(mut self, widths: impl Into<Vec<u32>>) -> Self {
        self.column_widths = widths.into();
        self
    }

    /// Widest of the header and all rows.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

/// One block of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocxBlock {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for DocxBlock {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Table> for DocxBlock {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// Plain paragraph accepted by the earlier exporter: text and a bold flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxParagraph {
    pub text: String,
    pub bold: bool,
}

impl DocxParagraph {
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }
}

impl From<DocxParagraph> for Paragraph {
    fn from(p: DocxParagraph) -> Self {
        Self {
            text: p.text,
            bold: p.bold,
            ..Self::default()
        }
    }
}

impl From<DocxParagraph> for DocxBlock {
    fn from(p: DocxParagraph) -> Self {
        Self::Paragraph(p.into())
    }
}
