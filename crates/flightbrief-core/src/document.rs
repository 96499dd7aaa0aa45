//! The output tree of a generated brief.
//!
//! A [`Document`] is an ordered list of [`Page`]s, each an ordered list of
//! [`Section`]s. Sections carry text and layout hints only; turning them into
//! pixels, paper or terminal output is up to the caller. The crate ships one
//! such renderer, [`PlainText`].
//!
//! Pages and tables are assembled with consuming builder methods:
//!
//! ```rust
//! use flightbrief_core::document::{Cell, Page, Row, Table, TextStyle};
//!
//! let page = Page::new("Fuel")
//!     .text(TextStyle::SubHeader, "Fuel Summary")
//!     .table(
//!         Table::new()
//!             .row(Row::new(["", "TIME", "FUEL"]))
//!             .row(Row::new([Cell::new("TAXI OUT"), Cell::new("00.10"), Cell::new("200").right()])),
//!     );
//!
//! assert_eq!(page.sections.len(), 2);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::display::PlainText;

/// A complete brief for one flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Document {
    /// Carrier code of the template that produced the document
    pub carrier: String,
    /// Pages in print order
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(carrier: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
            pages: Vec::new(),
        }
    }

    /// Appends a page.
    pub fn page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Every section of every page, in order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.pages.iter().flat_map(|p| p.sections.iter())
    }

    /// Concatenated text of all sections, one line per text block, key/value
    /// pair or table row. Useful for searching a document's content.
    pub fn text_lines(&self) -> Vec<String> {
        self.sections().flat_map(Section::text_lines).collect()
    }
}

/// One printed page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Appends a text block.
    pub fn text(mut self, style: TextStyle, text: impl Into<String>) -> Self {
        self.sections.push(Section::Text(TextBlock::new(style, text)));
        self
    }

    /// Appends an empty line.
    pub fn blank(self) -> Self {
        self.text(TextStyle::Blank, "")
    }

    /// Appends a `label value` line.
    pub fn key_value(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.sections.push(Section::KeyValue(KeyValue {
            label: label.into(),
            value: value.into(),
        }));
        self
    }

    /// Appends a table.
    pub fn table(mut self, table: Table) -> Self {
        self.sections.push(Section::Table(table));
        self
    }

    /// Appends prebuilt sections, e.g. a block shared between pages.
    pub fn extend(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }
}

/// A block of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Text(TextBlock),
    KeyValue(KeyValue),
    Table(Table),
}

impl Section {
    /// The section's text content as plain lines, without layout.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            Section::Text(block) => vec![block.text.clone()],
            Section::KeyValue(kv) => vec![format!("{} {}", kv.label, kv.value)],
            Section::Table(table) => table
                .rows
                .iter()
                .map(|row| {
                    row.cells
                        .iter()
                        .map(|c| c.text.as_str())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
        }
    }
}

/// Styled free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TextBlock {
    pub style: TextStyle,
    pub text: String,
}

impl TextBlock {
    pub fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// How a text block should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// Page heading
    Header,
    SubHeader,
    /// Full-width emphasized strip; `inverted` prints light on dark
    Banner { inverted: bool },
    Body,
    /// A standalone statement such as "NO ALTERNATES PLANNED"
    Notice,
    /// Horizontal separator
    Rule,
    Blank,
}

/// A labeled value printed on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct KeyValue {
    pub label: String,
    pub value: String,
}

/// A grid of cells. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Number of columns in the widest row, counting spans.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::width).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty row used for vertical spacing.
    pub fn spacer() -> Self {
        Self::default()
    }

    pub fn is_spacer(&self) -> bool {
        self.cells.is_empty()
    }

    /// Columns covered by this row.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.span.max(1)).sum()
    }
}

/// One table cell with layout hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub align: Align,
    /// Preferred minimum width in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Number of columns covered
    #[serde(default = "default_span")]
    pub span: usize,
}

fn default_span() -> usize {
    1
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
            width: None,
            span: 1,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn center(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

impl From<&String> for Cell {
    fn from(text: &String) -> Self {
        Cell::new(text.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// JSON Schema describing [`Document`], for rendering collaborators.
#[cfg(feature = "schema")]
pub fn json_schema() -> schemars::Schema {
    schemars::schema_for!(Document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new("JST").page(
            Page::new("Cover")
                .text(TextStyle::Banner { inverted: true }, "ETOPS Sector")
                .key_value("Dispatcher:", "Alex Kim")
                .table(
                    Table::new()
                        .row(Row::new(["STD", "09:00"]))
                        .row(Row::spacer())
                        .row(Row::new([Cell::new("Block").span(2)])),
                ),
        )
    }

    #[test]
    fn test_builder_preserves_order() {
        let doc = sample();
        assert_eq!(doc.pages.len(), 1);
        let kinds: Vec<_> = doc
            .sections()
            .map(|s| match s {
                Section::Text(_) => "text",
                Section::KeyValue(_) => "kv",
                Section::Table(_) => "table",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "kv", "table"]);
    }

    #[test]
    fn test_text_lines() {
        let lines = sample().text_lines();
        assert_eq!(lines[0], "ETOPS Sector");
        assert_eq!(lines[1], "Dispatcher: Alex Kim");
        assert_eq!(lines[2], "STD 09:00");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_row_width_counts_spans() {
        let table = Table::new()
            .row(Row::new([Cell::new("a").span(3), Cell::new("b")]))
            .row(Row::new(["x", "y"]));
        assert_eq!(table.column_count(), 4);
        assert!(Row::spacer().is_spacer());
        assert_eq!(Cell::new("z").span(0).span, 1);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let first = &json["pages"][0]["sections"][0];
        assert_eq!(first["kind"], "text");
        assert_eq!(first["style"]["banner"]["inverted"], true);
        assert_eq!(json["pages"][0]["sections"][1]["kind"], "key_value");

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
