//! Markdown rendering for rich terminal output.
//!
//! Tables and multi-line text are emitted as fenced code blocks so that the
//! form's column alignment survives markdown rendering.

use std::fmt;

use super::text::layout_table;
use crate::document::{Document, Section, TextStyle};

/// Borrowing wrapper that renders a document as markdown.
pub struct Markdown<'a>(pub &'a Document);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.pages.len();
        for (i, page) in self.0.pages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "---")?;
            }
            writeln!(f, "# Page {} of {total}: {}", i + 1, page.title)?;
            writeln!(f)?;
            for section in &page.sections {
                write_section(f, section)?;
            }
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    match section {
        Section::Text(block) => match block.style {
            TextStyle::Header => writeln!(f, "## {}", block.text),
            TextStyle::SubHeader => writeln!(f, "### {}", block.text),
            TextStyle::Banner { inverted: true } => writeln!(f, "> **{}**", block.text),
            TextStyle::Banner { inverted: false } => writeln!(f, "**{}**", block.text),
            TextStyle::Notice => writeln!(f, "*{}*", block.text),
            TextStyle::Rule => writeln!(f, "---"),
            TextStyle::Blank => writeln!(f),
            TextStyle::Body if block.text.contains('\n') => write_code_block(f, block.text.lines()),
            TextStyle::Body => writeln!(f, "{}", block.text),
        },
        Section::KeyValue(kv) => writeln!(f, "**{}** {}", kv.label, kv.value),
        Section::Table(table) => {
            let lines = layout_table(table);
            write_code_block(f, lines.iter().map(String::as_str))
        }
    }
}

fn write_code_block<'a>(
    f: &mut fmt::Formatter<'_>,
    lines: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    writeln!(f, "```")?;
    for line in lines {
        writeln!(f, "{line}")?;
    }
    writeln!(f, "```")
}
