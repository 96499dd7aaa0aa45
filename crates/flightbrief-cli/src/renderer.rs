//! Terminal rendering module for rich markdown output
//!
//! Briefs are rendered through termimad in rich mode, with plain text as
//! the fallback. Fenced blocks carry the form's fixed-width tables and pass
//! through untouched so their columns stay aligned.

use std::io::Write;

use anyhow::Result;
use flightbrief_core::{Document, Markdown, PlainText};
use termimad::{crossterm::style::Color, MadSkin};

const FENCE: &str = "```";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a brief to `out`
    pub fn render_document<W: Write>(&self, out: &mut W, document: &Document) -> Result<()> {
        if self.rich_enabled {
            self.render_markdown(out, &Markdown(document).to_string())
        } else {
            write!(out, "{}", PlainText(document))?;
            Ok(())
        }
    }

    /// Render preformatted text to `out`
    pub fn render_text<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.rich_enabled {
            for line in text.lines() {
                writeln!(out, "\x1b[2m{line}\x1b[0m")?;
            }
        } else {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn render_markdown<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        let mut in_block = false;
        for line in markdown.lines() {
            if line.starts_with(FENCE) {
                in_block = !in_block;
            } else if in_block {
                writeln!(out, "{line}")?;
            } else if line.starts_with('#') {
                // Keep the hash symbols visible, as in the printed form headings
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use flightbrief_core::document::{Cell, Page, Row, Table, TextStyle};

    use super::*;

    fn sample() -> Document {
        Document::new("JST").page(
            Page::new("Cover")
                .text(TextStyle::Header, "FLIGHT BRIEF COVER PAGE")
                .table(Table::new().row(Row::new([Cell::new("STD:"), Cell::new("09:00")]))),
        )
    }

    fn render(renderer: &TerminalRenderer) -> String {
        let mut out = Vec::new();
        renderer
            .render_document(&mut out, &sample())
            .expect("Failed to render");
        String::from_utf8(out).expect("Rendered output should be UTF-8")
    }

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);

        let output = render(&renderer);
        assert!(output.starts_with("Page 1 of 1: Cover"));
        assert!(output.contains("STD:  09:00"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);

        let output = render(&renderer);
        assert!(output.contains("\x1b[34m# Page 1 of 1: Cover\x1b[0m"));
        assert!(output.contains("STD:  09:00"));
        assert!(!output.contains(FENCE));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
