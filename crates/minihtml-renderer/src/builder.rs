//! Single-pass document builder.

use crate::classify::{is_code_line, is_heading, is_list_item};
use crate::nav::{NavEntry, NavigationBuilder, render_menu};
use crate::numbering::HeadingNumbering;
use crate::scan::{find_next_code, find_next_list, find_next_paragraph};
use crate::sections::{Section, Sections};
use crate::util::escape_angle_brackets;

/// Prefix of the first line of every article.
const PARAGRAPH_OPENER: &str = "<p>\n";

/// Result of converting an article.
#[derive(Debug, Clone)]
pub struct ConvertedDocument {
    /// Rendered fragments; `body` and `nav` are filled by the builder.
    pub sections: Sections,
    /// Navigation entries in menu order.
    pub toc: Vec<NavEntry>,
}

/// Walks article lines once and renders them into [`Sections`].
///
/// The first line always opens a paragraph: it is prefixed with `<p>\n`
/// before classification, so it is never blank and never a heading. Blank
/// lines close the open paragraph and open a new one only when the
/// following run of lines has content, so consecutive blank lines never
/// produce an empty `<p></p>`.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sections: Sections,
    numbering: HeadingNumbering,
    nav: NavigationBuilder,
    paragraph_open: bool,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `lines` into body and navigation sections.
    pub fn build<S: AsRef<str>>(mut self, lines: &[S]) -> ConvertedDocument {
        let mut index = 0;
        while index < lines.len() {
            index = self.step(lines, index);
        }
        if self.paragraph_open {
            self.emit("</p>");
        }

        let toc = self.nav.into_ordered(&self.numbering);
        self.sections.push(Section::Nav, render_menu(&toc));

        tracing::debug!(
            lines = lines.len(),
            fragments = self.sections.fragments(Section::Body).len(),
            headings = toc.len(),
            "Converted article"
        );

        ConvertedDocument {
            sections: self.sections,
            toc,
        }
    }

    /// Process the line at `index` and return the index of the next unprocessed line.
    fn step<S: AsRef<str>>(&mut self, lines: &[S], index: usize) -> usize {
        let escaped = escape_angle_brackets(lines[index].as_ref());

        // The first line carries the paragraph opener and is classified with it.
        let opener = if index == 0 {
            self.paragraph_open = true;
            PARAGRAPH_OPENER
        } else {
            ""
        };
        let line = format!("{opener}{escaped}");

        if line.is_empty() {
            return self.paragraph_break(lines, index);
        }

        if is_heading(&line) {
            self.heading(&line);
            index + 1
        } else if is_list_item(&line) {
            let (items, next) = find_next_list(lines, index);
            self.emit(format!("{opener}<ul>{items}</ul><br/>"));
            next
        } else if is_code_line(&line) {
            let (code, next) = find_next_code(lines, index);
            self.emit(format!("{opener}<pre>{code}</pre><br/>"));
            next
        } else {
            self.emit(format!("{line}<br/>"));
            index + 1
        }
    }

    /// Handle the empty line at `blank`.
    fn paragraph_break<S: AsRef<str>>(&mut self, lines: &[S], blank: usize) -> usize {
        if self.paragraph_open {
            self.emit("</p>");
            self.paragraph_open = false;
        }

        let next = blank + 1;
        let lookahead = find_next_paragraph(lines, next);
        if lookahead.end - blank > 1 && lookahead.has_content {
            self.emit("\n<p>");
            self.paragraph_open = true;
        }
        next
    }

    fn heading(&mut self, line: &str) {
        let level = line.matches('*').count();
        let Some(number) = self.numbering.assign(level) else {
            tracing::trace!(level, "Dropping heading deeper than supported");
            return;
        };

        let title = line.replace('*', "");
        let title = title.trim();
        let tag = level + 1;
        self.emit(format!("<h{tag} id=\"{number}\">{title}</h{tag}>\n"));
        self.nav.record(NavEntry::new(number, title));
    }

    fn emit(&mut self, fragment: impl Into<String>) {
        self.sections.push(Section::Body, fragment);
    }
}

/// Convert `lines` with a fresh [`DocumentBuilder`].
pub fn convert<S: AsRef<str>>(lines: &[S]) -> ConvertedDocument {
    DocumentBuilder::new().build(lines)
}
