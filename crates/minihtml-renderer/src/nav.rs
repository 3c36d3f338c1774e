//! Side navigation menu.

use std::collections::HashMap;
use std::fmt::Write;

use crate::numbering::{HeadingNumber, HeadingNumbering};

/// One link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Heading position; its anchor id is the link target.
    pub number: HeadingNumber,
    /// Heading text, already HTML-escaped.
    pub title: String,
    /// Rendered bold when the title contains an uppercase letter.
    pub emphasized: bool,
}

impl NavEntry {
    pub fn new(number: HeadingNumber, title: impl Into<String>) -> Self {
        let title = title.into();
        let emphasized = title.chars().any(char::is_uppercase);
        Self {
            number,
            title,
            emphasized,
        }
    }

    pub fn anchor_id(&self) -> String {
        self.number.anchor_id()
    }
}

/// Collects navigation entries during the pass, keyed by heading number.
#[derive(Debug, Default)]
pub(crate) struct NavigationBuilder {
    entries: HashMap<HeadingNumber, NavEntry>,
}

impl NavigationBuilder {
    pub(crate) fn record(&mut self, entry: NavEntry) {
        self.entries.insert(entry.number, entry);
    }

    /// Entries in menu order: ascending top number, then sub number.
    pub(crate) fn into_ordered(mut self, numbering: &HeadingNumbering) -> Vec<NavEntry> {
        numbering
            .numbers()
            .filter_map(|number| self.entries.remove(&number))
            .collect()
    }
}

/// Render the floating navigation menu for `entries`, in the given order.
pub fn render_menu(entries: &[NavEntry]) -> String {
    let mut html = String::from("<div class=\"sidenav\">\n<h3>Navigation</h3>\n");
    for entry in entries {
        let class = if entry.emphasized {
            " class=\"bold\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a{class} href=\"#{}\">{}</a>",
            entry.number, entry.title
        );
    }
    html.push_str("</div>");
    html
}
