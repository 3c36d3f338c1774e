//! Block scanners.
//!
//! Each scanner starts at a line index, consumes the maximal run of lines
//! belonging to its block type, and returns the rendered fragment together
//! with the index of the first line it did not consume.

use std::fmt::Write;

use crate::classify::{is_code_line, is_list_item};
use crate::util::escape_angle_brackets;

/// Result of looking ahead for the next paragraph boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphLookahead {
    /// Index of the next empty line, or the number of lines if none follows.
    pub end: usize,
    /// Whether any line before `end` has non-whitespace content.
    pub has_content: bool,
}

/// Scan forward from `start` to the next empty line.
///
/// Whitespace-only lines do not end the scan but do not count as content.
pub fn find_next_paragraph<S: AsRef<str>>(lines: &[S], start: usize) -> ParagraphLookahead {
    let mut has_content = false;
    for (index, line) in lines.iter().enumerate().skip(start) {
        let line = line.as_ref();
        if line.is_empty() {
            return ParagraphLookahead {
                end: index,
                has_content,
            };
        }
        if !line.trim().is_empty() {
            has_content = true;
        }
    }
    ParagraphLookahead {
        end: lines.len().max(start),
        has_content,
    }
}

/// Consume a run of code lines starting at `start`.
///
/// Lines are escaped before classification, trimmed, and joined with a
/// trailing newline each.
///
/// # Examples
///
/// ```
/// use minihtml_renderer::scan::find_next_code;
///
/// let (code, next) = find_next_code(&["\tfoo", "\tbar", "plain"], 0);
/// assert_eq!(code, "foo\nbar\n");
/// assert_eq!(next, 2);
/// ```
pub fn find_next_code<S: AsRef<str>>(lines: &[S], start: usize) -> (String, usize) {
    let mut code = String::new();
    let mut index = start;
    while let Some(line) = lines.get(index) {
        let line = escape_angle_brackets(line.as_ref());
        if !is_code_line(&line) {
            break;
        }
        code.push_str(line.trim());
        code.push('\n');
        index += 1;
    }
    (code, index)
}

/// Consume a run of list items starting at `start`.
///
/// Every `-` is removed from an item, including hyphens inside words.
///
/// # Examples
///
/// ```
/// use minihtml_renderer::scan::find_next_list;
///
/// let (items, next) = find_next_list(&["- a", "- b", "not a list"], 0);
/// assert_eq!(items, "<li> a</li>\n<li> b</li>\n");
/// assert_eq!(next, 2);
/// ```
pub fn find_next_list<S: AsRef<str>>(lines: &[S], start: usize) -> (String, usize) {
    let mut items = String::new();
    let mut index = start;
    while let Some(line) = lines.get(index) {
        let line = line.as_ref();
        if !is_list_item(line) {
            break;
        }
        let item = escape_angle_brackets(line).replace('-', "");
        let _ = writeln!(items, "<li>{item}</li>");
        index += 1;
    }
    (items, index)
}
