//! Per-line classification.
//!
//! Each predicate looks at one line in isolation. When a line matches more
//! than one, [`DocumentBuilder`](crate::DocumentBuilder) checks heading first,
//! then list item, then code.

/// Token that looks like a heading marker but is literal article text.
const ALL_TOKEN: &str = "*all*";

/// Returns true if the line is a heading (`* Title`, `** Sub title`, ...).
///
/// The line must start at column 0 with `*` and contain `"* "` somewhere.
/// Lines containing `*all*` are never headings.
///
/// # Examples
///
/// ```
/// use minihtml_renderer::classify::is_heading;
///
/// assert!(is_heading("* Overview"));
/// assert!(is_heading("** Details"));
/// assert!(!is_heading(" * indented"));
/// assert!(!is_heading("*all*"));
/// ```
pub fn is_heading(line: &str) -> bool {
    if line.contains(ALL_TOKEN) || !line.contains("* ") {
        return false;
    }
    let mut parts = line.split('*');
    matches!((parts.next(), parts.next()), (Some(""), Some(_)))
}

/// Returns true if the line is a list item (contains `"- "` anywhere).
pub fn is_list_item(line: &str) -> bool {
    line.contains("- ")
}

/// Returns true if the line belongs to a code block.
///
/// A line is code when it has a non-space character and any of:
/// - a tab anywhere
/// - four consecutive spaces anywhere
/// - exactly one leading space
///
/// Lines made only of spaces (including the empty line) are never code.
/// The single-leading-space rule is a compatibility quirk of the format.
pub fn is_code_line(line: &str) -> bool {
    let Some(first_non_space) = line.find(|c| c != ' ') else {
        return false;
    };
    line.contains('\t') || line.contains("    ") || first_non_space == 1
}
