//! Shared helpers for fragment rendering.

use std::borrow::Cow;

/// Entity-encode `>` and `<` in a raw line.
///
/// `>` is replaced before `<`. Ampersands and quotes are left alone, so an
/// article can still carry hand-written entities.
///
/// # Examples
///
/// ```
/// use minihtml_renderer::escape_angle_brackets;
///
/// assert_eq!(escape_angle_brackets("a <b> c"), "a &lt;b&gt; c");
/// assert_eq!(escape_angle_brackets("plain"), "plain");
/// ```
pub fn escape_angle_brackets(line: &str) -> Cow<'_, str> {
    if !line.contains(['<', '>']) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(line.replace('>', "&gt;").replace('<', "&lt;"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape_angle_brackets("no markup"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_both_brackets() {
        assert_eq!(escape_angle_brackets("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_escape_does_not_touch_ampersand() {
        assert_eq!(escape_angle_brackets("a & b > c"), "a & b &gt; c");
    }
}
