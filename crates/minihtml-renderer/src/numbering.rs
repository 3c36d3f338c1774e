//! Heading numbering state.

use std::collections::BTreeMap;
use std::fmt;

/// Deepest heading level that is rendered. Deeper headings are dropped.
pub const MAX_HEADING_LEVEL: usize = 5;

/// Position of a heading in the article: `(top, sub)`.
///
/// Orders by `top`, then `sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingNumber {
    /// Number of level-1 headings seen so far (0 before the first one).
    pub top: u32,
    /// Position among all headings recorded under `top`, starting at 1.
    pub sub: u32,
}

impl HeadingNumber {
    /// Anchor id used as the heading's `id` attribute and navigation target.
    pub fn anchor_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HeadingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "header_{}.{}", self.top, self.sub)
    }
}

/// Running heading counters for one conversion.
///
/// `level_counts[n]` counts headings of level `n + 1`; the level-1 count is
/// the current top number. `sub_counts` counts every heading under each top
/// number, so the sub number restarts whenever a new level-1 heading appears.
#[derive(Debug, Default, Clone)]
pub struct HeadingNumbering {
    level_counts: [u32; MAX_HEADING_LEVEL],
    sub_counts: BTreeMap<u32, u32>,
}

impl HeadingNumbering {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next heading of `level`.
    ///
    /// Returns `None` and leaves every counter untouched when `level` is 0 or
    /// deeper than [`MAX_HEADING_LEVEL`].
    pub fn assign(&mut self, level: usize) -> Option<HeadingNumber> {
        if level == 0 || level > MAX_HEADING_LEVEL {
            return None;
        }
        self.level_counts[level - 1] += 1;
        let top = self.level_counts[0];
        let sub = self.sub_counts.entry(top).or_insert(0);
        *sub += 1;
        Some(HeadingNumber { top, sub: *sub })
    }

    /// Every assigned number, ascending by top number then sub number.
    pub fn numbers(&self) -> impl Iterator<Item = HeadingNumber> + '_ {
        self.sub_counts
            .iter()
            .flat_map(|(&top, &count)| (1..=count).map(move |sub| HeadingNumber { top, sub }))
    }
}
