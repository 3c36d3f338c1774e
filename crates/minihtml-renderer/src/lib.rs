//! Line-oriented article renderer.
//!
//! This crate turns the lines of a lightweight article format into HTML
//! fragments grouped into named [`Sections`]:
//!
//! - `* Heading`, `** Sub heading`: numbered headings with `header_<top>.<sub>` anchors
//! - `- item`: unordered list items
//! - tab, four-space or single-space indented lines: preformatted code
//! - everything else: paragraph text, split on blank lines
//!
//! # Architecture
//!
//! - [`classify`]: pure per-line predicates
//! - [`scan`]: cursor-advancing block scanners
//! - [`DocumentBuilder`]: the single pass that dispatches between them
//! - [`HeadingNumbering`] and the navigation post-pass that builds the side menu
//!
//! Page chrome (template, file I/O) lives in `minihtml-site`.
//!
//! # Example
//!
//! ```
//! use minihtml_renderer::{DocumentBuilder, Section};
//!
//! let lines = ["Introduction", "* Overview", "Some text", "- one", "- two"];
//! let document = DocumentBuilder::new().build(&lines);
//!
//! assert!(document.sections.render(Section::Body).contains("header_1.1"));
//! assert_eq!(document.toc.len(), 1);
//! ```

mod builder;
pub mod classify;
mod nav;
mod numbering;
pub mod scan;
mod sections;
mod util;

pub use builder::{ConvertedDocument, DocumentBuilder, convert};
pub use nav::{NavEntry, render_menu};
pub use numbering::{HeadingNumber, HeadingNumbering, MAX_HEADING_LEVEL};
pub use sections::{Section, Sections};
pub use util::escape_angle_brackets;
