//! Static page generation for minihtml articles.
//!
//! Reads an article through a [`LineSource`], converts it with
//! `minihtml-renderer`, renders the sections into the embedded page template,
//! and writes the result atomically.

mod builder;
mod source;
mod template;

pub use builder::{BuildConfig, BuildError, BuildReport, StaticPageBuilder};
pub use source::{FileSource, LineSource, SourceError};
pub use template::{PageSettings, PageTemplate};
