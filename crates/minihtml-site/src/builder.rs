//! Static page builder.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minihtml_renderer::convert;
use tempfile::NamedTempFile;

use crate::source::{LineSource, SourceError};
use crate::template::{PageSettings, PageTemplate};

/// Configuration for building one page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Destination HTML file. Its parent directory must exist.
    pub output: PathBuf,
    /// Page chrome passed to the template.
    pub page: PageSettings,
}

/// Summary of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub lines: usize,
    pub headings: usize,
    pub bytes: usize,
}

/// Error returned by the static page builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

struct RenderedPage {
    html: String,
    lines: usize,
    headings: usize,
}

/// Converts an article and writes it as a single static HTML page.
pub struct StaticPageBuilder {
    config: BuildConfig,
    template: PageTemplate,
}

impl StaticPageBuilder {
    /// Create a builder using the embedded page template.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        Ok(Self {
            config,
            template: PageTemplate::new()?,
        })
    }

    /// Replace the page template.
    #[must_use]
    pub fn with_template(mut self, template: PageTemplate) -> Self {
        self.template = template;
        self
    }

    /// Render the page for `source` without writing it.
    pub fn render(&self, source: &dyn LineSource) -> Result<String, BuildError> {
        self.render_page(source).map(|page| page.html)
    }

    /// Render the page for `source` and write it to the configured output.
    ///
    /// The page is written to a temporary file next to the output and moved
    /// into place, so a failed build never leaves a partial file behind.
    pub fn build(&self, source: &dyn LineSource) -> Result<BuildReport, BuildError> {
        tracing::info!(source = %source.describe(), "Converting article");
        let page = self.render_page(source)?;

        let output = &self.config.output;
        write_atomic(output, page.html.as_bytes())?;
        tracing::info!(output = %output.display(), bytes = page.html.len(), "Wrote page");

        Ok(BuildReport {
            output: output.clone(),
            lines: page.lines,
            headings: page.headings,
            bytes: page.html.len(),
        })
    }

    fn render_page(&self, source: &dyn LineSource) -> Result<RenderedPage, BuildError> {
        let lines = source.read_lines()?;
        let document = convert(&lines);
        let html = self.template.render(&document.sections, &self.config.page)?;
        Ok(RenderedPage {
            html,
            lines: lines.len(),
            headings: document.toc.len(),
        })
    }
}

/// Write `contents` to `path` through a temporary file in the same directory.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let write_error = |source: io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    set_output_permissions(&file).map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Temporary files are created owner-only; published pages should be world-readable.
#[cfg(unix)]
fn set_output_permissions(file: &NamedTempFile) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_output_permissions(_file: &NamedTempFile) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::FileSource;

    struct StaticLines(Vec<&'static str>);

    impl LineSource for StaticLines {
        fn read_lines(&self) -> Result<Vec<String>, SourceError> {
            Ok(self.0.iter().map(|&l| l.to_owned()).collect())
        }

        fn describe(&self) -> String {
            "<memory>".to_owned()
        }
    }

    fn builder(output: PathBuf) -> StaticPageBuilder {
        StaticPageBuilder::new(BuildConfig {
            output,
            page: PageSettings::default(),
        })
        .unwrap()
    }

    fn entry_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_build_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let article = dir.path().join("api.article");
        std::fs::write(&article, "Intro\n\n* Overview\n- one\n\tcode <x>\n").unwrap();
        let output = dir.path().join("index.html");

        let report = builder(output.clone())
            .build(&FileSource::new(&article))
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<h2 id=\"header_1.1\">Overview</h2>"));
        assert!(html.contains("<a class=\"bold\" href=\"#header_1.1\">Overview</a>"));
        assert!(html.contains("<ul><li> one</li>\n</ul><br/>"));
        assert!(html.contains("<pre>code &lt;x&gt;\n</pre><br/>"));
        assert_eq!(
            report,
            BuildReport {
                output,
                lines: 5,
                headings: 1,
                bytes: html.len(),
            }
        );
    }

    #[test]
    fn test_build_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");
        std::fs::write(&output, "stale").unwrap();

        builder(output.clone())
            .build(&StaticLines(vec!["fresh"]))
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("fresh<br/>"));
        assert_eq!(entry_count(dir.path()), 1);
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");
        let source = StaticLines(vec!["* A", "text", "", "** b", "- item"]);
        let builder = builder(output.clone());

        builder.build(&source).unwrap();
        let first = std::fs::read(&output).unwrap();
        builder.build(&source).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");

        let err = builder(output.clone())
            .build(&FileSource::new(dir.path().join("missing.article")))
            .unwrap_err();

        assert!(matches!(err, BuildError::Source(SourceError::NotFound(_))));
        assert!(!output.exists());
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn test_render_failure_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");
        std::fs::write(&output, "previous").unwrap();
        let template = PageTemplate::from_source("{% include \"missing.html\" %}").unwrap();

        let err = builder(output.clone())
            .with_template(template)
            .build(&StaticLines(vec!["text"]))
            .unwrap_err();

        assert!(matches!(err, BuildError::Template(_)));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
        assert_eq!(entry_count(dir.path()), 1);
    }

    #[test]
    fn test_missing_output_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("index.html");

        let err = builder(output.clone())
            .build(&StaticLines(vec!["text"]))
            .unwrap_err();

        assert!(matches!(err, BuildError::Write { ref path, .. } if *path == output));
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn test_render_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");

        let html = builder(output.clone())
            .render(&StaticLines(vec!["intro", "* Title"]))
            .unwrap();

        assert!(html.contains("<h2 id=\"header_1.1\">Title</h2>"));
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_output_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");

        builder(output.clone())
            .build(&StaticLines(vec!["text"]))
            .unwrap();

        let mode = std::fs::metadata(&output).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
