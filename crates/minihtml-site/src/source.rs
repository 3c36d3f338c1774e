//! Article sources.

use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw lines of an article, newline-stripped and in order.
pub trait LineSource {
    /// Read every line of the article.
    fn read_lines(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable origin of the lines, for logging.
    fn describe(&self) -> String;
}

/// Error reading an article.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The article does not exist.
    #[error("Article not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The article exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Cannot read article {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Article stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.clone())
            } else {
                SourceError::Unreadable {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        Ok(content.lines().map(str::to_owned).collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_read_lines_strips_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.article");
        std::fs::write(&path, "* Title\r\ntext\n\n- item\n").unwrap();

        let lines = FileSource::new(&path).read_lines().unwrap();

        assert_eq!(lines, vec!["* Title", "text", "", "- item"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.article");

        let err = FileSource::new(&path).read_lines().unwrap_err();

        assert!(matches!(err, SourceError::NotFound(ref p) if *p == path));
        assert!(err.to_string().contains("missing.article"));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.article");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FileSource::new(&path).read_lines().unwrap_err();

        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        let err = FileSource::new(dir.path()).read_lines().unwrap_err();

        assert!(matches!(err, SourceError::Unreadable { .. }));
    }
}
