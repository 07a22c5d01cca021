//! Content-document resolution
//!
//! The shell renders a single local HTML document. A document compiled
//! into the binary is the default, so the binary is self-contained; a
//! path supplied by the user overrides it and is served as a file:// URL.

use crate::utils::error::{ChromelessError, Result};
use std::path::Path;

/// Content document compiled into the binary
pub const DEFAULT_DOCUMENT: &str = include_str!("../../content/index.html");

/// Source of the window-content document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// The built-in document
    Embedded,

    /// A user-supplied document, held as a file:// URL
    File(String),
}

impl Content {
    /// Resolve the content source from an optional user-supplied path
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Content::Embedded),
            Some(path) => {
                let path = path.canonicalize().map_err(|e| {
                    ChromelessError::InvalidInput(format!(
                        "Content document {}: {}",
                        path.display(),
                        e
                    ))
                })?;

                if !path.is_file() {
                    return Err(ChromelessError::InvalidInput(format!(
                        "Content document {} is not a file",
                        path.display()
                    )));
                }

                Ok(Content::File(format!("file://{}", path.display())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_document_wires_controls() {
        assert!(DEFAULT_DOCUMENT.contains(r#"id="minimize""#));
        assert!(DEFAULT_DOCUMENT.contains(r#"id="maximize""#));
        assert!(DEFAULT_DOCUMENT.contains(r#"id="close""#));
        assert!(DEFAULT_DOCUMENT.contains(r#"id="titlebar""#));
        assert!(DEFAULT_DOCUMENT.contains("ipc.postMessage"));
    }

    #[test]
    fn test_resolve_defaults_to_embedded() {
        assert_eq!(Content::resolve(None).unwrap(), Content::Embedded);
    }

    #[test]
    fn test_resolve_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "<html></html>").unwrap();

        let content = Content::resolve(Some(file.path())).unwrap();
        match content {
            Content::File(url) => assert!(url.starts_with("file://")),
            other => panic!("Expected file content, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_missing_file() {
        let result = Content::resolve(Some(Path::new("/definitely/not/here.html")));
        assert!(matches!(result, Err(ChromelessError::InvalidInput(_))));
    }

    #[test]
    fn test_resolve_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = Content::resolve(Some(dir.path()));
        assert!(matches!(result, Err(ChromelessError::InvalidInput(_))));
    }
}
