//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.read_to_string(&path)
    ///     .with_path_context("read navigation file", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Map an I/O error on an output path to `OutputFailed`.
    fn as_output_error(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn as_output_error(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::OutputFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_io_error_when_adding_context_then_message_names_action_and_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "boom"));
        let err = result
            .with_path_context("read navigation file", Path::new("/tmp/nav.json"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "operation failed: read navigation file: /tmp/nav.json"
        );
    }

    #[test]
    fn given_io_error_on_output_when_converting_then_output_failed() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result.as_output_error(Path::new("out.html")).unwrap_err();
        assert!(matches!(err, ApplicationError::OutputFailed { path, .. } if path == PathBuf::from("out.html")));
    }
}
