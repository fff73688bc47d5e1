//! Error conversion helpers for file reads
//!
//! Provides an extension trait for attaching the offending path to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the path that failed to be read.
    ///
    /// # Example
    /// ```ignore
    /// let content = fs.read_to_string(&path).with_path_context(&path)?;
    /// ```
    fn with_path_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
