//! Error types for the uripath library.
//!
//! Only two operations on [`Path`](crate::Path) can fail: appending a segment
//! that is not a single path segment, and relativizing between paths that
//! have no relative form. Everything else is total.

use thiserror::Error;

/// Result type alias for operations that may fail with a uripath error.
///
/// # Examples
///
/// ```
/// use uripath::{Path, Result};
///
/// fn build() -> Result<Path> {
///     Path::parse("/api").append_segment("v1")
/// }
///
/// assert_eq!(build().unwrap().to_string(), "/api/v1");
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the uripath library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Segment text cannot be used as a single path segment.
    #[error("invalid segment '{segment}': {reason}")]
    InvalidSegment {
        /// The rejected segment text.
        segment: String,
        /// The reason the segment was rejected.
        reason: String,
    },

    /// No relative path leads from the base to the target.
    #[error("cannot relativize '{target}' against '{base}': {reason}")]
    NotRelativizable {
        /// The base path, as written.
        base: String,
        /// The target path, as written.
        target: String,
        /// Why no relative form exists.
        reason: String,
    },
}

impl Error {
    /// Check if error was raised for an invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let err = Path::EMPTY.append_segment("a/b").unwrap_err();
    /// assert!(err.is_invalid_segment());
    /// ```
    #[must_use]
    pub fn is_invalid_segment(&self) -> bool {
        matches!(self, Self::InvalidSegment { .. })
    }

    /// Check if error was raised because no relative path exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let err = Path::parse("/a").relativize(&Path::parse("b")).unwrap_err();
    /// assert!(err.is_not_relativizable());
    /// ```
    #[must_use]
    pub fn is_not_relativizable(&self) -> bool {
        matches!(self, Self::NotRelativizable { .. })
    }
}
