#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # uripath
//!
//! Immutable URI path values and the path algebra of RFC 3986 section 5.
//!
//! This library models the path component of a URI (the `/a/b/c` part) and
//! provides normalization, resolution and relativization over it. Scheme,
//! authority, query, fragment and percent-encoding are left to the caller:
//! segment text is carried as-is.
//!
//! ## Core Types
//!
//! - [`Path`]: an immutable path with shared structure
//! - [`Token`], [`Tokens`] and [`Segments`]: borrowed views of a path
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use uripath::Path;
//!
//! let base = Path::parse("/docs/guide/intro");
//! let page = base.resolve(&Path::parse("../api/./index"));
//! assert_eq!(page.to_string(), "/docs/api/index");
//!
//! let back = base.relativize(&page).unwrap();
//! assert_eq!(back.to_string(), "../api/index");
//!
//! let built = Path::parse("/docs").append_segment("faq").unwrap();
//! assert_eq!(built.to_string(), "/docs/faq");
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Path, Segments, Token, Tokens};
