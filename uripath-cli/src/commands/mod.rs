//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Remove dot segments from a path
//! - `resolve`: Resolve a reference against a base path
//! - `relativize`: Compute a relative path between two paths
//! - `segments`: List the segments of a path
//! - `inspect`: Show classification and structure of a path
//! - `append`: Append segments or a trailing slash

pub mod append;
pub mod inspect;
pub mod normalize;
pub mod relativize;
pub mod resolve;
pub mod segments;

pub use append::AppendCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use relativize::RelativizeCommand;
pub use resolve::ResolveCommand;
pub use segments::SegmentsCommand;
