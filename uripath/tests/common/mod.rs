//! Common test utilities for integration tests.
//!
//! This module provides the shared base path and assertion helpers for
//! testing the uripath library.

use uripath::Path;

/// Path of the RFC 3986 section 5.4 base URI `http://a/b/c/d;p?q`.
#[allow(dead_code)]
pub const BASE: &str = "/b/c/d;p";

/// Asserts that `reference` resolves against `base` to `expected`.
#[allow(dead_code)]
pub fn assert_resolves(base: &str, reference: &str, expected: &str) {
    let resolved = Path::parse(base).resolve(&Path::parse(reference));
    assert_eq!(
        resolved.to_string(),
        expected,
        "resolving {reference:?} against {base:?}"
    );
}

/// Asserts that `raw` normalizes to `expected`, and that normalizing again
/// changes nothing.
#[allow(dead_code)]
pub fn assert_normalizes(raw: &str, expected: &str) {
    let normalized = Path::parse(raw).normalize();
    assert_eq!(normalized.to_string(), expected, "normalizing {raw:?}");
    assert_eq!(normalized.normalize(), normalized, "idempotence of {raw:?}");
}

/// Parses each raw string into a path.
#[allow(dead_code)]
pub fn paths(raw: &[&str]) -> Vec<Path> {
    raw.iter().map(|raw| Path::parse(raw)).collect()
}
