//! Relativization: the inverse of [`Path::resolve`].

use super::slots::Slots;
use super::Path;
use crate::error::{Error, Result};

impl Path {
    /// Computes the relative reference that leads from this base to
    /// `target`.
    ///
    /// Both paths are normalized first. The result climbs out of the part of
    /// the base's directory that the target does not share, using `..`, and
    /// then descends into the rest of the target. The last segment of the
    /// base does not count, because resolution replaces it. For every
    /// successful call, `base.normalize().resolve(&result)` equals
    /// `target.normalize()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRelativizable`] if one path is absolute and the
    /// other is not, or if a rootless base would need to climb above a `..`
    /// it cannot resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let base = Path::parse("/a/b/c");
    ///
    /// let relative = base.relativize(&Path::parse("/a/b/d")).unwrap();
    /// assert_eq!(relative.to_string(), "d");
    ///
    /// let relative = base.relativize(&Path::parse("/a/x/y")).unwrap();
    /// assert_eq!(relative.to_string(), "../x/y");
    ///
    /// assert!(base.relativize(&Path::parse("x/y")).is_err());
    /// ```
    pub fn relativize(&self, target: &Path) -> Result<Path> {
        let base_path = self.normalize();
        let target_path = target.normalize();

        if base_path.is_absolute() != target_path.is_absolute() {
            let reason = if base_path.is_absolute() {
                "base is absolute but target is relative"
            } else {
                "base is relative but target is absolute"
            };
            return Err(self.not_relativizable(target, reason));
        }
        if base_path == target_path {
            return Ok(Path::EMPTY);
        }

        let base = Slots::of(&base_path);
        let target_slots = Slots::of(&target_path);
        let base_dir = base.directory();
        let target_dir = target_slots.directory();

        let common = base_dir
            .iter()
            .zip(target_dir)
            .take_while(|(a, b)| a == b)
            .count();
        let climb = &base_dir[common..];
        if climb.contains(&"..") {
            return Err(self.not_relativizable(target, "base climbs above its own '..' segments"));
        }

        let rest = &target_slots.parts[common..];
        let mut parts: Vec<&str> = vec![".."; climb.len()];
        if climb.is_empty() && needs_dot_prefix(rest) {
            parts.push(".");
        }
        parts.extend_from_slice(rest);

        Ok(Slots {
            absolute: false,
            parts,
        }
        .into_path())
    }

    fn not_relativizable(&self, target: &Path, reason: &str) -> Error {
        log::debug!("cannot relativize {} against {}: {}", target, self, reason);
        Error::NotRelativizable {
            base: self.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Whether a result without `..` must start with `.`: an empty first slot
/// would make it absolute, and a first segment with `:` would read as a
/// scheme (RFC 3986 section 4.2).
fn needs_dot_prefix(rest: &[&str]) -> bool {
    rest.first()
        .map_or(true, |first| first.is_empty() || first.contains(':'))
}
