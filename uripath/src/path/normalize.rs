//! Dot-segment removal.
//!
//! This follows the `remove_dot_segments` routine of RFC 3986 section 5.2.4,
//! applied to the slots of a path rather than to its string form:
//! - `.` is dropped
//! - `..` drops the slot before it, but never the root of an absolute path
//! - a rootless path with nothing left to drop keeps its `..` literally
//! - a path that ends in a slash, `.` or `..` ends in a slash afterwards

use super::slots::Slots;
use super::Path;

impl Path {
    /// Removes `.` and `..` segments.
    ///
    /// Returns `self` unchanged (sharing its structure) when there is nothing
    /// to remove. Normalization is idempotent.
    ///
    /// A rootless path never gains a leading slash. When everything before a
    /// trailing slash cancels out, the result is the empty path and the
    /// trailing slash is lost: `a/../` normalizes to `""`, not `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let path = Path::parse("/a/b/../c").normalize();
    /// assert_eq!(path.to_string(), "/a/c");
    ///
    /// // `..` cannot climb above the root.
    /// assert_eq!(Path::parse("/../g").normalize().to_string(), "/g");
    ///
    /// // A rootless path keeps what it cannot resolve.
    /// assert_eq!(Path::parse("a/../../b").normalize().to_string(), "../b");
    /// assert!(Path::parse("a/../").normalize().is_empty());
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Path {
        let slots = Slots::of(self);
        if !slots.parts.iter().copied().any(is_dot_segment) {
            return self.clone();
        }
        remove_dot_segments(slots).into_path()
    }
}

fn is_dot_segment(part: &str) -> bool {
    part == "." || part == ".."
}

pub(crate) fn remove_dot_segments(slots: Slots<'_>) -> Slots<'_> {
    let Slots { absolute, parts } = slots;
    let count = parts.len();
    let mut output: Vec<&str> = Vec::with_capacity(count);

    for (index, part) in parts.into_iter().enumerate() {
        let last = index + 1 == count;
        match part {
            "." => {
                if last {
                    output.push("");
                }
            }
            ".." => {
                let poppable = output.last().is_some_and(|previous| *previous != "..");
                if poppable {
                    output.pop();
                    if last {
                        output.push("");
                    }
                } else if absolute {
                    if last {
                        output.push("");
                    }
                } else {
                    output.push("..");
                }
            }
            // A rootless path must not start with an empty slot, or it
            // would print with a leading slash.
            "" if !absolute && output.is_empty() => {}
            _ => output.push(part),
        }
    }

    if output.is_empty() {
        output.push("");
    }
    Slots {
        absolute,
        parts: output,
    }
}
