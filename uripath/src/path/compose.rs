//! Building paths out of paths: appending and concatenation.

use std::ops::Add;

use super::{Node, Path, Token};
use crate::error::{Error, Result};

impl Path {
    /// Appends a trailing slash.
    ///
    /// Paths that already end with a slash are returned unchanged, and so is
    /// the empty path, which must stay relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// assert_eq!(Path::parse("/a").append_slash().to_string(), "/a/");
    /// assert_eq!(Path::parse("/a/").append_slash().to_string(), "/a/");
    /// assert!(Path::EMPTY.append_slash().is_empty());
    /// ```
    #[must_use]
    pub fn append_slash(&self) -> Path {
        if self.is_empty() || self.ends_with_slash() {
            return self.clone();
        }
        self.concat(&Path::slash(Path::EMPTY))
    }

    /// Appends one segment.
    ///
    /// A slash is inserted before the segment unless the path is empty or
    /// already ends with one, so `/a` and `/a/` both become `/a/b`, and the
    /// empty path becomes the rootless `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if `segment` is empty or contains
    /// `/`. A literal slash must be percent-encoded by the caller first.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let path = Path::parse("/a").append_segment("b").unwrap();
    /// assert_eq!(path.to_string(), "/a/b");
    ///
    /// assert!(Path::parse("/a").append_segment("b/c").is_err());
    /// ```
    pub fn append_segment(&self, segment: &str) -> Result<Path> {
        validate_segment(segment)?;

        let tail = Path::segment(segment, Path::EMPTY);
        Ok(if self.is_empty() {
            tail
        } else if self.ends_with_slash() {
            self.concat(&tail)
        } else {
            self.concat(&Path::slash(tail))
        })
    }

    /// Builds a path from segment texts, separated by slashes.
    ///
    /// An absolute path gets a leading slash; an absolute path with no
    /// segments is `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] for the first segment that
    /// [`append_segment`](Path::append_segment) would reject.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let path = Path::from_segments(true, ["a", "b"]).unwrap();
    /// assert_eq!(path, Path::parse("/a/b"));
    /// ```
    pub fn from_segments<I, S>(absolute: bool, segments: I) -> Result<Path>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| {
                let segment = segment.as_ref();
                validate_segment(segment)?;
                Ok(segment.to_owned())
            })
            .collect::<Result<Vec<_>>>()?;

        let mut tokens = Vec::with_capacity(segments.len() * 2 + 1);
        if absolute && segments.is_empty() {
            tokens.push(Token::Slash);
        }
        for (index, segment) in segments.iter().enumerate() {
            if absolute || index > 0 {
                tokens.push(Token::Slash);
            }
            tokens.push(Token::Segment(segment));
        }
        Ok(Path::build(tokens, Path::EMPTY))
    }

    /// Concatenates `suffix` onto this path.
    ///
    /// The suffix takes the place of this path's end and is shared, not
    /// copied. At the junction, a trailing slash meeting a leading slash
    /// collapses into one, and a trailing segment meeting a leading segment
    /// becomes a single segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let joined = Path::parse("/a/").concat(&Path::parse("/b"));
    /// assert_eq!(joined.to_string(), "/a/b");
    ///
    /// let joined = &Path::parse("/a/") + &Path::parse("b/c");
    /// assert_eq!(joined.to_string(), "/a/b/c");
    /// ```
    #[must_use]
    pub fn concat(&self, suffix: &Path) -> Path {
        if self.is_empty() {
            return suffix.clone();
        }
        if suffix.is_empty() {
            return self.clone();
        }

        let mut prefix: Vec<Token<'_>> = self.tokens().collect();
        let rest = match (prefix.last().copied(), suffix.node()) {
            (Some(Token::Slash), Some(Node::Slash(_))) => {
                prefix.pop();
                suffix.clone()
            }
            (Some(Token::Segment(head)), Some(Node::Segment(text, tail))) => {
                prefix.pop();
                Path::segment(format!("{head}{text}"), tail.clone())
            }
            _ => suffix.clone(),
        };
        Path::build(prefix, rest)
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    fn add(self, suffix: &Path) -> Path {
        self.concat(suffix)
    }
}

fn validate_segment(segment: &str) -> Result<()> {
    let reason = if segment.is_empty() {
        "segment must not be empty"
    } else if segment.contains('/') {
        "segment must not contain '/'; percent-encode it as %2F"
    } else {
        return Ok(());
    };

    Err(Error::InvalidSegment {
        segment: segment.to_string(),
        reason: reason.to_string(),
    })
}
