//! The URI path value type and its algebra.
//!
//! A [`Path`] is the `/a/b/c` part of a URI, stored as an immutable cons-list
//! of two token kinds: a slash, or a segment of text. Tails are reference
//! counted, so building a longer path on top of an existing one shares the
//! existing structure instead of copying it.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! A path whose first token is a slash is *absolute*; every other path,
//! including the empty one, is *relative*. A relative path that starts with a
//! segment is also called *rootless*.
//!
//! ## Normalization
//!
//! [`Path::normalize`] removes `.` and `..` segments following RFC 3986
//! section 5.2.4. `..` never climbs above the root of an absolute path, and is
//! kept literally when a rootless path has nothing left to pop.
//!
//! ## Resolution and relativization
//!
//! [`Path::resolve`] merges a reference with the directory of a base path and
//! normalizes the result. [`Path::relativize`] is its inverse: it finds the
//! relative reference that resolves against the base to the target.
//!
//! # Examples
//!
//! ```
//! use uripath::Path;
//!
//! let base = Path::parse("/a/b/c");
//!
//! assert_eq!(base.resolve(&Path::parse("../d")).to_string(), "/a/d");
//! assert_eq!(base.resolve(&Path::parse("/x/y")).to_string(), "/x/y");
//!
//! let relative = base.relativize(&Path::parse("/a/x/y")).unwrap();
//! assert_eq!(relative.to_string(), "../x/y");
//! assert_eq!(base.resolve(&relative), Path::parse("/a/x/y"));
//! ```

mod compose;
mod normalize;
mod relativize;
mod resolve;
mod slots;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable URI path.
///
/// Paths compare equal when their token sequences are equal, regardless of
/// how much structure they share.
///
/// # Examples
///
/// ```
/// use uripath::Path;
///
/// let path = Path::parse("/a/b/");
/// assert!(path.is_absolute());
/// assert_eq!(path.length(), 2);
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "b"]);
/// assert!(path.ends_with_slash());
/// ```
#[derive(Clone, Default)]
pub struct Path(Option<Arc<Node>>);

enum Node {
    Slash(Path),
    Segment(Box<str>, Path),
}

/// A single token of a [`Path`], borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A `/` separator.
    Slash,
    /// The text of one segment, never empty and never containing `/`.
    Segment(&'a str),
}

impl Path {
    /// The empty path.
    pub const EMPTY: Path = Path(None);

    /// Parses a raw path string into a path.
    ///
    /// Every `/` becomes a slash token and the text between slashes becomes a
    /// segment. Empty text between two slashes produces no segment, so `//`
    /// is two consecutive slashes. Segment text is taken as-is: decoding
    /// percent-escapes is left to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// assert!(Path::parse("").is_empty());
    /// assert_eq!(Path::parse("/a//b").length(), 2);
    /// assert_eq!(Path::parse("a/b").to_string(), "a/b");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Path {
        if raw.is_empty() {
            return Path::EMPTY;
        }

        let mut tokens = Vec::new();
        for (index, part) in raw.split('/').enumerate() {
            if index > 0 {
                tokens.push(Token::Slash);
            }
            if !part.is_empty() {
                tokens.push(Token::Segment(part));
            }
        }
        Path::build(tokens, Path::EMPTY)
    }

    /// Returns `true` if this is the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the number of segments, not counting slashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// assert_eq!(Path::EMPTY.length(), 0);
    /// assert_eq!(Path::parse("/").length(), 0);
    /// assert_eq!(Path::parse("/a/b/").length(), 2);
    /// ```
    #[must_use]
    pub fn length(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the first token is a slash.
    #[must_use]
    pub fn starts_with_slash(&self) -> bool {
        matches!(self.node(), Some(Node::Slash(_)))
    }

    /// Returns `true` if the first token is a segment.
    #[must_use]
    pub fn starts_with_segment(&self) -> bool {
        matches!(self.node(), Some(Node::Segment(..)))
    }

    /// Returns `true` if the last token is a slash.
    #[must_use]
    pub fn ends_with_slash(&self) -> bool {
        self.tokens().last() == Some(Token::Slash)
    }

    /// Returns `true` if the path starts with a slash.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.starts_with_slash()
    }

    /// Returns `true` if the path does not start with a slash.
    ///
    /// The empty path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns an iterator over the segment texts, skipping slashes.
    ///
    /// The iterator is cheap to clone, so the sequence can be walked again
    /// from any point.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            tokens: self.tokens(),
        }
    }

    /// Returns an iterator over all tokens, slashes included.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::{Path, Token};
    ///
    /// let path = Path::parse("/a");
    /// let tokens: Vec<_> = path.tokens().collect();
    /// assert_eq!(tokens, [Token::Slash, Token::Segment("a")]);
    /// ```
    #[must_use]
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            next: self.node(),
        }
    }

    /// Returns the text of the last segment, if there is one.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments().last()
    }

    fn node(&self) -> Option<&Node> {
        self.0.as_deref()
    }

    fn slash(tail: Path) -> Path {
        Path(Some(Arc::new(Node::Slash(tail))))
    }

    fn segment(text: impl Into<Box<str>>, tail: Path) -> Path {
        Path(Some(Arc::new(Node::Segment(text.into(), tail))))
    }

    /// Conses `tokens` in front of `tail`, back to front.
    fn build<'t>(tokens: Vec<Token<'t>>, tail: Path) -> Path {
        tokens
            .into_iter()
            .rev()
            .fold(tail, |tail, token| match token {
                Token::Slash => Path::slash(tail),
                Token::Segment(text) => Path::segment(text, tail),
            })
    }
}

impl Drop for Path {
    // Unlinks uniquely owned nodes one by one; the default recursive drop
    // would use one stack frame per token.
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = match Arc::try_unwrap(node) {
                Ok(mut node) => match &mut node {
                    Node::Slash(tail) | Node::Segment(_, tail) => tail.0.take(),
                },
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.tokens().eq(other.tokens()),
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0usize;
        for token in self.tokens() {
            token.hash(state);
            count += 1;
        }
        state.write_usize(count);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens() {
            match token {
                Token::Slash => f.write_str("/")?,
                Token::Segment(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.to_string()).finish()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::parse(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Path::parse(&raw)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Path::parse(&raw))
    }
}

/// Iterator over the tokens of a [`Path`].
#[derive(Clone)]
pub struct Tokens<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (token, tail) = match self.next? {
            Node::Slash(tail) => (Token::Slash, tail),
            Node::Segment(text, tail) => (Token::Segment(text), tail),
        };
        self.next = tail.node();
        Some(token)
    }
}

impl fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over the segment texts of a [`Path`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    tokens: Tokens<'a>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.tokens.find_map(|token| match token {
            Token::Segment(text) => Some(text),
            Token::Slash => None,
        })
    }
}
