//! Reference resolution (RFC 3986 sections 5.2.2 and 5.2.3), path part only.

use super::{Path, Token};

impl Path {
    /// Resolves `reference` against this path as a base.
    ///
    /// - An absolute reference replaces the base and is normalized.
    /// - An empty reference yields the base unchanged.
    /// - Any other reference is appended to the base's directory (everything
    ///   up to and including its last slash), and the result is normalized.
    ///
    /// Resolution knows nothing about the authority; see
    /// [`merge`](Path::merge) for bases that have one.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let base = Path::parse("/a/b/c");
    /// assert_eq!(base.resolve(&Path::parse("d")).to_string(), "/a/b/d");
    /// assert_eq!(base.resolve(&Path::parse("../d")).to_string(), "/a/d");
    /// assert_eq!(base.resolve(&Path::parse("/x/./y")).to_string(), "/x/y");
    /// assert_eq!(base.resolve(&Path::EMPTY), base);
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Path) -> Path {
        if reference.is_absolute() {
            log::trace!("absolute reference {} replaces base {}", reference, self);
            return reference.normalize();
        }
        if reference.is_empty() {
            return self.clone();
        }
        self.merge(reference, false).normalize()
    }

    /// Merges a relative `reference` with this base path, without
    /// normalizing.
    ///
    /// When `base_has_authority` is set and the base is empty, the reference
    /// gets a leading slash, because a URI with an authority cannot have a
    /// rootless path. Otherwise the reference is appended to
    /// [`directory`](Path::directory). An absolute reference is returned
    /// as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// let reference = Path::parse("g");
    /// assert_eq!(Path::EMPTY.merge(&reference, true).to_string(), "/g");
    /// assert_eq!(Path::EMPTY.merge(&reference, false).to_string(), "g");
    /// assert_eq!(Path::parse("/b/c/d").merge(&reference, true).to_string(), "/b/c/g");
    /// ```
    #[must_use]
    pub fn merge(&self, reference: &Path, base_has_authority: bool) -> Path {
        if reference.is_absolute() {
            return reference.clone();
        }
        if base_has_authority && self.is_empty() {
            return Path::slash(reference.clone());
        }
        self.directory().concat(reference)
    }

    /// Returns the path up to and including its last slash.
    ///
    /// A path without any slash has the empty path as its directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Path;
    ///
    /// assert_eq!(Path::parse("/a/b/c").directory().to_string(), "/a/b/");
    /// assert_eq!(Path::parse("/a/b/").directory().to_string(), "/a/b/");
    /// assert!(Path::parse("c").directory().is_empty());
    /// ```
    #[must_use]
    pub fn directory(&self) -> Path {
        if self.ends_with_slash() {
            return self.clone();
        }

        let mut tokens: Vec<Token<'_>> = self.tokens().collect();
        match tokens.iter().rposition(|token| *token == Token::Slash) {
            Some(last_slash) => {
                tokens.truncate(last_slash + 1);
                Path::build(tokens, Path::EMPTY)
            }
            None => Path::EMPTY,
        }
    }
}
