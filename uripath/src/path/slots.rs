//! Flat view of a path as the texts between its slashes.
//!
//! `/a//b/` has the slots `["a", "", "b", ""]` behind a leading slash, and
//! `a/b` has `["a", "b"]` with none. An empty slot stands for "no segment
//! here". The list is never empty: the empty path and `/` both have the
//! single slot `""`.

use super::{Path, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slots<'a> {
    pub(crate) absolute: bool,
    pub(crate) parts: Vec<&'a str>,
}

impl<'a> Slots<'a> {
    pub(crate) fn of(path: &'a Path) -> Self {
        let mut tokens = path.tokens().peekable();
        let absolute = tokens.next_if_eq(&Token::Slash).is_some();

        let mut parts = Vec::new();
        let mut current = "";
        for token in tokens {
            match token {
                Token::Slash => parts.push(std::mem::take(&mut current)),
                Token::Segment(text) => current = text,
            }
        }
        parts.push(current);

        Self { absolute, parts }
    }

    /// Every slot but the last, which resolution replaces.
    pub(crate) fn directory(&self) -> &[&'a str] {
        &self.parts[..self.parts.len() - 1]
    }

    /// A rootless list starting with an empty slot would print with a
    /// leading slash; callers must not build one.
    pub(crate) fn into_path(self) -> Path {
        debug_assert!(self.absolute || self.parts.len() == 1 || !self.parts[0].is_empty());

        let mut tokens = Vec::with_capacity(self.parts.len() * 2);
        if self.absolute {
            tokens.push(Token::Slash);
        }
        for (index, part) in self.parts.into_iter().enumerate() {
            if index > 0 {
                tokens.push(Token::Slash);
            }
            if !part.is_empty() {
                tokens.push(Token::Segment(part));
            }
        }
        Path::build(tokens, Path::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(raw: &str) -> (bool, Vec<String>) {
        let path = Path::parse(raw);
        let slots = Slots::of(&path);
        let parts = slots.parts.iter().map(ToString::to_string).collect();
        (slots.absolute, parts)
    }

    #[test]
    fn test_slots_of() {
        assert_eq!(slots(""), (false, vec![String::new()]));
        assert_eq!(slots("/"), (true, vec![String::new()]));
        assert_eq!(slots("a/b"), (false, vec!["a".into(), "b".into()]));
        assert_eq!(
            slots("/a//b/"),
            (true, vec!["a".into(), String::new(), "b".into(), String::new()])
        );
    }

    #[test]
    fn test_directory_drops_last_slot() {
        let path = Path::parse("/a/b/c");
        assert_eq!(Slots::of(&path).directory(), ["a", "b"]);

        let path = Path::parse("/a/b/");
        assert_eq!(Slots::of(&path).directory(), ["a", "b"]);

        assert!(Slots::of(&Path::EMPTY).directory().is_empty());
    }

    #[test]
    fn test_into_path_round_trip() {
        for raw in ["", "/", "//", "a", "a/", "/a//b/", "../../x"] {
            let path = Path::parse(raw);
            assert_eq!(Slots::of(&path).into_path(), path, "round trip of {raw:?}");
        }
    }
}
