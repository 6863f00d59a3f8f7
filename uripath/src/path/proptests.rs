//! Property-based tests for the path algebra as a whole.
//!
//! The per-algorithm modules carry small property suites of their own. This
//! one runs many more cases and checks how the operations fit together.

use super::Path;
use proptest::prelude::*;

// Strategy for single slots, dot segments included
fn slot_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,6}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(slot_strategy(), 0..10)).prop_map(
        |(absolute, slots)| {
            let joined = slots.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._~%-]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsing and printing are inverse
    #[test]
    fn parse_display_round_trip(raw in raw_path_strategy()) {
        prop_assert_eq!(Path::parse(&raw).to_string(), raw);
    }

    // Exactly one of absolute and relative holds
    #[test]
    fn classification_exclusive(raw in raw_path_strategy()) {
        let path = Path::parse(&raw);
        prop_assert_ne!(path.is_absolute(), path.is_relative());
        prop_assert_eq!(path.is_empty(), !path.starts_with_slash() && !path.starts_with_segment());
    }

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent(raw in raw_path_strategy()) {
        let once = Path::parse(&raw).normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    // resolve(base, Empty) == base
    #[test]
    fn resolve_empty_identity(raw in raw_path_strategy()) {
        let base = Path::parse(&raw);
        prop_assert_eq!(base.resolve(&Path::EMPTY), base);
    }

    // An absolute reference does not depend on the base
    #[test]
    fn resolve_absolute_override(base in raw_path_strategy(), reference in raw_path_strategy()) {
        let base = Path::parse(&base);
        let reference = Path::parse(&format!("/{reference}"));
        prop_assert!(reference.is_absolute());
        prop_assert_eq!(base.resolve(&reference), reference.normalize());
    }

    // Resolved results are always normalized; the empty reference gives the base as-is
    #[test]
    fn resolve_result_normalized(base in raw_path_strategy(), reference in raw_path_strategy()) {
        let base = Path::parse(&base);
        let reference = Path::parse(&reference);
        let resolved = base.resolve(&reference);
        if reference.is_empty() {
            prop_assert_eq!(resolved, base);
        } else {
            prop_assert_eq!(resolved.normalize(), resolved);
        }
    }

    // Relativizing then resolving gives the target back
    #[test]
    fn relativize_round_trip(base in raw_path_strategy(), target in raw_path_strategy()) {
        let base = Path::parse(&base).normalize();
        let target = Path::parse(&target).normalize();
        match base.relativize(&target) {
            Ok(relative) => {
                prop_assert!(relative.is_relative());
                prop_assert_eq!(base.resolve(&relative), target);
            }
            Err(err) => {
                prop_assert!(err.is_not_relativizable());
                prop_assert!(base.is_relative() || target.is_relative());
            }
        }
    }

    // Absolute paths always have a relative form
    #[test]
    fn relativize_absolute_total(base in raw_path_strategy(), target in raw_path_strategy()) {
        let base = Path::parse(&format!("/{base}"));
        let target = Path::parse(&format!("/{target}"));
        prop_assert!(base.relativize(&target).is_ok());
    }

    // Appending a segment adds exactly one to the length
    #[test]
    fn append_segment_length(raw in raw_path_strategy(), segment in segment_strategy()) {
        let path = Path::parse(&raw);
        let appended = path.append_segment(&segment).unwrap();
        prop_assert_eq!(appended.length(), path.length() + 1);
        prop_assert_eq!(appended.last_segment(), Some(segment.as_str()));
        prop_assert_eq!(appended.is_absolute(), path.is_absolute());
    }

    // Appended paths print the way they would be parsed
    #[test]
    fn append_segment_matches_parse(raw in raw_path_strategy(), segment in segment_strategy()) {
        let path = Path::parse(&raw);
        let appended = path.append_segment(&segment).unwrap();
        prop_assert_eq!(Path::parse(&appended.to_string()), appended);
    }

    // Concatenation prints as the joined strings, minus a doubled junction slash
    #[test]
    fn concat_matches_string_join(left in raw_path_strategy(), right in raw_path_strategy()) {
        let joined = Path::parse(&left).concat(&Path::parse(&right));
        let expected = if left.ends_with('/') && right.starts_with('/') {
            format!("{left}{}", &right[1..])
        } else {
            format!("{left}{right}")
        };
        prop_assert_eq!(joined.to_string(), expected.clone());
        prop_assert_eq!(joined, Path::parse(&expected));
    }

    // The segments iterator agrees with length
    #[test]
    fn segments_agree_with_length(raw in raw_path_strategy()) {
        let path = Path::parse(&raw);
        prop_assert_eq!(path.segments().count(), path.length());
        prop_assert!(path.segments().all(|segment| !segment.is_empty() && !segment.contains('/')));
    }
}
