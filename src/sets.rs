//! Classical set algebra over tokens. Each operand is an ordered list that is
//! treated as a set: duplicates are ignored, and every result is a
//! `TokenSet` in a reproducible order.

use crate::set::{common_to, union_of, without, Minuend, TokenSet};

/// Is every token of `a` present in `b`? The empty set is a subset of every
/// set, the empty set included.
#[must_use]
pub fn is_subset<S: AsRef<str>>(a: &[S], b: &[S]) -> bool {
    let b = TokenSet::of(b);
    a.iter().all(|token| b.contains(token.as_ref()))
}

/// Does `x` occur in `set`?
#[must_use]
pub fn is_member<S: AsRef<str>>(x: &str, set: &[S]) -> bool {
    set.iter().any(|token| token.as_ref() == x)
}

/// The tokens occurring in `a` or `b`, in first-occurrence order scanning `a`
/// and then `b`.
#[must_use]
pub fn union<'data, S: AsRef<str>>(a: &'data [S], b: &'data [S]) -> TokenSet<'data> {
    union_of(a, b)
}

/// The tokens of `b` that also occur in `a`, in `b`'s order.
#[must_use]
pub fn intersection<'data, S: AsRef<str>>(a: &[S], b: &'data [S]) -> TokenSet<'data> {
    common_to(a, b)
}

/// The tokens of `a` that don't occur in `b`, in `a`'s order.
#[must_use]
pub fn difference<'data, S: AsRef<str>>(a: &'data [S], b: &'data [S]) -> TokenSet<'data> {
    without(a, b, Minuend::First)
}

/// The tokens occurring in exactly one of `a` and `b`, in the order of their
/// union.
#[must_use]
pub fn symmetric_difference<'data, S: AsRef<str>>(
    a: &'data [S],
    b: &'data [S],
) -> TokenSet<'data> {
    #[derive(Clone, Copy, PartialEq)]
    enum SeenIn {
        A,
        B,
        Both,
    }
    let mut set = TokenSet::with(a, SeenIn::A);
    for token in b {
        let token = token.as_ref();
        match set.get_mut(token) {
            None => {
                set.insert_borrowed(token, SeenIn::B);
            }
            Some(seen_in) => {
                if *seen_in == SeenIn::A {
                    *seen_in = SeenIn::Both;
                }
            }
        }
    }
    set.retain(|seen_in| *seen_in != SeenIn::Both);
    set.forget()
}

/// The tokens of the universe `u` that don't occur in `b`, in `u`'s order.
/// Tokens of `b` outside `u` are ignored.
#[must_use]
pub fn complement<'data, S: AsRef<str>>(u: &'data [S], b: &'data [S]) -> TokenSet<'data> {
    without(u, b, Minuend::First)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn subset_and_membership() {
        assert!(is_subset(&["a", "b", "a"], &["c", "b", "a"]));
        assert!(!is_subset(&["a", "d"], &["c", "b", "a"]));
        assert!(is_subset(&EMPTY, &["a"]));
        assert!(is_subset(&EMPTY, &EMPTY));
        assert!(!is_subset(&["a"], &EMPTY));
        assert!(is_member("b", &["a", "b"]));
        assert!(!is_member("B", &["a", "b"]));
        assert!(!is_member("a", &EMPTY));
    }

    #[test]
    fn union_is_ordered_a_then_b() {
        assert_eq!(union(&["a", "b"], &["b", "c"]).to_vec(), ["a", "b", "c"]);
        assert_eq!(union(&["b", "b"], &EMPTY).to_vec(), ["b"]);
    }

    #[test]
    fn union_is_commutative_as_a_set() {
        let a = ["xyz", "abc", "xy", "xz", "x"];
        let b = ["xyz", "abc", "xy", "yz", "y", "y"];
        let ab = union(&a, &b).iter().sorted().map(str::to_owned).collect_vec();
        let ba = union(&b, &a).iter().sorted().map(str::to_owned).collect_vec();
        assert_eq!(ab, ba);
    }

    #[test]
    fn intersection_follows_the_order_of_b() {
        assert_eq!(intersection(&["a", "b", "c"], &["c", "b"]).to_vec(), ["c", "b"]);
        assert_eq!(intersection(&["a", "b"], &["b", "x", "b"]).to_vec(), ["b"]);
    }

    #[test]
    fn an_operand_against_itself() {
        let a = ["xxx", "abc", "xxx", "yyy"];
        assert_eq!(intersection(&a, &a).to_vec(), ["xxx", "abc", "yyy"]);
        assert!(difference(&a, &a).is_empty());
        assert!(symmetric_difference(&a, &a).is_empty());
    }

    #[test]
    fn difference_keeps_the_order_of_a() {
        assert_eq!(difference(&["d", "a", "b", "d"], &["b"]).to_vec(), ["d", "a"]);
    }

    #[test]
    fn symmetric_difference_is_ordered_like_the_union() {
        let a = ["xyz", "abc", "xy", "xz", "x"];
        let b = ["xyz", "abc", "xy", "yz", "y", "yz"];
        assert_eq!(symmetric_difference(&a, &b).to_vec(), ["xz", "x", "yz", "y"]);
    }

    #[test]
    fn complement_against_a_universe() {
        let u = ["a", "b", "c", "a"];
        assert_eq!(complement(&u, &EMPTY).to_vec(), ["a", "b", "c"]);
        assert!(complement(&u, &u).is_empty());
        assert_eq!(complement(&u, &["b", "zz"]).to_vec(), ["a", "c"]);
    }
}
