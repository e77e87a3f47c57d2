//! Operations on finite languages: sets of strings that combine by
//! concatenation. The closures of an infinite language can't be listed, so
//! `kleene_closure` and `positive_closure` take an explicit iteration bound and
//! return a finite truncation.
//!
//! Products are computed level by level. With `|A|` distinct strings, level
//! `k` has up to `|A|^k` members, so every bound here must be kept small by
//! the caller.

use tracing::trace;

use crate::set::{common_to, union_of, without, Minuend, TokenSet};
use crate::strings;

/// Joins the union of `a` and `b` into one string with no separator.
///
/// This is not the language product `{ x + y : x in a, y in b }`: the
/// distinct strings of `a` and then `b` are simply glued together, in union
/// order.
#[must_use]
pub fn concatenate<S: AsRef<str>>(a: &[S], b: &[S]) -> String {
    union_of(a, b).iter().collect()
}

/// Reverses every distinct string of `a`, and also reverses their order.
#[must_use]
pub fn reverse<S: AsRef<str>>(a: &[S]) -> TokenSet<'static> {
    let mut reversed = TokenSet::default();
    for token in TokenSet::of(a).iter().rev() {
        reversed.insert_owned(strings::reverse(token), ());
    }
    reversed
}

/// The distinct strings of `a` or `b`, `a`'s first.
#[must_use]
pub fn union<'data, S: AsRef<str>>(a: &'data [S], b: &'data [S]) -> TokenSet<'data> {
    union_of(a, b)
}

/// The strings of `b` that also occur in `a`, in `b`'s order.
#[must_use]
pub fn intersection<'data, S: AsRef<str>>(a: &[S], b: &'data [S]) -> TokenSet<'data> {
    common_to(a, b)
}

/// The strings of `a` that don't occur in `b`, in `a`'s order.
#[must_use]
pub fn difference<'data, S: AsRef<str>>(a: &'data [S], b: &'data [S]) -> TokenSet<'data> {
    without(a, b, Minuend::First)
}

/// The `n`-fold string product of `a` with itself: `a^1` is the distinct
/// strings of `a`, and `a^k` holds `p + x` for each `p` in `a^(k-1)` and each
/// `x` in `a`, generated prefix by prefix. A power of zero or less is empty.
#[must_use]
pub fn power<'data, S: AsRef<str>>(a: &'data [S], n: i64) -> TokenSet<'data> {
    if n <= 0 {
        return TokenSet::default();
    }
    let base = TokenSet::of(a);
    let mut level = base.clone();
    for k in 1..n {
        level = product(&level, &base);
        trace!(level = k + 1, members = level.len(), "advanced power");
    }
    level
}

/// The strings of `l^0 ∪ l^1 ∪ ...`, truncated after `max_iterations` levels.
/// `l^0` is the empty string, so the result always holds `""` first, and a
/// bound of zero or less gives exactly `{""}`.
#[must_use]
pub fn kleene_closure<'data, S: AsRef<str>>(
    l: &'data [S],
    max_iterations: i64,
) -> TokenSet<'data> {
    let base = TokenSet::of(l);
    let mut closure = TokenSet::default();
    closure.insert_borrowed("", ());
    let mut frontier = base.clone();
    for iteration in 0..max_iterations {
        closure.absorb(&frontier);
        // The frontier one level beyond the bound would never be merged
        if iteration + 1 < max_iterations {
            frontier = product(&frontier, &base);
            trace!(level = iteration + 2, frontier = frontier.len(), "advanced kleene closure");
        }
    }
    closure
}

/// The strings of `l^1 ∪ l^2 ∪ ...`, truncated after `max_iterations` levels.
/// A bound of one or less gives exactly the distinct strings of `l`.
#[must_use]
pub fn positive_closure<'data, S: AsRef<str>>(
    l: &'data [S],
    max_iterations: i64,
) -> TokenSet<'data> {
    let base = TokenSet::of(l);
    let mut closure = base.clone();
    let mut frontier = base.clone();
    for iteration in 1..max_iterations {
        frontier = product(&frontier, &base);
        trace!(level = iteration + 1, frontier = frontier.len(), "advanced positive closure");
        closure.absorb(&frontier);
    }
    closure
}

/// `{ p + x : p in prefixes, x in suffixes }`, for each prefix in order and
/// then each suffix in order.
fn product<'data>(prefixes: &TokenSet<'_>, suffixes: &TokenSet<'_>) -> TokenSet<'data> {
    let mut next = TokenSet::default();
    for prefix in prefixes.iter() {
        for suffix in suffixes.iter() {
            next.insert_owned(strings::concatenate(prefix, suffix), ());
        }
    }
    next
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn concatenate_joins_the_union() {
        assert_eq!(concatenate(&["a", "b"], &["b", "c"]), "abc");
        assert_eq!(concatenate(&["ab", "ab"], &EMPTY), "ab");
        assert_eq!(concatenate(&EMPTY, &EMPTY), "");
    }

    #[test]
    fn reverse_flips_each_string_and_the_order() {
        assert_eq!(reverse(&["ab", "cd"]).to_vec(), ["dc", "ba"]);
        assert_eq!(reverse(&["ab", "cd", "ab"]).to_vec(), ["dc", "ba"]);
        assert_eq!(reverse(&["ñu"]).to_vec(), ["uñ"]);
    }

    #[test]
    fn union_intersection_difference() {
        assert_eq!(union(&["a", "b"], &["b", "c"]).to_vec(), ["a", "b", "c"]);
        assert_eq!(intersection(&["a", "b", "c"], &["c", "b", "c"]).to_vec(), ["c", "b"]);
        assert_eq!(difference(&["a", "b", "a", "c"], &["b"]).to_vec(), ["a", "c"]);
    }

    #[test]
    fn power_generates_prefix_by_prefix() {
        assert_eq!(power(&["a", "b"], 2).to_vec(), ["aa", "ab", "ba", "bb"]);
        assert_eq!(
            power(&["0", "1"], 3).to_vec(),
            ["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn power_of_one_is_the_distinct_strings_and_below_one_is_empty() {
        assert_eq!(power(&["b", "a", "b"], 1).to_vec(), ["b", "a"]);
        assert!(power(&["a", "b"], 0).is_empty());
        assert!(power(&["a", "b"], -1).is_empty());
        assert!(power(&EMPTY, 4).is_empty());
    }

    #[test]
    fn power_of_two_has_a_member_for_each_pair() {
        let a = ["x", "yy", "zzz"];
        let squared = power(&a, 2);
        assert_eq!(squared.len(), a.len() * a.len());
        for (prefix, suffix) in a.iter().cartesian_product(a.iter()) {
            let word = format!("{prefix}{suffix}");
            assert!(squared.contains(&word));
            assert_eq!(strings::length(&word), prefix.len() + suffix.len());
        }
    }

    #[test]
    fn power_collapses_colliding_products() {
        assert_eq!(power(&["a", "aa"], 2).to_vec(), ["aa", "aaa", "aaaa"]);
    }

    #[test]
    fn kleene_closure_starts_with_the_empty_string() {
        assert_eq!(kleene_closure(&["a"], 0).to_vec(), [""]);
        assert_eq!(kleene_closure(&["a"], -3).to_vec(), [""]);
        assert_eq!(kleene_closure(&EMPTY, 5).to_vec(), [""]);
        assert_eq!(kleene_closure(&["a"], 1).to_vec(), ["", "a"]);
        assert_eq!(kleene_closure(&["a"], 3).to_vec(), ["", "a", "aa", "aaa"]);
    }

    #[test]
    fn kleene_closure_merges_levels_in_order() {
        assert_eq!(
            kleene_closure(&["a", "b"], 2).to_vec(),
            ["", "a", "b", "aa", "ab", "ba", "bb"]
        );
        assert_eq!(kleene_closure(&["", "a"], 2).to_vec(), ["", "a", "aa"]);
    }

    #[test]
    fn positive_closure_of_one_iteration_is_the_distinct_strings() {
        assert_eq!(positive_closure(&["b", "a", "b"], 1).to_vec(), ["b", "a"]);
        assert_eq!(positive_closure(&["b", "a"], 0).to_vec(), ["b", "a"]);
        assert!(positive_closure(&EMPTY, 4).is_empty());
    }

    #[test]
    fn positive_closure_excludes_the_empty_string_unless_given() {
        assert_eq!(positive_closure(&["a"], 3).to_vec(), ["a", "aa", "aaa"]);
        assert_eq!(
            positive_closure(&["a", "b"], 2).to_vec(),
            ["a", "b", "aa", "ab", "ba", "bb"]
        );
        assert!(positive_closure(&["", "a"], 2).contains(""));
    }

    #[test]
    fn closures_agree_beyond_the_empty_string() {
        let l = ["ab", "c"];
        let star = kleene_closure(&l, 4);
        let plus = positive_closure(&l, 4);
        assert_eq!(star.iter().skip(1).collect_vec(), plus.iter().collect_vec());
    }
}
