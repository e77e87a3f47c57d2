//! Operations on a single string. Lengths and reversals work on Unicode
//! scalar values (`char`s), never on bytes.

/// The number of characters in `s`
#[must_use]
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// `a` followed immediately by `b`
#[must_use]
pub fn concatenate(a: &str, b: &str) -> String {
    [a, b].concat()
}

/// `s` repeated `n` times. A count of zero or less gives the empty string.
#[must_use]
pub fn power(s: &str, n: i64) -> String {
    match usize::try_from(n) {
        Ok(n) => s.repeat(n),
        Err(_) => String::new(),
    }
}

/// The characters of `s` in reverse order
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(length(""), 0);
        assert_eq!(length("abc"), 3);
        assert_eq!(length("año"), 3);
        assert_eq!("año".len(), 4);
    }

    #[test]
    fn length_matches_removing_one_character_at_a_time() {
        let mut s = String::from("mañana");
        let mut removed = 0;
        while s.pop().is_some() {
            removed += 1;
        }
        assert_eq!(length("mañana"), removed);
    }

    #[test]
    fn concatenate_has_no_separator() {
        assert_eq!(concatenate("ab", "cd"), "abcd");
        assert_eq!(concatenate("", "cd"), "cd");
        assert_eq!(concatenate("ab", ""), "ab");
    }

    #[test]
    fn power_repeats_and_clamps_at_zero() {
        assert_eq!(power("ab", 3), "ababab");
        assert_eq!(power("ab", 1), "ab");
        assert_eq!(power("ab", 0), "");
        assert_eq!(power("ab", -4), "");
        for n in 0..6 {
            assert_eq!(length(&power("Ñu", n)), n as usize * length("Ñu"));
        }
    }

    #[test]
    fn reverse_is_an_involution_on_whole_characters() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("ñandú"), "údnañ");
        assert_eq!(reverse(""), "");
        for s in ["", "a", "ab", "Ñandú", "x1y2z3"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
    }
}
