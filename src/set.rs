//! Provides the `TokenSet` structure, the insertion-ordered set that every set
//! and language operation is built on.
use fxhash::FxBuildHasher;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// A `TokenSet` is a set of tokens, each token represented as a key of an `IndexMap`.
/// * Keys are `Cow<'data, str>`
/// * Tokens taken from a caller's operands are represented as `Cow::Borrowed` keys
/// * Tokens built by concatenation (products, closures, reversals) are
///   represented as `Cow::Owned` keys
/// * Each set operation (`intersection`, `difference`, etc) may associate a
///   small bookkeeping value with each key. The value type differs from
///   operation to operation; the public results carry `()`.
/// * Iteration order is the order in which each token was first inserted.
///   Inserting a token that is already present changes neither its position
///   nor its bookkeeping value.
#[derive(Clone, Debug)]
pub struct TokenSet<'data, Bookkeeping: Copy = ()> {
    set: CowSet<'data, Bookkeeping>,
}
type CowSet<'data, Bookkeeping> = IndexMap<Cow<'data, str>, Bookkeeping, FxBuildHasher>;

impl<Bookkeeping: Copy> Default for TokenSet<'_, Bookkeeping> {
    fn default() -> Self {
        TokenSet { set: CowSet::default() }
    }
}

impl<'data> TokenSet<'data> {
    /// Returns the distinct tokens of `tokens`, in first-occurrence order.
    #[must_use]
    pub fn of<S: AsRef<str>>(tokens: &'data [S]) -> Self {
        TokenSet::with(tokens, ())
    }
}

impl<'data, Bookkeeping: Copy> TokenSet<'data, Bookkeeping> {
    /// `TokenSet::with(tokens, b)` borrows every token of `tokens`, giving
    /// each the bookkeeping value `b`.
    pub(crate) fn with<S: AsRef<str>>(tokens: &'data [S], b: Bookkeeping) -> Self {
        let mut set = TokenSet::default();
        for token in tokens {
            set.insert_borrowed(token.as_ref(), b);
        }
        set
    }

    /// Insert `token` as `Cow::Borrowed`, returning `true` if it was not already present
    pub(crate) fn insert_borrowed(&mut self, token: &'data str, b: Bookkeeping) -> bool {
        self.insert_cow(Cow::Borrowed(token), b)
    }

    /// Insert `token` as `Cow::Owned`, returning `true` if it was not already present
    pub(crate) fn insert_owned(&mut self, token: String, b: Bookkeeping) -> bool {
        self.insert_cow(Cow::Owned(token), b)
    }

    fn insert_cow(&mut self, token: Cow<'data, str>, b: Bookkeeping) -> bool {
        match self.set.entry(token) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(b);
                true
            }
        }
    }

    /// Adds every token of `other` not already present, after the tokens
    /// already here and in `other`'s order.
    pub(crate) fn absorb(&mut self, other: &TokenSet<'data, Bookkeeping>) {
        for (token, b) in &other.set {
            if !self.set.contains_key(&**token) {
                self.set.insert(token.clone(), *b);
            }
        }
    }

    /// Sometimes we need to update the bookkeeping information
    pub(crate) fn get_mut(&mut self, token: &str) -> Option<&mut Bookkeeping> {
        self.set.get_mut(token)
    }

    /// `IndexMap`'s `.retain` method is `O(n)` and preserves the order of the
    /// keys, so it's safe to expose it. We don't expose `.shift_remove`, which
    /// also preserves order, because using it to remove tokens one by one
    /// means `O(n^2)` performance.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&mut Bookkeeping) -> bool) {
        self.set.retain(|_k, v| keep(v));
    }

    /// Drops the bookkeeping values, keeping tokens and their order.
    pub(crate) fn forget(self) -> TokenSet<'data> {
        TokenSet { set: self.set.into_iter().map(|(token, _)| (token, ())).collect() }
    }

    /// Is `token` a member of the set?
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.set.contains_key(token)
    }

    /// The number of distinct tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// The tokens, in first-insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.set.keys().map(|token| &**token)
    }

    /// The tokens as owned strings, in first-insertion order
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

/// Displays the tokens joined by `", "`, the way results are shown to a user.
impl<Bookkeeping: Copy> fmt::Display for TokenSet<'_, Bookkeeping> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.iter();
        if let Some(first) = tokens.next() {
            f.write_str(first)?;
            for token in tokens {
                f.write_str(", ")?;
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

/// The distinct tokens of `first` followed by the distinct tokens of `second`
/// not already seen.
pub(crate) fn union_of<'data, S: AsRef<str>>(
    first: &'data [S],
    second: &'data [S],
) -> TokenSet<'data> {
    let mut set = TokenSet::of(first);
    for token in second {
        set.insert_borrowed(token.as_ref(), ());
    }
    set
}

/// The tokens of `second` that also occur in `first`. Note the asymmetry: the
/// result is in `second`'s order, not `first`'s.
pub(crate) fn common_to<'data, S: AsRef<str>>(first: &[S], second: &'data [S]) -> TokenSet<'data> {
    // The bookkeeping value is `true` once a token has been seen in `first`
    let mut set = TokenSet::with(second, false);
    for token in first {
        if let Some(seen) = set.get_mut(token.as_ref()) {
            *seen = true;
        }
    }
    set.retain(|seen| *seen);
    set.forget()
}

/// Which operand a directional difference keeps tokens from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Minuend {
    First,
    Second,
}

/// The tokens of the minuend operand absent from the other operand, in the
/// minuend's first-occurrence order.
pub(crate) fn without<'data, S: AsRef<str>>(
    first: &'data [S],
    second: &'data [S],
    minuend: Minuend,
) -> TokenSet<'data> {
    let (kept, removed) = match minuend {
        Minuend::First => (first, second),
        Minuend::Second => (second, first),
    };
    // For a difference, `true` means the token has been seen only in the minuend
    let mut set = TokenSet::with(kept, true);
    for token in removed {
        if let Some(keepme) = set.get_mut(token.as_ref()) {
            *keepme = false;
        }
    }
    set.retain(|keepme| *keepme);
    set.forget()
}
