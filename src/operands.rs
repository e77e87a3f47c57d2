//! Provides `Operands`, the checked form of the raw text typed on the command
//! line. Nothing reaches an operation until its operands have passed these
//! checks:
//! * operand text may hold only letters, digits, commas and whitespace
//! * the iteration count, if given, must be a whole number no larger than the
//!   limit for the operation
//!
//! Set and language operands are comma-separated lists. Each token is trimmed
//! of surrounding whitespace, and empty tokens are dropped.
use crate::args::{Limits, OpName};
use crate::error::InputError;

/// The operands of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    first: String,
    second: String,
    bound: u32,
}

impl Operands {
    /// Checks the raw text of `first`, `second` and `iterations` for
    /// operation `op`, resolving a missing iteration count to the operation's
    /// default.
    pub fn parse(
        op: OpName,
        first: &str,
        second: &str,
        iterations: Option<&str>,
        limits: Limits,
    ) -> Result<Self, InputError> {
        check_characters("first", first)?;
        check_characters("second", second)?;
        let limit = limit_for(op, limits);
        let bound = match iterations.filter(|text| !text.is_empty()) {
            None => default_bound(op),
            Some(text) => parse_bound(text)?,
        };
        if let Some(limit) = limit {
            if bound > limit {
                return Err(InputError::IterationBoundTooLarge { given: bound.to_string(), limit });
            }
        }
        Ok(Operands { first: first.to_owned(), second: second.to_owned(), bound })
    }

    /// The first operand, exactly as typed
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The second operand, exactly as typed
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// The first operand read as a single element, without surrounding whitespace
    #[must_use]
    pub fn element(&self) -> &str {
        self.first.trim()
    }

    /// The tokens of the first operand
    #[must_use]
    pub fn first_tokens(&self) -> Vec<&str> {
        tokens_of(&self.first)
    }

    /// The tokens of the second operand
    #[must_use]
    pub fn second_tokens(&self) -> Vec<&str> {
        tokens_of(&self.second)
    }

    /// The iteration (or repetition) count
    #[must_use]
    pub fn bound(&self) -> i64 {
        i64::from(self.bound)
    }
}

/// Splits `text` at commas, trimming each token and dropping empty ones.
#[must_use]
pub fn tokens_of(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).filter(|token| !token.is_empty()).collect()
}

/// The count used when none is given: repeat a string zero times, take a
/// language to its third power, and run a closure for five levels.
#[must_use]
pub fn default_bound(op: OpName) -> u32 {
    match op {
        OpName::LanguagePower => 3,
        OpName::KleeneClosure | OpName::PositiveClosure => 5,
        _ => 0,
    }
}

/// The largest count accepted for `op`, or `None` if `op` takes no count
fn limit_for(op: OpName, limits: Limits) -> Option<u32> {
    match op {
        OpName::Power => Some(limits.repetitions),
        OpName::LanguagePower | OpName::KleeneClosure | OpName::PositiveClosure => {
            Some(limits.iterations)
        }
        _ => None,
    }
}

fn check_characters(field: &'static str, text: &str) -> Result<(), InputError> {
    let allowed = |c: char| c.is_alphanumeric() || c == ',' || c.is_whitespace();
    match text.chars().find(|c| !allowed(*c)) {
        None => Ok(()),
        Some(found) => Err(InputError::InvalidCharacter { field, found }),
    }
}

fn parse_bound(text: &str) -> Result<u32, InputError> {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidIterationBound(text.to_owned()));
    }
    // All digits, so the only way to fail is overflow
    text.parse::<u32>()
        .map_err(|_| InputError::IterationBoundTooLarge { given: text.to_owned(), limit: u32::MAX })
}
