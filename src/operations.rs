//! Houses the `calculate` function, which runs the operation named by an
//! `OpName` on checked `Operands`.

use std::fmt;
use std::io;

use anyhow::Result;
use tracing::debug;

use crate::args::OpName;
use crate::operands::Operands;
use crate::set::TokenSet;
use crate::{languages, sets, strings};

/// The value an operation returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A character count, from `length`
    Count(usize),
    /// A yes-or-no answer, from `is-subset` and `is-member`
    Verdict(bool),
    /// A single string
    Text(String),
    /// The members of a set or language, in order
    Members(Vec<String>),
}

impl From<TokenSet<'_>> for Outcome {
    fn from(set: TokenSet<'_>) -> Self {
        Outcome::Members(set.to_vec())
    }
}

/// Members are shown joined by `", "`; everything else as itself.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Count(n) => write!(f, "{n}"),
            Outcome::Verdict(b) => write!(f, "{b}"),
            Outcome::Text(s) => f.write_str(s),
            Outcome::Members(members) => f.write_str(&members.join(", ")),
        }
    }
}

/// Runs `operation` on `operands`.
///
/// * String operations (`length`, `concatenate`, `power`, `reverse`) use
///   the operand text as typed.
/// * `is-member` looks for the trimmed first operand among the tokens of the
///   second.
/// * Every other operation works on the tokens of its operands.
#[must_use]
pub fn calculate(operation: OpName, operands: &Operands) -> Outcome {
    let a = operands.first_tokens();
    let b = operands.second_tokens();
    let n = operands.bound();

    let outcome = match operation {
        OpName::Length => Outcome::Count(strings::length(operands.first())),
        OpName::Concatenate => {
            Outcome::Text(strings::concatenate(operands.first(), operands.second()))
        }
        OpName::Power => Outcome::Text(strings::power(operands.first(), n)),
        OpName::Reverse => Outcome::Text(strings::reverse(operands.first())),

        OpName::IsSubset => Outcome::Verdict(sets::is_subset(&a, &b)),
        OpName::IsMember => Outcome::Verdict(sets::is_member(operands.element(), &b)),
        OpName::Union => sets::union(&a, &b).into(),
        OpName::Intersection => sets::intersection(&a, &b).into(),
        OpName::Difference => sets::difference(&a, &b).into(),
        OpName::SymmetricDifference => sets::symmetric_difference(&a, &b).into(),
        OpName::Complement => sets::complement(&a, &b).into(),

        OpName::LanguageConcatenate => Outcome::Text(languages::concatenate(&a, &b)),
        OpName::LanguagePower => languages::power(&a, n).into(),
        OpName::LanguageReverse => languages::reverse(&a).into(),
        OpName::LanguageUnion => languages::union(&a, &b).into(),
        OpName::LanguageIntersection => languages::intersection(&a, &b).into(),
        OpName::LanguageDifference => languages::difference(&a, &b).into(),
        OpName::KleeneClosure => languages::kleene_closure(&a, n).into(),
        OpName::PositiveClosure => languages::positive_closure(&a, n).into(),
    };

    if let Outcome::Members(members) = &outcome {
        debug!(%operation, first = a.len(), second = b.len(), members = members.len(), "calculated");
    } else {
        debug!(%operation, "calculated");
    }
    outcome
}

/// Calculates `operation` and writes its outcome to `out` as a single line.
pub fn calculate_to(operation: OpName, operands: &Operands, mut out: impl io::Write) -> Result<()> {
    let outcome = calculate(operation, operands);
    writeln!(out, "{outcome}")?;
    out.flush()?;
    Ok(())
}
