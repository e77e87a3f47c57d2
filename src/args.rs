//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use crate::style::ColorChoice;
use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;

/// Returns the parsed command line: the `Args` return value's `op` field is the
/// operation desired, and `first` and `second` hold its raw operands.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    let op = op_name(parsed.op);
    Args {
        op,
        first: parsed.first.unwrap_or_default(),
        second: parsed.second.unwrap_or_default(),
        iterations: parsed.iterations,
        limits: Limits {
            iterations: parsed.max_iterations,
            repetitions: parsed.max_repetitions,
        },
        color: parsed.color,
        verbose: parsed.verbose,
    }
}

/// The parsed command line
#[derive(Debug)]
pub struct Args {
    /// `op` is the operation requested
    pub op: OpName,
    /// The first operand, as typed
    pub first: String,
    /// The second operand, as typed
    pub second: String,
    /// The iteration (or repetition) count, as typed, if one was given
    pub iterations: Option<String>,
    /// Upper bounds on the iteration count
    pub limits: Limits,
    /// When to color diagnostics
    pub color: ColorChoice,
    /// How chatty the log should be
    pub verbose: u8,
}

/// The largest counts the exponential and linear operations will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Bound on `language-power`, `kleene-closure` and `positive-closure`
    pub iterations: u32,
    /// Bound on string `power`
    pub repetitions: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { iterations: 10, repetitions: 10_000 }
    }
}

/// The operations, grouped as string, set and language operations
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// The number of characters in the first operand
    Length,
    /// The first operand followed by the second
    Concatenate,
    /// The first operand repeated
    Power,
    /// The first operand's characters in reverse order
    Reverse,
    /// Is every token of the first set in the second?
    IsSubset,
    /// Is the first operand a token of the second set?
    IsMember,
    /// Tokens in either set
    Union,
    /// Tokens in both sets
    Intersection,
    /// Tokens of the first set not in the second
    Difference,
    /// Tokens in exactly one of the sets
    SymmetricDifference,
    /// Tokens of the universe (first operand) not in the second set
    Complement,
    /// The union of two languages joined into one string
    LanguageConcatenate,
    /// The string product of a language with itself
    LanguagePower,
    /// Each string of a language reversed, in reverse order
    LanguageReverse,
    /// Strings in either language
    LanguageUnion,
    /// Strings in both languages
    LanguageIntersection,
    /// Strings of the first language not in the second
    LanguageDifference,
    /// The bounded Kleene closure of a language
    KleeneClosure,
    /// The bounded positive closure of a language
    PositiveClosure,
}

impl OpName {
    /// The name used on the command line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OpName::Length => "length",
            OpName::Concatenate => "concatenate",
            OpName::Power => "power",
            OpName::Reverse => "reverse",
            OpName::IsSubset => "is-subset",
            OpName::IsMember => "is-member",
            OpName::Union => "union",
            OpName::Intersection => "intersection",
            OpName::Difference => "difference",
            OpName::SymmetricDifference => "symmetric-difference",
            OpName::Complement => "complement",
            OpName::LanguageConcatenate => "language-concatenate",
            OpName::LanguagePower => "language-power",
            OpName::LanguageReverse => "language-reverse",
            OpName::LanguageUnion => "language-union",
            OpName::LanguageIntersection => "language-intersection",
            OpName::LanguageDifference => "language-difference",
            OpName::KleeneClosure => "kleene-closure",
            OpName::PositiveClosure => "positive-closure",
        }
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Parser)]
#[command(name = "formal", version)]
/// Computes string, set and finite-language operations.
///
/// Set and language operands are comma-separated lists of tokens: `"a, b, ab"`.
struct CliArgs {
    #[arg(value_enum)]
    /// `op` is the operation requested
    op: CliName,
    /// A string, or a comma-separated list of tokens (the element, for is-member)
    first: Option<String>,
    /// A string, or a comma-separated list of tokens
    second: Option<String>,
    #[arg(short = 'n', long)]
    /// Repetitions for power; iterations for language-power and the closures
    iterations: Option<String>,
    #[arg(long, default_value_t = Limits::default().iterations)]
    /// Largest iteration count accepted by language-power and the closures
    max_iterations: u32,
    #[arg(long, default_value_t = Limits::default().repetitions)]
    /// Largest repetition count accepted by power
    max_repetitions: u32,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color error messages
    color: ColorChoice,
    #[arg(short, long, action = ArgAction::Count)]
    /// Log more detail to stderr (repeat for more)
    verbose: u8,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
/// Name of the requested operation
enum CliName {
    /// Count the characters of a string
    Length,
    /// Join two strings
    Concatenate,
    /// Repeat a string a given number of times
    Power,
    /// Reverse the characters of a string
    Reverse,
    /// Check whether the first set is a subset of the second
    IsSubset,
    /// Check whether an element belongs to a set
    IsMember,
    /// Combine the distinct elements of both sets
    Union,
    /// Find the elements common to both sets
    Intersection,
    /// Elements of the first set but not the second
    Difference,
    /// Elements of one set or the other, but not both
    SymmetricDifference,
    /// Elements of the universal set (first) not in the given set
    Complement,
    /// Join two sets of strings, without duplicates, into one string
    LanguageConcatenate,
    /// Generate the power of a set of strings up to a given length
    LanguagePower,
    /// Reverse each string of a set
    LanguageReverse,
    /// Union of two sets of strings
    LanguageUnion,
    /// Intersection of two sets of strings
    LanguageIntersection,
    /// Difference of two sets of strings
    LanguageDifference,
    /// Repeat strings any number of times, including none (L*)
    KleeneClosure,
    /// Repeat strings at least once (L+)
    PositiveClosure,
}

fn op_name(cli: CliName) -> OpName {
    match cli {
        CliName::Length => OpName::Length,
        CliName::Concatenate => OpName::Concatenate,
        CliName::Power => OpName::Power,
        CliName::Reverse => OpName::Reverse,
        CliName::IsSubset => OpName::IsSubset,
        CliName::IsMember => OpName::IsMember,
        CliName::Union => OpName::Union,
        CliName::Intersection => OpName::Intersection,
        CliName::Difference => OpName::Difference,
        CliName::SymmetricDifference => OpName::SymmetricDifference,
        CliName::Complement => OpName::Complement,
        CliName::LanguageConcatenate => OpName::LanguageConcatenate,
        CliName::LanguagePower => OpName::LanguagePower,
        CliName::LanguageReverse => OpName::LanguageReverse,
        CliName::LanguageUnion => OpName::LanguageUnion,
        CliName::LanguageIntersection => OpName::LanguageIntersection,
        CliName::LanguageDifference => OpName::LanguageDifference,
        CliName::KleeneClosure => OpName::KleeneClosure,
        CliName::PositiveClosure => OpName::PositiveClosure,
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn cli_names_match_op_names() {
        for cli in CliName::value_variants() {
            let name = cli.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(op_name(*cli).name(), name);
            let parsed = CliArgs::try_parse_from(["formal", name.as_str()]).unwrap();
            assert_eq!(parsed.op, *cli);
        }
        assert_eq!(OpName::SymmetricDifference.to_string(), "symmetric-difference");
        assert_eq!(OpName::KleeneClosure.to_string(), "kleene-closure");
    }

    #[test]
    fn operands_and_bounds_default_when_absent() {
        let parsed = CliArgs::try_parse_from(["formal", "union"]).unwrap();
        assert_eq!(parsed.first, None);
        assert_eq!(parsed.second, None);
        assert_eq!(parsed.iterations, None);
        assert_eq!(parsed.max_iterations, 10);
        assert_eq!(parsed.max_repetitions, 10_000);
        assert_eq!(parsed.verbose, 0);
    }
}
