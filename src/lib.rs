//! Operations on strings, sets and finite languages.
//!
//! The engine is three groups of pure functions:
//! * `strings` works on a single string,
//! * `sets` treats lists of tokens as sets, and
//! * `languages` treats lists of tokens as finite languages, whose members
//!   combine by concatenation.
//!
//! All of them share `set::TokenSet`, an insertion-ordered set, so every
//! result comes out in a reproducible order. The `args`, `operands` and
//! `operations` modules are the command-line driver: they parse and check the
//! raw text, then pick one engine function by `OpName`.
//!
//! The Kleene and positive closures of a language are infinite, so they are
//! truncated after a caller-chosen number of levels. Their size grows
//! exponentially with that number; the driver refuses counts above a limit
//! (10 by default).

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod error;
pub mod languages;
pub mod operands;
pub mod operations;
pub mod set;
pub mod sets;
pub mod strings;
pub mod style;
