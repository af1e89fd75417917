//! Remedy lookup over a normalized, in-memory index
//!
//! Four modes share one index:
//! 1. contains: every query token is a substring of either name
//! 2. starts-with: the whole query prefixes either name
//! 3. word-prefix: the first query token prefixes a word of either name
//! 4. fuzzy: weighted-ratio similarity, common names first, then Latin names

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Index owns an arbitrary store")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::cast_precision_loss, reason = "String lengths are far below 2^52")]

mod error;
pub mod fuzzy;
mod index;
pub mod matcher;

pub use error::IndexError;
pub use index::{AddOutcome, ExactMatch, RemedyIndex, ScoredMatch, Suggestion};
