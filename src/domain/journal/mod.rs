//! Journal module - decision records and the rules for editing them.
//!
//! A [`Decision`] holds weighted [`Argument`]s for and against, candidate
//! outcomes, and the eventual chosen/actual outcome. Saved records are
//! changed through [`DecisionPatch`], which enforces that a chosen option is
//! one of the record's outcomes.

mod argument;
mod decision;
mod errors;
mod patch;

pub use argument::{Argument, ArgumentKind, Weight};
pub use decision::Decision;
pub use errors::JournalError;
pub use patch::DecisionPatch;
