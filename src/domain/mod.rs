//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `journal` - Decision records, weighted arguments, and partial updates

pub mod foundation;
pub mod journal;
