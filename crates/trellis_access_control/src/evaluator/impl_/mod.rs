//! I provide default implementations of
//! [`AccessEvaluator`](super::AccessEvaluator).
//!

pub mod cached;
pub mod wac;
