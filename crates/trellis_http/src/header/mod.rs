//! I define rust models for the typed headers this boundary
//! emits.
//!

pub mod wac_allow;
