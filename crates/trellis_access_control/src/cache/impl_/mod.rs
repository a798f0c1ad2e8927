//! I provide default implementations of
//! [`AuthorizationCache`](super::AuthorizationCache).
//!

mod moka;
mod noop;

pub use self::{moka::MokaAuthorizationCache, noop::NoopAuthorizationCache};
