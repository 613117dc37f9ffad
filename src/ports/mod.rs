//! Ports (traits) for key material operations
//!
//! These traits define the capabilities required by the use cases. The core
//! depends on these abstractions, not on a concrete cryptography backend.

mod key_engine;

pub use key_engine::{KeyEngine, KeyGenParams};
