//! Use cases (orchestration)
//!
//! One function per operation. Each validates its input, delegates to a
//! KeyEngine, and returns the resulting key material.

mod extract_public_key;
mod generate_private_key;

pub use extract_public_key::extract_public_key;
pub use generate_private_key::generate_private_key;
