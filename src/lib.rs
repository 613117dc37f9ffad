//! Asynchronous RSA key material helpers.
//!
//! Two stateless operations: generate a 2048-bit RSA private key (PKCS#1
//! PEM, public exponent 65537), and derive the matching PKCS#1 public key
//! from supplied private key PEM. The cryptographic substance lives in the
//! RustCrypto `rsa` crate; this crate is the marshalling, owned-buffer
//! handling, and async dispatch around it.
//!
//! ```no_run
//! # async fn demo() -> extcrypto::ExtcryptoResult<()> {
//! let private_key = extcrypto::generate_rsa_private_key().await?;
//! let public_key = extcrypto::extract_rsa_public_key(private_key.as_str()).await?;
//! # Ok(())
//! # }
//! ```

mod adapters;
pub mod api;
pub mod error;
mod init;
pub mod model;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use adapters::RustCryptoEngine;
pub use error::{ExtcryptoError, ExtcryptoResult, ExtractionError, GenerationError};
pub use model::{RsaPrivateKeyPem, RsaPublicKeyPem};

// Re-export public API
pub use api::{extract_rsa_public_key, generate_rsa_private_key};
pub use init::init;
