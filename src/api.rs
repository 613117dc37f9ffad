//! Public asynchronous API
//!
//! Each operation submits its cryptographic work to the blocking-thread pool
//! and resolves on the caller's runtime context. Exactly one of Ok/Err is
//! produced per invocation. A worker that dies without reporting a result
//! (a panic inside the pool, which is also how the OS entropy source failing
//! mid-generation surfaces) is returned as that operation's error, never
//! propagated as a panic.

use crate::adapters::RustCryptoEngine;
use crate::error::{ExtcryptoResult, ExtractionError, GenerationError};
use crate::init::init;
use crate::use_cases::{
    extract_public_key as extract_public_key_use_case,
    generate_private_key as generate_private_key_use_case,
};

pub use crate::model::*;

/// Generate a 2048-bit RSA private key as PKCS#1 PEM text.
///
/// The key is generated on a blocking worker thread with public exponent
/// 65537 from the operating system's random source. Generation takes
/// measurable wall-clock time; once started it cannot be cancelled.
///
/// # Errors
///
/// Returns [`GenerationError`] if the key cannot be generated or encoded.
pub async fn generate_rsa_private_key() -> ExtcryptoResult<RsaPrivateKeyPem> {
    init();

    let handle = tokio::task::spawn_blocking(|| {
        let engine = RustCryptoEngine;
        generate_private_key_use_case(&engine)
    });

    match handle.await {
        Ok(result) => result,
        Err(err) => Err(GenerationError::WorkerFailed {
            reason: err.to_string(),
        }
        .into()),
    }
}

/// Extract the PKCS#1 public key PEM from RSA private key PEM text.
///
/// Pure function of its input: the output contains exactly the modulus and
/// public exponent embedded in the supplied private key.
///
/// # Errors
///
/// Returns [`ExtractionError`] if the input does not decode as a valid
/// PKCS#1 RSA private key or the public key cannot be encoded.
pub async fn extract_rsa_public_key(private_key_pem: &str) -> ExtcryptoResult<RsaPublicKeyPem> {
    init();

    let pem = private_key_pem.to_owned();
    let handle = tokio::task::spawn_blocking(move || {
        let engine = RustCryptoEngine;
        extract_public_key_use_case(&engine, &pem)
    });

    match handle.await {
        Ok(result) => result,
        Err(err) => Err(ExtractionError::WorkerFailed {
            reason: err.to_string(),
        }
        .into()),
    }
}
