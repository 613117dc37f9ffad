//! Generate private key use case

use crate::error::ExtcryptoResult;
use crate::model::RsaPrivateKeyPem;
use crate::ports::{KeyEngine, KeyGenParams};
use tracing::debug;

/// Generate a new RSA private key as PKCS#1 PEM text
///
/// Produces a 2048-bit key with public exponent 65537 from the engine's
/// secure random source. The returned material is owned by the caller;
/// nothing is retained here.
///
/// # Errors
///
/// Returns errors if:
/// - The underlying key generation primitive fails
/// - The generated key cannot be encoded to PEM
pub fn generate_private_key<E>(engine: &E) -> ExtcryptoResult<RsaPrivateKeyPem>
where
    E: KeyEngine,
{
    let params = KeyGenParams::default();

    debug!("Generating {}-bit RSA private key", params.modulus_bits);

    engine.generate_private_key(&params)
}
