//! KeyEngine trait - capability to produce and re-encode RSA key material

use crate::error::ExtcryptoResult;
use crate::model::{RsaPrivateKeyPem, RsaPublicKeyPem};

/// Parameters for private key generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenParams {
    /// Modulus size in bits
    pub modulus_bits: usize,
    /// Public exponent
    pub public_exponent: u64,
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self {
            modulus_bits: 2048,
            public_exponent: 65537,
        }
    }
}

/// Capability to generate RSA private keys and derive their public keys
///
/// Both operations are single-shot pure transformations: the engine holds no
/// state and retains no key material after returning.
pub trait KeyEngine {
    /// Generate a fresh RSA private key as PKCS#1 PEM text
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - The underlying key generation primitive fails
    /// - The generated key cannot be encoded to PEM
    fn generate_private_key(&self, params: &KeyGenParams) -> ExtcryptoResult<RsaPrivateKeyPem>;

    /// Derive the PKCS#1 public key PEM from a private key
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - The input does not decode as a PKCS#1 RSA private key
    /// - The derived public key cannot be encoded to PEM
    fn extract_public_key(
        &self,
        private_key: &RsaPrivateKeyPem,
    ) -> ExtcryptoResult<RsaPublicKeyPem>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = KeyGenParams::default();
        assert_eq!(params.modulus_bits, 2048);
        assert_eq!(params.public_exponent, 65537);
    }
}
