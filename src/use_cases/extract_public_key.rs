//! Extract public key use case

use crate::error::ExtcryptoResult;
use crate::model::{RsaPrivateKeyPem, RsaPublicKeyPem};
use crate::ports::KeyEngine;
use tracing::debug;

/// Derive the PKCS#1 public key PEM from private key PEM text
///
/// The input framing is checked before the engine runs so that obviously
/// malformed text (empty string, truncated header, wrong key type) is
/// rejected with a precise error. A pure function of its input: the same
/// private key always yields the same public key.
///
/// # Errors
///
/// Returns errors if:
/// - The input is not framed as a PKCS#1 RSA private key block
/// - The input does not decode as a valid RSA private key
/// - The derived public key cannot be encoded to PEM
pub fn extract_public_key<E>(engine: &E, private_key_pem: &str) -> ExtcryptoResult<RsaPublicKeyPem>
where
    E: KeyEngine,
{
    let private_key = RsaPrivateKeyPem::from_pem(private_key_pem)?;

    debug!("Extracting public key from RSA private key");

    engine.extract_public_key(&private_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake_engine::{FakeEngine, CANNED_PRIVATE_PEM, CANNED_PUBLIC_PEM};
    use crate::error::{ExtcryptoError, ExtractionError};

    #[test]
    fn test_extract_public_key_success() {
        let engine = FakeEngine::default();

        let result = extract_public_key(&engine, CANNED_PRIVATE_PEM);

        assert!(result.is_ok(), "error: {:?}", result.err());
        assert_eq!(result.unwrap().as_str(), CANNED_PUBLIC_PEM);
    }

    #[test]
    fn test_extract_public_key_rejects_empty_input() {
        let engine = FakeEngine::default();

        let result = extract_public_key(&engine, "");

        assert!(matches!(
            result.unwrap_err(),
            ExtcryptoError::Extraction(ExtractionError::InvalidFraming(_))
        ));
    }

    #[test]
    fn test_extract_public_key_rejects_truncated_header() {
        let engine = FakeEngine::default();

        let result = extract_public_key(&engine, "-----BEGIN RSA PRIV");

        assert!(matches!(
            result.unwrap_err(),
            ExtcryptoError::Extraction(ExtractionError::InvalidFraming(_))
        ));
    }

    #[test]
    fn test_extract_public_key_engine_failure_is_reported() {
        let engine = FakeEngine::failing_extraction();

        let result = extract_public_key(&engine, CANNED_PRIVATE_PEM);

        assert!(matches!(
            result.unwrap_err(),
            ExtcryptoError::Extraction(ExtractionError::WorkerFailed { .. })
        ));
    }
}
