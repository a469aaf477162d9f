//! The signing oracle facade.
//!
//! Wraps the key store and the verifier behind the three operations the
//! service exposes: sign a hash, verify a signature, export the public
//! key. All byte strings cross this boundary as hex.

use std::sync::Arc;

use tracing::debug;

use signet_crypto::Secp256k1Verifier;
use signet_keystore::KeyStore;

use crate::codec;
use crate::config::OracleConfig;
use crate::error::OracleError;

/// A local signing oracle holding exactly one secp256k1 keypair.
///
/// Construction is explicit and blocking; there is no ambient instance.
/// Cloning is cheap and clones share the same keypair.
#[derive(Clone)]
pub struct SigningOracle {
    keystore: Arc<KeyStore>,
}

impl SigningOracle {
    /// Open the oracle, loading or generating the keypair at the
    /// configured path.
    ///
    /// # Errors
    ///
    /// Propagates [`signet_keystore::KeyStoreError`] from the key store;
    /// all of these are startup-fatal.
    pub fn open(config: &OracleConfig) -> Result<Self, OracleError> {
        let keystore = KeyStore::open(&config.key_path)?;
        Ok(Self::with_keystore(keystore))
    }

    /// Build an oracle around an already-opened key store.
    #[must_use]
    pub fn with_keystore(keystore: KeyStore) -> Self {
        Self {
            keystore: Arc::new(keystore),
        }
    }

    /// Sign a caller-supplied hash, hex in, DER-signature-hex out.
    ///
    /// The input is strictly decoded first; nothing reaches the key
    /// material unless decoding succeeds. Signing is deterministic
    /// (RFC 6979), so the same hash always yields the same signature.
    ///
    /// # Errors
    ///
    /// - [`OracleError::InvalidInput`] for empty, odd-length or non-hex
    ///   input.
    /// - [`OracleError::SigningFailed`] if the signing operation fails;
    ///   the reason is a static description.
    pub fn sign_hash(&self, hash_hex: &str) -> Result<String, OracleError> {
        let message = codec::decode_hex(hash_hex)?;

        let signature = self
            .keystore
            .signer()
            .sign(&message)
            .map_err(|_| OracleError::signing_failed("signing operation failed"))?;

        debug!(message_len = message.len(), "signed caller hash");
        Ok(codec::encode_hex(&signature))
    }

    /// Verify a (hash, signature, public key) triple, all hex.
    ///
    /// Never fails: malformed hex, unparseable keys or signatures, and
    /// genuine mismatches all come back as `false`. Deterministic for
    /// identical inputs.
    #[must_use]
    pub fn verify_signature(
        &self,
        hash_hex: &str,
        signature_hex: &str,
        public_key_hex: &str,
    ) -> bool {
        let (message, signature, public_key) = match (
            codec::decode_hex(hash_hex),
            codec::decode_hex(signature_hex),
            codec::decode_hex(public_key_hex),
        ) {
            (Ok(m), Ok(s), Ok(p)) => (m, s, p),
            _ => return false,
        };

        Secp256k1Verifier::new()
            .verify(&public_key, &message, &signature)
            .unwrap_or(false)
    }

    /// Export the oracle's public key as SPKI DER hex.
    ///
    /// Deterministic: byte-for-byte identical across calls and across
    /// restarts with the same key file.
    #[must_use]
    pub fn export_public_key(&self) -> &str {
        self.keystore.public_key_hex()
    }
}

impl std::fmt::Debug for SigningOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningOracle")
            .field("public_key", &self.keystore.public_key_hex())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_oracle(dir: &tempfile::TempDir) -> SigningOracle {
        let store = KeyStore::open(dir.path().join("keys.json")).unwrap();
        SigningOracle::with_keystore(store)
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);

        let signature = oracle.sign_hash("deadbeef").unwrap();
        let public_key = oracle.export_public_key().to_owned();

        assert!(oracle.verify_signature("deadbeef", &signature, &public_key));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);

        let first = oracle.sign_hash("deadbeef").unwrap();
        let second = oracle.sign_hash("deadbeef").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_rejects_bad_input() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);

        for bad in ["", "zz", "abc"] {
            assert!(
                matches!(
                    oracle.sign_hash(bad),
                    Err(OracleError::InvalidInput { .. })
                ),
                "expected InvalidInput for {bad:?}"
            );
        }
    }

    #[test]
    fn test_verify_wrong_oracle_key() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        let oracle_a = test_oracle(&dir_a);
        let oracle_b = test_oracle(&dir_b);

        let signature = oracle_a.sign_hash("deadbeef").unwrap();
        assert!(!oracle_a.verify_signature(
            "deadbeef",
            &signature,
            oracle_b.export_public_key()
        ));
    }

    #[test]
    fn test_verify_malformed_inputs_are_false() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);
        let public_key = oracle.export_public_key().to_owned();
        let signature = oracle.sign_hash("deadbeef").unwrap();

        // Any malformed element collapses to false, never an error.
        assert!(!oracle.verify_signature("", &signature, &public_key));
        assert!(!oracle.verify_signature("zz", &signature, &public_key));
        assert!(!oracle.verify_signature("deadbeef", "not hex", &public_key));
        assert!(!oracle.verify_signature("deadbeef", &signature, "abc"));
        assert!(!oracle.verify_signature("deadbeef", "0000", &public_key));
        assert!(!oracle.verify_signature("deadbeef", &signature, "00ff"));
    }

    #[test]
    fn test_export_public_key_is_stable() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);

        let first = oracle.export_public_key().to_owned();
        let second = oracle.export_public_key().to_owned();
        assert_eq!(first, second);
        assert_eq!(first.len(), 176);
    }

    #[test]
    fn test_clones_share_the_keypair() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);
        let clone = oracle.clone();

        assert_eq!(oracle.export_public_key(), clone.export_public_key());
        let signature = clone.sign_hash("00ff").unwrap();
        assert!(oracle.verify_signature("00ff", &signature, oracle.export_public_key()));
    }

    #[test]
    fn test_debug_does_not_expose_private_key() {
        let dir = tempdir().unwrap();
        let oracle = test_oracle(&dir);

        let debug_str = format!("{oracle:?}");
        assert!(!debug_str.contains("PRIVATE"));
    }
}
