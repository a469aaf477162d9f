//! # signet-crypto
//!
//! ECDSA secp256k1 primitives for the Signet signing oracle.
//!
//! This crate implements the byte-level cryptography the oracle is built
//! on:
//! - **Signing**: ECDSA over secp256k1 with SHA-256 digesting, RFC 6979
//!   deterministic nonces and DER-encoded signatures
//! - **Verification**: SPKI-DER public keys, strict algorithm/curve OID
//!   checking, high-S normalization
//! - **Key encodings**: SEC1 PEM private keys, SPKI PEM/DER public keys
//! - **Constant-time comparison** for secret-adjacent byte strings
//!
//! All inputs and outputs here are raw bytes; hex-boundary concerns live
//! one layer up, in `signet-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod ecdsa;
mod error;

pub use ecdsa::{public_key_der_from_pem, Secp256k1Signer, Secp256k1Verifier};
pub use error::CryptoError;

// Re-exported for callers that hold the zeroizing PEM form.
pub use zeroize::Zeroizing;

/// Constant-time byte comparison.
///
/// Compares two byte slices in constant time to prevent timing attacks.
/// Returns `true` if the slices are equal, `false` otherwise.
///
/// # Security
///
/// This function MUST be used for all cryptographic comparisons
/// (signatures, MACs, key material) to prevent timing side-channels.
///
/// Uses the `subtle` crate's `ConstantTimeEq` trait for the comparison.
/// The length check still returns early, but length is typically not
/// secret. For cases where length is secret, callers should pad to equal
/// length.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;

    if a.len() != b.len() {
        // Still early-return on length, but length is typically not secret.
        return false;
    }
    a.ct_eq(b).into()
}
