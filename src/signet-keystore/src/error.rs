//! Key store error types.

use thiserror::Error;

/// Errors that can occur while opening or using the key store.
///
/// All of these are startup-fatal: the store is opened once, before the
/// oracle serves anything, and a failure here means the process must not
/// start. Corruption in particular has no recovery path: the store never
/// silently regenerates a keypair over an unreadable record.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// The persisted record exists but cannot be parsed into a valid,
    /// self-consistent keypair.
    #[error("Corrupt key store: {reason}")]
    CorruptKeyStore {
        /// Reason the record is unusable. Static descriptions only; the
        /// record contents never appear here.
        reason: String,
    },

    /// Generating or encoding a fresh keypair failed.
    #[error("Key generation failed: {reason}")]
    KeyGenerationFailed {
        /// Reason for the failure.
        reason: String,
    },

    /// Reading or writing the key file failed.
    #[error("Key store I/O failed: {reason}")]
    StorageFailed {
        /// Reason for the failure.
        reason: String,
    },
}

impl KeyStoreError {
    /// Create a corrupt key store error.
    #[must_use]
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptKeyStore {
            reason: reason.into(),
        }
    }

    /// Create a key generation failed error.
    #[must_use]
    pub fn key_generation_failed(reason: impl Into<String>) -> Self {
        Self::KeyGenerationFailed {
            reason: reason.into(),
        }
    }

    /// Create a storage failed error.
    #[must_use]
    pub fn storage_failed(reason: impl Into<String>) -> Self {
        Self::StorageFailed {
            reason: reason.into(),
        }
    }
}
