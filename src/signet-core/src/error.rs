//! Error types for oracle operations.

use thiserror::Error;

use signet_keystore::KeyStoreError;

/// Errors that can cross the oracle boundary.
///
/// Rejection reasons are static descriptions; caller-supplied input is
/// never echoed back through an error.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Caller input failed strict decoding.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// The signing operation itself failed.
    #[error("Signing failed: {reason}")]
    SigningFailed {
        /// Why signing failed.
        reason: String,
    },

    /// Key store error during startup.
    #[error("Key store error: {0}")]
    KeyStore(#[from] KeyStoreError),
}

impl OracleError {
    /// Create an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a `SigningFailed` error.
    #[must_use]
    pub fn signing_failed(reason: impl Into<String>) -> Self {
        Self::SigningFailed {
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by the caller's input.
    ///
    /// The HTTP layer maps client errors to 400 and everything else to a
    /// generic 500.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
