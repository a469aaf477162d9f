//! Configuration for the signing oracle.

use std::path::PathBuf;

/// Configuration for a [`SigningOracle`](crate::SigningOracle).
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Path of the persisted key record.
    pub key_path: PathBuf,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from("signet-keys.json"),
        }
    }
}
