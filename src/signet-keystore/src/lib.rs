//! # signet-keystore
//!
//! File-backed keypair custody for the Signet signing oracle.
//!
//! This crate owns the oracle's single secp256k1 keypair:
//! - **First open**: generates a keypair and persists it as one JSON
//!   record (SEC1 private PEM + SPKI public PEM) with 0600 permissions.
//! - **Later opens**: loads the same record back, verifying that the
//!   stored public key matches the private key before accepting it.
//!
//! A record that fails validation is reported as
//! [`KeyStoreError::CorruptKeyStore`] and left untouched on disk. The
//! store never regenerates over existing material; recovery is an
//! explicit operator action (delete or restore the file).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signet_keystore::KeyStore;
//!
//! let store = KeyStore::open("signet-keys.json")?;
//! let signature = store.signer().sign(b"message")?;
//! println!("public key: {}", store.public_key_hex());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod store;

pub use error::KeyStoreError;
pub use store::KeyStore;
