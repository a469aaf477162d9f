//! # signet-core
//!
//! The Signet signing oracle: facade, HTTP service and process glue.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                  signetd (HTTP)                │
//! │   /sign   /verify   /public-key   /health      │
//! │        rate limit · request tracing            │
//! ├────────────────────────────────────────────────┤
//! │                 SigningOracle                  │
//! │   strict hex codec · error collapsing          │
//! ├──────────────────────┬─────────────────────────┤
//! │   signet-keystore    │      signet-crypto      │
//! │   (keypair custody)  │  (ECDSA / secp256k1)    │
//! └──────────────────────┴─────────────────────────┘
//! ```
//!
//! ## Security Properties
//!
//! - **Key confinement**: the private key never crosses the oracle
//!   boundary; only signatures and the public key leave the process.
//! - **Strict input**: every caller-supplied value is hex-decoded with
//!   strict rules before any crypto code runs.
//! - **Error opacity**: verification never errors (malformed input is
//!   `false`), and failure responses carry static descriptions only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)] // Too strict for production code
#![allow(clippy::module_name_repetitions)] // Allow Type in module::Type
#![allow(clippy::must_use_candidate)] // Not all functions need must_use

pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod oracle;
pub mod ratelimit;

pub use config::OracleConfig;
pub use error::OracleError;
pub use oracle::SigningOracle;
pub use ratelimit::RateLimiter;
