//! Configuration types for the ArasAuth client.
//!
//! - [`TlsConfig`]: custom CA certificates and verification settings
//! - [`EnvConfig`]: client settings read from `ARAS_AUTH_*` environment
//!   variables

mod env;
mod tls;

pub use env::{ENV_INSECURE, ENV_TIMEOUT_SECS, ENV_TOKEN, ENV_URL, EnvConfig};
pub use tls::TlsConfig;
