//! TLS configuration for secure connections.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for TLS connections to the auth service.
///
/// By default the client trusts the platform's root certificates and
/// validates the server certificate. Deployments behind a private CA can
/// add their root here.
///
/// ## Example: Custom CA
///
/// ```rust
/// use aras_auth::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/aras/ca.pem")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path (PEM).
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local development.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: This makes connections vulnerable to man-in-the-middle attacks.
    /// Only use this for local development with self-signed certificates.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }

    /// Collects the PEM bundles of every configured custom CA.
    pub(crate) fn ca_bundles(&self) -> Result<Vec<Vec<u8>>> {
        let mut bundles = Vec::new();
        if let Some(ref path) = self.ca_cert_file {
            let pem = std::fs::read(path).map_err(|e| {
                Error::configuration(format!(
                    "failed to read CA certificate {}: {}",
                    path.display(),
                    e
                ))
                .with_source(e)
            })?;
            bundles.push(pem);
        }
        if let Some(ref pem) = self.ca_cert_pem {
            bundles.push(pem.as_bytes().to_vec());
        }
        Ok(bundles)
    }
}
