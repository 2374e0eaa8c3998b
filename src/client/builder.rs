//! Client builder with typestate pattern.

use std::{marker::PhantomData, time::Duration};

use super::inner::ClientInner;
use crate::{
    Client, Error,
    config::{EnvConfig, TlsConfig},
    error::Result,
    user_agent,
};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so `build()` is only available once a URL
/// has been provided.
///
/// ## Required Configuration
///
/// - `url()`: The ArasAuth service base URL (the `/api/v1` prefix is added
///   by the client)
///
/// ## Optional Configuration
///
/// - `timeout()`: Per-request timeout (default 30 seconds)
/// - `token()`: Initial bearer token
/// - `tls_config()`: Custom TLS settings
/// - `insecure()`: Allow plain HTTP and skip certificate verification
/// - `user_agent()`: Application identifier appended to the User-Agent
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use aras_auth::Client;
///
/// let client = Client::builder()
///     .url("https://auth.example.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// assert_eq!(client.base_url(), "https://auth.example.com");
/// # Ok::<(), aras_auth::Error>(())
/// ```
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    timeout: Option<Duration>,
    token: Option<String>,
    tls_config: TlsConfig,
    user_agent: Option<String>,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            timeout: None,
            token: None,
            tls_config: TlsConfig::default(),
            user_agent: None,
            _url_state: PhantomData,
        }
    }

    /// Creates a builder from `ARAS_AUTH_*` environment variables.
    ///
    /// See [`EnvConfig`] for the variables read. Settings can still be
    /// overridden on the returned builder.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ARAS_AUTH_URL` is unset or a
    /// variable cannot be parsed.
    pub fn from_env() -> Result<ClientBuilder<HasUrl>> {
        EnvConfig::from_env().map(Self::from_config)
    }

    /// Creates a builder from an already collected [`EnvConfig`].
    pub fn from_config(config: EnvConfig) -> ClientBuilder<HasUrl> {
        let mut builder = Self::new().url(config.url);
        builder.timeout = config.timeout;
        builder.token = config.token;
        if config.insecure {
            builder = builder.insecure();
        }
        builder
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder<NoUrl> {
    /// Sets the service base URL.
    ///
    /// Any path on the URL is kept; requests go to
    /// `<url>/api/v1/<endpoint>`.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            timeout: self.timeout,
            token: self.token,
            tls_config: self.tls_config,
            user_agent: self.user_agent,
            _url_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U> {
    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the bearer token sent until the first login, refresh, or logout.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the TLS configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aras_auth::{Client, TlsConfig};
    ///
    /// let builder = Client::builder()
    ///     .url("https://auth.internal")
    ///     .tls_config(TlsConfig::builder().ca_cert_file("/etc/aras/ca.pem").build());
    /// ```
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        let skip_verification = self.tls_config.skip_verification;
        self.tls_config = config;
        self.tls_config.skip_verification |= skip_verification;
        self
    }

    /// Disables TLS certificate verification and allows HTTP connections.
    ///
    /// **WARNING**: This is insecure and should only be used for local development.
    /// Never use this in production.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Appends an application identifier (e.g. `"billing/2.1"`) to the
    /// SDK's User-Agent.
    #[must_use]
    pub fn user_agent(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent = Some(suffix.into());
        self
    }
}

impl ClientBuilder<HasUrl> {
    /// Builds the client.
    ///
    /// No request is made; the first network traffic happens on the first
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - The URL is invalid or not `http`/`https`
    /// - The URL uses plain HTTP without [`insecure()`](Self::insecure)
    /// - The timeout is zero
    /// - A custom CA certificate cannot be loaded
    pub fn build(self) -> Result<Client> {
        let url = self.url.ok_or_else(|| Error::configuration("URL is required"))?;

        let parsed_url = url::Url::parse(&url)
            .map_err(|e| Error::configuration(format!("invalid URL: {}", e)).with_source(e))?;

        match parsed_url.scheme() {
            "https" => {},
            "http" if self.tls_config.skip_verification => {},
            "http" => {
                return Err(Error::configuration(
                    "HTTPS is required. Use .insecure() for development with HTTP.",
                ));
            },
            other => {
                return Err(Error::configuration(format!(
                    "unsupported URL scheme {:?}; expected http or https",
                    other
                )));
            },
        }
        if parsed_url.query().is_some() || parsed_url.fragment().is_some() {
            return Err(Error::configuration("base URL must not carry a query or fragment"));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::configuration("timeout must be greater than zero"));
        }

        let http_client = build_http_client(
            &parsed_url,
            &self.tls_config,
            timeout,
            user_agent::user_agent_with(self.user_agent.as_deref()),
        )?;

        tracing::debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "client configured");

        let inner = ClientInner::new(url, timeout, http_client, self.token);
        Ok(Client::from_inner(inner))
    }
}

#[cfg(any(feature = "rustls", feature = "native-tls"))]
fn build_http_client(
    _url: &url::Url,
    tls_config: &TlsConfig,
    timeout: Duration,
    user_agent: String,
) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent);

    for pem in tls_config.ca_bundles()? {
        let certificate = reqwest::Certificate::from_pem(&pem).map_err(|e| {
            Error::configuration(format!("invalid CA certificate: {}", e)).with_source(e)
        })?;
        builder = builder.add_root_certificate(certificate);
    }

    if tls_config.skip_verification {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(|e| {
        Error::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
    })
}

#[cfg(not(any(feature = "rustls", feature = "native-tls")))]
fn build_http_client(
    url: &url::Url,
    tls_config: &TlsConfig,
    timeout: Duration,
    user_agent: String,
) -> Result<reqwest::Client> {
    if url.scheme() == "https" || tls_config.has_custom_ca() {
        return Err(Error::configuration(
            "TLS support requires the `rustls` or `native-tls` feature",
        ));
    }

    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| {
            Error::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
        })
}
