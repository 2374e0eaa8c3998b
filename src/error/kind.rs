//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// Remote failures fall into exactly two buckets, [`Transport`] and
/// [`Api`]. The remaining kinds are produced locally.
///
/// | ErrorKind         | Origin  | Meaning                                        |
/// |-------------------|---------|------------------------------------------------|
/// | `Transport`       | Remote  | Connection, timeout, non-2xx, undecodable body |
/// | `Api`             | Remote  | Envelope reported `success: false`             |
/// | `InvalidResponse` | Remote  | Success envelope without the expected `data`   |
/// | `Configuration`   | Local   | Invalid builder or environment settings        |
///
/// No kind is retried by the SDK.
///
/// [`Transport`]: ErrorKind::Transport
/// [`Api`]: ErrorKind::Api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request could not be completed at the HTTP layer.
    ///
    /// Covers DNS/connect failures, TLS errors, timeouts, non-2xx status
    /// codes, and response bodies that are not valid JSON envelopes.
    #[error("transport error")]
    Transport,

    /// The service answered with `success: false`.
    ///
    /// The server's `error` code is available via
    /// [`Error::code()`](crate::Error::code).
    #[error("api error")]
    Api,

    /// The service reported success but the payload was missing.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid URL, plain HTTP without `insecure()`).
    #[error("configuration error")]
    Configuration,
}

impl ErrorKind {
    /// Returns `true` if this kind describes a failure reported by, or on
    /// the way to, the remote service.
    #[inline]
    pub fn is_remote(&self) -> bool {
        !matches!(self, ErrorKind::Configuration)
    }
}
