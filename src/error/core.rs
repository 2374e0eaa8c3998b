//! Main error type for the SDK.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The error type for every SDK operation.
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (Transport / Api / InvalidResponse / Configuration)
/// ├── message: String          (server `message` for Api errors, description otherwise)
/// ├── code: Option             (server `error` field, when the body was an envelope)
/// ├── status: Option           (HTTP status, when a response was received)
/// └── source: Option           (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use aras_auth::{Error, ErrorKind};
///
/// fn describe(err: &Error) -> String {
///     match err.kind() {
///         ErrorKind::Api if err.code() == Some("not_found") => "missing".into(),
///         ErrorKind::Api => format!("rejected: {}", err.message()),
///         ErrorKind::Transport => match err.status() {
///             Some(status) => format!("http {status}"),
///             None => "network".into(),
///         },
///         _ => err.to_string(),
///     }
/// }
///
/// let err = Error::api(Some("not_found".into()), Some("no such user".into()));
/// assert_eq!(describe(&err), "missing");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    code: Option<String>,
    status: Option<u16>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// ```rust
    /// use aras_auth::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Configuration, "timeout must be positive");
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            status: None,
            source: None,
        }
    }

    /// Creates an [`ErrorKind::Api`] error from the envelope's `error` and
    /// `message` fields.
    pub fn api(code: Option<String>, message: Option<String>) -> Self {
        Self {
            kind: ErrorKind::Api,
            message: message.unwrap_or_default().into(),
            code,
            status: None,
            source: None,
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message.
    ///
    /// For [`ErrorKind::Api`] errors this is the server's `message` field
    /// (empty when the server sent none).
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the server's `error` code, if the response carried one.
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the HTTP status code, if a response was received.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns `true` for [`ErrorKind::Api`] errors.
    #[inline]
    pub fn is_api(&self) -> bool {
        self.kind == ErrorKind::Api
    }

    /// Returns `true` for [`ErrorKind::Transport`] errors.
    #[inline]
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// Sets the server error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the source error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(status) = self.status {
            write!(f, " (HTTP {})", status)?;
        }
        if let Some(ref code) = self.code {
            write!(f, ": {}", code)?;
            if !self.message.is_empty() {
                write!(f, " - {}", self.message)?;
            }
        } else if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            format!("request failed: {}", err)
        };
        let mut error = Error::transport(message);
        if let Some(status) = err.status() {
            error = error.with_status(status.as_u16());
        }
        error.with_source(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::transport(format!("malformed response body: {}", err)).with_source(err)
    }
}
