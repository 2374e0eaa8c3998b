//! Error types for the ArasAuth SDK.
//!
//! Every operation returns [`Result<T>`]. Remote failures come in two
//! kinds:
//!
//! - [`ErrorKind::Transport`]: the HTTP exchange itself failed (connection,
//!   timeout, non-2xx status, unparseable body)
//! - [`ErrorKind::Api`]: the service answered with `success: false`; the
//!   server's `error` and `message` are available via [`Error::code()`] and
//!   [`Error::message()`]
//!
//! Neither kind is retried.
//!
//! ```rust,ignore
//! match client.users().get("42").await {
//!     Ok(user) => println!("{}", user.email),
//!     Err(err) if err.is_api() && err.code() == Some("not_found") => println!("gone"),
//!     Err(err) => return Err(err),
//! }
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use self::kind::ErrorKind;

/// A specialized `Result` type for ArasAuth operations.
pub type Result<T> = std::result::Result<T, Error>;
