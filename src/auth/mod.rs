//! Session and account operations.
//!
//! Session operations live on [`Client`](crate::Client) because they change
//! the bearer token every clone of the client shares:
//!
//! - [`Client::login`](crate::Client::login) and
//!   [`Client::refresh_token`](crate::Client::refresh_token) store the
//!   returned access token
//! - [`Client::logout`](crate::Client::logout) revokes the refresh token and
//!   clears the access token
//! - [`Client::register`](crate::Client::register) and
//!   [`Client::current_user`](crate::Client::current_user) leave the session
//!   untouched
//!
//! Password, email and token flows that never touch the session are on
//! [`AccountClient`], reached through [`Client::account`](crate::Client::account).
//!
//! ## Example
//!
//! ```rust,no_run
//! use aras_auth::{Client, RegisterRequest};
//!
//! # async fn run() -> aras_auth::Result<()> {
//! let client = Client::builder().url("https://auth.example.com").build()?;
//!
//! client
//!     .register(RegisterRequest::new("ada@example.com", "correct horse").with_name("Ada", "Lovelace"))
//!     .await?;
//! let session = client.login("ada@example.com", "correct horse").await?;
//! let me = client.current_user().await?;
//! println!("signed in as {}", me.email);
//!
//! client.logout(&session.refresh_token).await?;
//! # Ok(())
//! # }
//! ```

mod account;
mod credentials;
mod session;

pub use account::AccountClient;
pub use credentials::{LoginRequest, RegisterRequest};
