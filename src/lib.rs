//! # ArasAuth Rust SDK
//!
//! Rust client for the ArasAuth authentication and authorization service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aras_auth::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .url("https://auth.example.com")
//!         .build()?;
//!
//!     // Sign in; the access token is kept on the client
//!     let auth = client.login("alice@example.com", "hunter2").await?;
//!
//!     // Check permission
//!     let allowed = client
//!         .check_permission(auth.user.map(|u| u.id).unwrap_or_default(), "invoices", "approve")
//!         .await?;
//!     println!("Allowed: {}", allowed);
//!
//!     // Manage resources
//!     let groups = client.groups().list().limit(50).await?;
//!     println!("{} groups", groups.total);
//!
//!     client.logout(auth.refresh_token).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Session Token**: `login` and `refresh_token` store the access token;
//!   `logout` clears it. Every request carries it as a bearer token.
//! - **Sub-clients**: `users()`, `groups()`, `roles()`, `permissions()` and
//!   `account()` share the parent client's connection pool and token.
//! - **Denial ≠ Error**: `check_permission()` returns `Ok(false)` for denied
//!   access, not `Err`
//! - **Partial Updates**: update requests only send the fields that were set.
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `blocking`: Enable the synchronous `blocking::Client`

#![cfg_attr(docsrs, feature(doc_cfg))]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;

mod authz;
mod user_agent;

// Synchronous facade
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use types::{
    AuthResponse, Envelope, Group, ListResponse, Permission, Role, TokenIntrospection, User,
    UserStatus,
};
pub use user_agent::user_agent;

// Re-export auth types
pub use auth::{AccountClient, LoginRequest, RegisterRequest};

// Re-export resource types
pub use resources::{
    CreateGroupRequest, CreatePermissionRequest, CreateRoleRequest, GroupsClient, ListRequest,
    PermissionsClient, RolesClient, UpdateGroupRequest, UpdatePermissionRequest,
    UpdateRoleRequest, UpdateUserRequest, UsersClient,
};

// Re-export config types
pub use config::{EnvConfig, TlsConfig};
