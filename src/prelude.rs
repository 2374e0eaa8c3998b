//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use aras_auth::prelude::*;
//! ```
//!
//! This provides access to:
//! - Core client types
//! - Error types
//! - Request builders
//! - Record types

pub use crate::{
    auth::{AccountClient, LoginRequest, RegisterRequest},
    client::{Client, ClientBuilder},
    config::{EnvConfig, TlsConfig},
    error::{Error, ErrorKind, Result},
    resources::{
        CreateGroupRequest, CreatePermissionRequest, CreateRoleRequest, UpdateGroupRequest,
        UpdatePermissionRequest, UpdateRoleRequest, UpdateUserRequest,
    },
    testing::PermissionChecker,
    types::{
        AuthResponse, Group, ListResponse, Permission, Role, TokenIntrospection, User, UserStatus,
    },
};
