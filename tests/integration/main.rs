//! Integration tests for the ArasAuth Rust SDK.
//!
//! These tests drive the public API end to end against an in-process
//! HTTP server (wiremock) that speaks the ArasAuth envelope protocol.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # Run a specific test
//! cargo test --test integration test_session_lifecycle -- --nocapture
//! ```

mod auth_tests;
mod common;
mod error_tests;
mod property_tests;
mod resources_tests;
