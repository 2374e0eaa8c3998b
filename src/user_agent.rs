//! User-Agent header generation.
//!
//! Every request identifies the SDK build so service operators can tell
//! client versions apart in their access logs.

use std::sync::OnceLock;

/// SDK name used in the User-Agent string.
const SDK_NAME: &str = "aras-auth-rust";

/// SDK version from Cargo.toml.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cached User-Agent string (computed once on first access).
static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string for SDK requests.
///
/// Format: `aras-auth-rust/0.1.0 (rust/1.92; linux/x86_64)`
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            SDK_NAME,
            SDK_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

/// Returns the User-Agent string with an application suffix appended.
pub(crate) fn user_agent_with(suffix: Option<&str>) -> String {
    match suffix.map(str::trim).filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{} {}", user_agent(), suffix),
        None => user_agent().to_string(),
    }
}

fn rust_version() -> &'static str {
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

/// Returns a normalized OS name.
fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
