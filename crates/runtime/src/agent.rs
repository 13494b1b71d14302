//! User-agent string assembly.

use std::env::consts;

use once_cell::sync::Lazy;

// OS and architecture, the toolchain baseline the crate is built against,
// and the core/DSL version markers generated clients are keyed to.
static DEFAULT_USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "StratoCloud ({}; {}) Rust/{} Core/{} StratoDSL/1",
        consts::OS,
        consts::ARCH,
        env!("CARGO_PKG_RUST_VERSION"),
        env!("CARGO_PKG_VERSION"),
    )
});

/// The default user-agent string.
pub fn default_user_agent() -> &'static str {
    &DEFAULT_USER_AGENT
}

/// Build the wire user-agent string.
///
/// A non-empty suffix is appended to the default agent after one space;
/// an absent or empty suffix returns the default unchanged.
pub fn get_user_agent(user_agent: Option<&str>) -> String {
    match user_agent {
        Some(suffix) if !suffix.is_empty() => format!("{} {suffix}", *DEFAULT_USER_AGENT),
        _ => DEFAULT_USER_AGENT.clone(),
    }
}
