//! Shared HTTP agent

use std::sync::LazyLock;
use std::time::Duration;

use ureq::Agent;

const USER_AGENT: &str = concat!(
    "droplist/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/chrisbataille/droplist)"
);

/// Agent reused by every remote source, with a global timeout so a stuck
/// request still answers its page (empty) eventually
pub static HTTP_AGENT: LazyLock<Agent> = LazyLock::new(|| {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(10)))
        .user_agent(USER_AGENT)
        .build()
        .into()
});
