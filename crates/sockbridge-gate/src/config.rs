use std::time::Duration;

/// Gate behavior knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Deadline for policy code to resolve an event. `None` lets an
    /// unresolved event stall its socket's bridge traffic indefinitely,
    /// which is the historical contract of the abstraction.
    pub resolve_timeout: Option<Duration>,
    /// Outcome applied when the deadline passes. Deny unless overridden.
    pub allow_on_timeout: bool,
}

impl GateConfig {
    pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(30);
}

impl Default for GateConfig {
    fn default() -> Self {
        let resolve_timeout = if env_flag_set("SOCKBRIDGE_NO_TIMEOUT") {
            None
        } else {
            std::env::var("SOCKBRIDGE_RESOLVE_TIMEOUT")
                .ok()
                .and_then(|value| humantime::parse_duration(&value).ok())
                .or(Some(Self::DEFAULT_RESOLVE_TIMEOUT))
        };
        Self {
            resolve_timeout,
            allow_on_timeout: env_flag_set("SOCKBRIDGE_ALLOW_ON_TIMEOUT"),
        }
    }
}

fn env_flag_set(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false)
}
