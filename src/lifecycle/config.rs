//! Runtime configuration for the editor, read from the environment.

/// Settings for an [`EditorSystem`](crate::lifecycle::EditorSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Capacity of the session actor's request channel.
    pub channel_capacity: usize,
    /// Accept order dates later than today. When off, submit enforces the
    /// date picker's upper bound.
    pub allow_future_dates: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            allow_future_dates: true,
        }
    }
}

impl EditorConfig {
    /// Reads `ORDER_EDITOR_CHANNEL_CAPACITY` and `ORDER_EDITOR_ALLOW_FUTURE_DATES`.
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            channel_capacity: lookup("ORDER_EDITOR_CHANNEL_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.channel_capacity),
            allow_future_dates: lookup("ORDER_EDITOR_ALLOW_FUTURE_DATES")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.allow_future_dates),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
