//! Dispatch configuration and execution modes.

use serde::{Deserialize, Serialize};

/// Where a fetch runs and how its result is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Fetch runs on a background blocking worker.
    Async,
    /// Fetch runs inline on the calling thread.
    Sync,
}

impl DispatchMode {
    /// Returns the prefix prepended to fetched data.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Async => "Async Processed: ",
            Self::Sync => "Sync Processed: ",
        }
    }

    /// Formats fetched data with this mode's prefix.
    #[must_use]
    pub fn label(self, data: &str) -> String {
        format!("{}{data}", self.prefix())
    }
}

/// Configuration for the dispatcher.
///
/// An absent `async-enabled` key means synchronous dispatch.
///
/// # Examples
///
/// ```
/// use tasktrack::dispatch::domain::{DispatchConfig, DispatchMode};
///
/// assert_eq!(DispatchConfig::default().mode(), DispatchMode::Sync);
/// assert_eq!(DispatchConfig::new(true).mode(), DispatchMode::Async);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DispatchConfig {
    /// Runs fetches on a background worker when set.
    #[serde(default, alias = "async_enabled")]
    pub async_enabled: bool,
}

impl DispatchConfig {
    /// Creates a configuration with the given flag.
    #[must_use]
    pub const fn new(async_enabled: bool) -> Self {
        Self { async_enabled }
    }

    /// Returns the mode selected by the flag.
    #[must_use]
    pub const fn mode(self) -> DispatchMode {
        if self.async_enabled {
            DispatchMode::Async
        } else {
            DispatchMode::Sync
        }
    }
}
