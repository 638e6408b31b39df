//! Player configuration
//!
//! Resolved from the process environment on native targets (after `dotenvy`
//! has loaded `.env`) and from compile-time variables on wasm.

use std::{str::FromStr, time::Duration};

use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "MICROAVENTURE_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "MICROAVENTURE_REQUEST_TIMEOUT_MS";
pub const SHELL_VAR: &str = "MICROAVENTURE_SHELL";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{API_URL_VAR} is not a valid URL ({value}): {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("{REQUEST_TIMEOUT_VAR} must be a positive number of milliseconds, got {0:?}")]
    InvalidTimeout(String),

    #[error("unknown shell kind: {0:?}")]
    UnknownShell(String),
}

/// Shell variant for UI layout selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(ConfigError::UnknownShell(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfig {
    /// Search API base URL. `None` runs the app against the bundled catalog.
    pub api_url: Option<Url>,
    pub request_timeout: Duration,
    /// Explicit layout; `None` lets the binary pick one for the target.
    pub shell: Option<ShellKind>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            shell: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(read_var)
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = get(API_URL_VAR)
            .map(|value| {
                Url::parse(&value).map_err(|e| ConfigError::InvalidApiUrl {
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()?;

        let request_timeout = match get(REQUEST_TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };

        let shell = get(SHELL_VAR).map(|s| s.parse()).transpose()?;

        Ok(Self {
            api_url,
            request_timeout,
            shell,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_var(key: &str) -> Option<String> {
    let value = match key {
        API_URL_VAR => option_env!("MICROAVENTURE_API_URL"),
        REQUEST_TIMEOUT_VAR => option_env!("MICROAVENTURE_REQUEST_TIMEOUT_MS"),
        SHELL_VAR => option_env!("MICROAVENTURE_SHELL"),
        _ => None,
    };
    value.map(str::to_string)
}
