// src/config.rs
use std::fmt;

use thiserror::Error;

/// Environment variables that may hold the upstream key, highest priority first.
pub const CREDENTIAL_SOURCES: [&str; 3] = ["ZAI_API_KEY", "OPENROUTER_API_KEY", "MINIMAX_API_KEY"];

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://openrouter.ai";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Bearer secret for the upstream API. Never serialized, never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Long-running listener with static files.
    Development,
    /// Single request handler, the shape a serverless host invokes.
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Option<Credential>,
    pub port: u16,
    pub mode: RunMode,
    pub upstream_base_url: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            port: DEFAULT_PORT,
            mode: RunMode::Development,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a `.env` file should count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let credential = resolve_credential(&non_empty);

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mode = match non_empty("APP_ENV") {
            Some(env) if env.eq_ignore_ascii_case("production") => RunMode::Production,
            _ => RunMode::Development,
        };

        let upstream_base_url = non_empty("UPSTREAM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());

        let static_dir = non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            credential,
            port,
            mode,
            upstream_base_url,
            static_dir,
        })
    }

    pub fn with_credential(mut self, secret: impl Into<String>) -> Self {
        self.credential = Some(Credential::new(secret));
        self
    }

    pub fn with_upstream_base_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_base_url = url.into();
        self
    }
}

fn resolve_credential<F>(lookup: &F) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    CREDENTIAL_SOURCES
        .iter()
        .find_map(|name| lookup(*name))
        .map(Credential::new)
}
