// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Environment-based configuration management
//!
//! All runtime settings come from environment variables with sensible
//! defaults; there is no configuration file. Parsing happens once at
//! startup and the resulting [`ClientConfig`] is passed down by value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use crate::client::TrackerClientConfig;
use crate::constants::{defaults, env_config};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything, including per-request detail
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for behavior and logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback for unrecognized values
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Storage/identity API settings
    pub api: TrackerClientConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; a present but malformed value
    /// (unparseable timeout, invalid base URL) is an error rather than a
    /// silent fallback.
    ///
    /// # Errors
    /// Returns an error when the API base URL does not parse as an absolute
    /// URL or the timeout is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let log_level = LogLevel::from_str_or_default(
            &env::var("RUST_LOG").unwrap_or_else(|_| defaults::LOG_LEVEL.into()),
        );

        let environment = Environment::from_str_or_default(
            &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
        );

        let base_url =
            env::var(env_config::API_URL).unwrap_or_else(|_| defaults::API_BASE_URL.into());
        Url::parse(&base_url)
            .with_context(|| format!("invalid {}: {base_url}", env_config::API_URL))?;

        let timeout_secs = match env::var(env_config::HTTP_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid {}: {raw}", env_config::HTTP_TIMEOUT_SECS))?,
            Err(_) => defaults::HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            log_level,
            environment,
            api: TrackerClientConfig {
                base_url,
                timeout_secs,
            },
        })
    }
}
