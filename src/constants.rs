// ABOUTME: System-wide constants and configuration values for the bodytrack client
// ABOUTME: Contains API route paths, environment variable names, and default settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable names.

/// Environment variable names used by [`crate::config`] and [`crate::logging`]
pub mod env_config {
    /// Base URL of the body-metrics storage/identity API
    pub const API_URL: &str = "BODYTRACK_API_URL";

    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "BODYTRACK_HTTP_TIMEOUT_SECS";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Service name override for structured log fields
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Default configuration values applied when no environment override is set
pub mod defaults {
    /// Default base URL of the storage/identity API
    pub const API_BASE_URL: &str = "http://localhost:8000/api/v1";

    /// Default HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;

    /// Default log level when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "info";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Canonical service name emitted in log fields
    pub const BODYTRACK_CLIENT: &str = "bodytrack-client";
}

/// API route paths, relative to the configured base URL
pub mod routes {
    /// User registration (POST, JSON body)
    pub const SIGNUP: &str = "/users/signup";

    /// Token issuance via `OAuth2` password flow (POST, form-urlencoded)
    pub const LOGIN: &str = "/login/access-token";

    /// Current authenticated user (GET, PATCH)
    pub const ME: &str = "/users/me";

    /// Server-side re-derivation of stored metrics (POST)
    pub const RECALCULATE_METRICS: &str = "/users/me/recalculate-metrics";

    /// Body-metric record collection (GET, POST; item routes append `/{id}`)
    pub const BODY_METRICS: &str = "/body-metrics/";
}

/// Unit conversion constants
pub mod units {
    /// Centimeters per meter, for height conversions in index formulas
    pub const CM_PER_METER: f64 = 100.0;
}
