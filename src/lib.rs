// ABOUTME: Main library entry point for the bodytrack body-composition client
// ABOUTME: Exposes the metrics engine, data models, API client, and ambient configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

#![deny(unsafe_code)]

//! # Bodytrack
//!
//! Client-side core of a body-composition tracking application. Users keep a
//! profile (height, sex, birth date) and record periodic measurements
//! (weight, body fat %, muscle mass %, water %); this crate derives the
//! index values each record carries (BMI, FFMI, BMR via Mifflin-St Jeor)
//! and the age/sex-adjusted healthy ranges they are charted against, and
//! talks to the external storage/identity API that owns persistence and
//! token issuance.
//!
//! ## Architecture
//!
//! - **`composition`**: the metrics engine; pure computation and static
//!   reference-table lookup, no I/O
//! - **`models`**: wire types for users, tokens, and body-metric records
//! - **`client`**: bearer-token HTTP client for the storage/identity API
//! - **`config`** / **`logging`** / **`errors`**: environment configuration,
//!   structured logging, and the unified error system
//!
//! Derived values are computed once when a record is entered and persisted
//! with it; historical records keep the snapshot they were created with.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodytrack::client::{TrackerClient, TrackerClientConfig};
//! use bodytrack::composition::DerivedMetrics;
//! use bodytrack::errors::AppResult;
//! use bodytrack::models::BodyMetricCreate;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let client = TrackerClient::new(TrackerClientConfig::default())?;
//!     client.login("athlete@example.com", "secret").await?;
//!
//!     let user = client.current_user().await?;
//!     let today = Utc::now().date_naive();
//!
//!     let payload = BodyMetricCreate::new(today, 70.0);
//!     let derived = DerivedMetrics::compute(
//!         &user.profile_snapshot(),
//!         &payload.metric_input(),
//!         today,
//!     );
//!     let record = client.create_metric(&payload.with_derived(&derived)).await?;
//!     println!("stored record {}", record.id);
//!     Ok(())
//! }
//! ```

/// Typed HTTP client for the storage/identity API
pub mod client;

/// Body-composition metrics engine: derived indexes and healthy ranges
pub mod composition;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Common data models for users and body-metric records
pub mod models;
