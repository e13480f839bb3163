// ABOUTME: Core data models for the bodytrack client
// ABOUTME: Wire types for users, auth tokens, and body-metric records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! # Data Models
//!
//! Wire-level data structures exchanged with the external storage/identity
//! API, plus the conversions into the metrics engine's value objects.
//!
//! ## Design Principles
//!
//! - **Backend Agnostic**: Models mirror the JSON the API speaks, nothing more
//! - **Optional Everywhere It Matters**: profile and measurement fields the
//!   user has not filled in stay `None` and are omitted from payloads
//! - **Serializable**: All models support JSON serialization via serde
//! - **Type Safe**: ids are UUIDs, dates are calendar dates, never strings
//!
//! ## Core Models
//!
//! - `User` / `UserCreate` / `UserUpdate`: the authenticated profile record
//! - `AuthToken`: bearer token returned by the login endpoint
//! - `BodyMetric` / `BodyMetricCreate` / `BodyMetricUpdate`: one dated
//!   body-composition measurement with its persisted derived indexes

mod metrics;
mod user;

pub use metrics::{BodyMetric, BodyMetricCreate, BodyMetricUpdate};
pub use user::{AuthToken, User, UserCreate, UserUpdate};
