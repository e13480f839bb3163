// ABOUTME: User account models for the body-composition tracking API
// ABOUTME: User, UserCreate, UserUpdate, and AuthToken wire definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composition::{ProfileSnapshot, Sex};

/// Authenticated user record as served by the identity API
///
/// The profile fields (`birth_date`, `sex`, `height`) feed the metrics
/// engine; all three are optional because a fresh account starts with an
/// empty profile, and derived indexes simply stay absent until it is filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Email address (used for identification and login)
    pub email: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Birth date, used for age-dependent calculations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Sex as a free-form label; mapped onto the two-branch model at use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Whether the account is active
    pub is_active: bool,
}

impl User {
    /// Project this record onto the metrics engine's profile input.
    ///
    /// The sex label goes through [`Sex::from_label`], so any present label
    /// other than case-insensitive "male" lands on the female branch; an
    /// absent label stays absent.
    #[must_use]
    pub fn profile_snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            sex: self.sex.as_deref().map(Sex::from_label),
            birth_date: self.birth_date,
            height_cm: self.height,
        }
    }

    /// Whether the profile carries everything needed for all derived indexes.
    ///
    /// The entry form uses this to prompt the user toward profile settings
    /// when BMI/FFMI/BMR would be systematically absent.
    #[must_use]
    pub fn profile_complete(&self) -> bool {
        self.height.is_some() && self.birth_date.is_some() && self.sex.is_some()
    }
}

/// Registration payload for `POST /users/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    /// Email address
    pub email: String,
    /// Plaintext password; hashed server-side
    pub password: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Birth date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Sex label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Partial-update payload for `PATCH /users/me`
///
/// Unset fields are omitted from the JSON entirely so the server only
/// touches the fields actually present in the patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New plaintext password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New birth date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// New sex label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// New height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Bearer token issued by `POST /login/access-token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// Opaque bearer token attached to authenticated requests
    pub access_token: String,
    /// Token type; the API issues `"bearer"`
    pub token_type: String,
}
