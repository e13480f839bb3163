// ABOUTME: Unit tests for wire-level data models
// ABOUTME: Validates payload serialization, patch omission semantics, and profile projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use bodytrack::composition::{DerivedMetrics, Sex};
use bodytrack::models::{AuthToken, BodyMetric, BodyMetricCreate, BodyMetricUpdate, User, UserUpdate};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_user(sex: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        email: "athlete@example.com".into(),
        full_name: Some("Test Athlete".into()),
        birth_date: Some(date(1990, 5, 10)),
        sex: sex.map(Into::into),
        height: Some(175.0),
        is_active: true,
    }
}

// ── Patch payloads omit unset fields ───────────────────────────────────

#[test]
fn test_user_update_omits_unset_fields() {
    let update = UserUpdate {
        height: Some(180.0),
        ..UserUpdate::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("height"));
    assert!(!object.contains_key("email"));
    assert!(!object.contains_key("password"));
}

#[test]
fn test_body_metric_update_omits_unset_fields() {
    let update = BodyMetricUpdate {
        weight: Some(71.5),
        notes: Some("morning weigh-in".into()),
        ..BodyMetricUpdate::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("weight"));
    assert!(object.contains_key("notes"));
    assert!(!object.contains_key("bmi"));
}

// ── Record creation with derived indexes ───────────────────────────────

#[test]
fn test_with_derived_merges_computed_values() {
    let derived = DerivedMetrics {
        bmi: Some(22.9),
        ffmi: Some(19.4),
        bmr: Some(1674),
    };
    let payload = BodyMetricCreate::new(date(2025, 8, 1), 70.0).with_derived(&derived);

    assert_eq!(payload.bmi, Some(22.9));
    assert_eq!(payload.ffmi, Some(19.4));
    assert_eq!(payload.bmr, Some(1674.0));
}

#[test]
fn test_with_derived_leaves_absent_values_unset() {
    let derived = DerivedMetrics {
        bmi: Some(22.9),
        ffmi: None,
        bmr: None,
    };
    let payload = BodyMetricCreate::new(date(2025, 8, 1), 70.0).with_derived(&derived);
    let json = serde_json::to_value(&payload).unwrap();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("bmi"));
    assert!(!object.contains_key("ffmi"));
    assert!(!object.contains_key("bmr"));
    assert_eq!(object["date"], "2025-08-01");
    assert_eq!(object["weight"], 70.0);
}

#[test]
fn test_metric_input_reflects_payload_fields() {
    let mut payload = BodyMetricCreate::new(date(2025, 8, 1), 70.0);
    payload.body_fat_percentage = Some(15.0);
    let input = payload.metric_input();
    assert_eq!(input.weight_kg, 70.0);
    assert_eq!(input.body_fat_percent, Some(15.0));
}

// ── Deserialization of API responses ───────────────────────────────────

#[test]
fn test_body_metric_deserializes_from_api_shape() {
    let json = r#"{
        "id": "7b2a8f66-52ab-41f1-9d8e-1f0b4f9c2a11",
        "user_id": "0e9b7a44-6c1d-4f3b-8e2a-5d7c9b1a3f55",
        "date": "2025-08-01",
        "weight": 70.5,
        "body_fat_percentage": 15.2,
        "bmi": 23.0,
        "bmr": 1674.0
    }"#;
    let metric: BodyMetric = serde_json::from_str(json).unwrap();
    assert_eq!(metric.weight, 70.5);
    assert_eq!(metric.bmi, Some(23.0));
    assert_eq!(metric.muscle_mass, None);
    assert_eq!(metric.notes, None);
}

#[test]
fn test_auth_token_deserializes_from_login_response() {
    let json = r#"{"access_token": "abc123", "token_type": "bearer"}"#;
    let token: AuthToken = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.token_type, "bearer");
}

// ── Profile projection ─────────────────────────────────────────────────

#[test]
fn test_profile_snapshot_maps_sex_label() {
    assert_eq!(sample_user(Some("male")).profile_snapshot().sex, Some(Sex::Male));
    assert_eq!(sample_user(Some("MALE")).profile_snapshot().sex, Some(Sex::Male));
    assert_eq!(sample_user(Some("female")).profile_snapshot().sex, Some(Sex::Female));
    assert_eq!(sample_user(Some("")).profile_snapshot().sex, Some(Sex::Female));
    assert_eq!(sample_user(None).profile_snapshot().sex, None);
}

#[test]
fn test_profile_complete_requires_all_three_fields() {
    assert!(sample_user(Some("male")).profile_complete());

    let mut user = sample_user(Some("male"));
    user.height = None;
    assert!(!user.profile_complete());

    let mut user = sample_user(None);
    user.sex = None;
    assert!(!user.profile_complete());
}
