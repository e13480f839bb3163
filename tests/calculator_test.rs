// ABOUTME: Unit tests for the derived-metrics calculator
// ABOUTME: Validates BMI/FFMI/BMR formulas, rounding, absence semantics, and purity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use bodytrack::composition::{
    age_in_years, bmi, bmr, ffmi, DerivedMetrics, MetricInput, ProfileSnapshot, Sex,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── BMI ─────────────────────────────────────────────────────────────────

#[test]
fn test_bmi_matches_formula_across_inputs() {
    for (weight, height) in [
        (45.0, 150.0),
        (58.3, 162.5),
        (70.0, 175.0),
        (82.6, 181.0),
        (110.4, 195.5),
    ] {
        let height_m: f64 = height / 100.0;
        let expected = round_1dp(weight / (height_m * height_m));
        assert_eq!(bmi(weight, height), Some(expected), "weight={weight} height={height}");
    }
}

#[test]
fn test_bmi_absent_for_non_positive_height() {
    assert_eq!(bmi(70.0, 0.0), None);
    assert_eq!(bmi(70.0, -1.0), None);
}

// ── FFMI ────────────────────────────────────────────────────────────────

#[test]
fn test_ffmi_never_exceeds_bmi_with_positive_body_fat() {
    for (weight, height, body_fat) in [
        (60.0, 165.0, 12.0),
        (75.0, 178.0, 18.5),
        (95.0, 190.0, 25.0),
        (70.0, 175.0, 0.5),
    ] {
        let bmi_value = bmi(weight, height).unwrap();
        let ffmi_value = ffmi(weight, height, body_fat).unwrap();
        assert!(
            ffmi_value <= bmi_value,
            "ffmi {ffmi_value} > bmi {bmi_value} at bf {body_fat}"
        );
    }
}

#[test]
fn test_ffmi_at_zero_body_fat_equals_bmi() {
    assert_eq!(ffmi(70.0, 175.0, 0.0), bmi(70.0, 175.0));
}

#[test]
fn test_ffmi_absent_for_non_positive_height() {
    assert_eq!(ffmi(70.0, 0.0, 15.0), None);
    assert_eq!(ffmi(70.0, -175.0, 15.0), None);
}

// ── BMR ─────────────────────────────────────────────────────────────────

#[test]
fn test_bmr_male_reference_value() {
    // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75 -> 1674
    assert_eq!(bmr(70.0, 175.0, 25, Sex::Male), 1674);
}

#[test]
fn test_bmr_female_reference_value() {
    // 10*70 + 6.25*175 - 5*25 - 161 = 1507.75 -> 1508
    assert_eq!(bmr(70.0, 175.0, 25, Sex::Female), 1508);
}

#[test]
fn test_bmr_matches_formula_for_any_age() {
    for age in [18, 30, 45, 60, 75] {
        let expected = (10.0 * 70.0_f64 + 6.25 * 175.0 - 5.0 * f64::from(age) + 5.0).round();
        assert_eq!(bmr(70.0, 175.0, age, Sex::Male), expected as u32, "age {age}");
    }
}

#[test]
fn test_sex_label_matching_is_case_insensitive() {
    assert_eq!(Sex::from_label("MALE"), Sex::from_label("male"));
    assert_eq!(Sex::from_label("Male"), Sex::Male);
}

#[test]
fn test_non_male_labels_route_to_female_formula() {
    for label in ["female", "FEMALE", "", "other", "unknown", "m"] {
        assert_eq!(Sex::from_label(label), Sex::Female, "label {label:?}");
    }
}

// ── Age ─────────────────────────────────────────────────────────────────

#[test]
fn test_age_is_calendar_aware_not_day_count() {
    let birth = date(1996, 2, 29); // leap-day birthday
    assert_eq!(age_in_years(birth, date(2024, 2, 28)), 27);
    assert_eq!(age_in_years(birth, date(2024, 3, 1)), 28);
}

#[test]
fn test_age_on_birthday_counts_the_new_year() {
    let birth = date(1990, 7, 15);
    assert_eq!(age_in_years(birth, date(2020, 7, 15)), 30);
    assert_eq!(age_in_years(birth, date(2020, 7, 14)), 29);
}

// ── DerivedMetrics::compute ─────────────────────────────────────────────

fn full_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        sex: Some(Sex::Male),
        birth_date: Some(date(1995, 5, 10)),
        height_cm: Some(175.0),
    }
}

#[test]
fn test_compute_with_complete_profile() {
    let input = MetricInput {
        weight_kg: 70.0,
        body_fat_percent: Some(15.0),
    };
    let derived = DerivedMetrics::compute(&full_profile(), &input, date(2020, 5, 10));

    assert_eq!(derived.bmi, Some(22.9));
    assert_eq!(derived.ffmi, Some(19.4)); // 59.5 kg lean / 1.75^2
    assert_eq!(derived.bmr, Some(1674)); // age 25 on this as-of date
}

#[test]
fn test_compute_without_body_fat_leaves_ffmi_absent() {
    let input = MetricInput {
        weight_kg: 70.0,
        body_fat_percent: None,
    };
    let derived = DerivedMetrics::compute(&full_profile(), &input, date(2020, 5, 10));
    assert_eq!(derived.ffmi, None);
    assert!(derived.bmi.is_some());
    assert!(derived.bmr.is_some());
}

#[test]
fn test_compute_without_height_yields_all_indexes_absent() {
    let profile = ProfileSnapshot {
        sex: Some(Sex::Female),
        birth_date: Some(date(1985, 1, 1)),
        height_cm: None,
    };
    let input = MetricInput {
        weight_kg: 62.0,
        body_fat_percent: Some(24.0),
    };
    let derived = DerivedMetrics::compute(&profile, &input, date(2025, 6, 1));
    assert_eq!(derived, DerivedMetrics::default());
}

#[test]
fn test_compute_without_sex_or_birth_date_leaves_bmr_absent() {
    let profile = ProfileSnapshot {
        sex: None,
        birth_date: None,
        height_cm: Some(168.0),
    };
    let input = MetricInput {
        weight_kg: 62.0,
        body_fat_percent: Some(24.0),
    };
    let derived = DerivedMetrics::compute(&profile, &input, date(2025, 6, 1));
    assert!(derived.bmi.is_some());
    assert!(derived.ffmi.is_some());
    assert_eq!(derived.bmr, None);
}

#[test]
fn test_compute_is_deterministic() {
    let input = MetricInput {
        weight_kg: 70.0,
        body_fat_percent: Some(15.0),
    };
    let as_of = date(2020, 5, 10);
    let first = DerivedMetrics::compute(&full_profile(), &input, as_of);
    let second = DerivedMetrics::compute(&full_profile(), &input, as_of);
    assert_eq!(first, second);
}

#[test]
fn test_profile_completeness() {
    assert!(full_profile().is_complete());
    assert!(!ProfileSnapshot::default().is_complete());
    let missing_sex = ProfileSnapshot {
        sex: None,
        ..full_profile()
    };
    assert!(!missing_sex.is_complete());
}
