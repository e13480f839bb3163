// ABOUTME: Derived body-composition index calculations using established clinical formulas
// ABOUTME: BMI, FFMI, and BMR (Mifflin-St Jeor) computation from profile and measurement input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Derived-Metrics Calculator
//!
//! Computes the three derived indexes a body-metric record carries: BMI,
//! FFMI, and BMR. All formulas operate on metric units (kilograms,
//! centimeters) and are evaluated fresh on every call; results are display
//! values, rounded the way the entry form presents and persists them.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure in healthy individuals.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Kouri, E.M., et al. (1995). Fat-free mass index in users and nonusers
//!   of anabolic-androgenic steroids.
//!   *Clinical Journal of Sport Medicine*, 5(4), 223-228.
//!
//! Note: FFMI here is the unadjusted quotient of fat-free mass over squared
//! height. The Kouri height-normalization term (correction toward 1.8 m) is
//! intentionally not applied; stored values would otherwise diverge from
//! what the entry form displayed at record time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::units::CM_PER_METER;

/// Sex for BMR calculation and range lookup
///
/// Two-valued by contract with the reference data: any label other than
/// case-insensitive `"male"` is carried on the female branch. A genuinely
/// absent sex is represented as `Option<Sex>::None` by the caller, which
/// yields absent results rather than a silent default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl Sex {
    /// Map a free-form sex label onto the two-branch model.
    ///
    /// Case-insensitive `"male"` selects [`Sex::Male`]; every other label,
    /// including the empty string, selects [`Sex::Female`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Immutable view of the profile fields the calculator needs
///
/// Sourced from the authenticated user record; fields are optional because
/// an incomplete profile is an expected state, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileSnapshot {
    /// Sex, already mapped through [`Sex::from_label`]
    pub sex: Option<Sex>,
    /// Birth date, used for calendar-aware age computation
    pub birth_date: Option<NaiveDate>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
}

impl ProfileSnapshot {
    /// Whether every field required for the full set of derived indexes is present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.sex.is_some() && self.birth_date.is_some() && self.height_cm.is_some()
    }
}

/// Per-measurement input supplied by the entry form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage in [0, 100], if measured
    pub body_fat_percent: Option<f64>,
}

/// Derived indexes for one measurement
///
/// A pure function of ([`ProfileSnapshot`], [`MetricInput`]) at a given
/// as-of date. Absent fields mean the inputs were insufficient; the caller
/// renders them as "not available", never as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Body Mass Index, rounded to 1 decimal place
    pub bmi: Option<f64>,
    /// Fat-Free Mass Index, rounded to 1 decimal place
    pub ffmi: Option<f64>,
    /// Basal Metabolic Rate in kcal/day, rounded to the nearest whole calorie
    pub bmr: Option<u32>,
}

impl DerivedMetrics {
    /// Compute all derivable indexes for one measurement.
    ///
    /// Each index is computed independently: a profile that lacks sex or
    /// birth date still yields BMI and FFMI when height is present. `as_of`
    /// is the date the age for BMR is measured at; the entry form passes
    /// today, historical re-derivation passes the record date.
    #[must_use]
    pub fn compute(profile: &ProfileSnapshot, input: &MetricInput, as_of: NaiveDate) -> Self {
        let bmi = profile
            .height_cm
            .and_then(|height_cm| bmi(input.weight_kg, height_cm));

        let ffmi = match (profile.height_cm, input.body_fat_percent) {
            (Some(height_cm), Some(body_fat)) => ffmi(input.weight_kg, height_cm, body_fat),
            _ => None,
        };

        let bmr = match (profile.height_cm, profile.birth_date, profile.sex) {
            (Some(height_cm), Some(birth_date), Some(sex)) => Some(bmr(
                input.weight_kg,
                height_cm,
                age_in_years(birth_date, as_of),
                sex,
            )),
            _ => None,
        };

        Self { bmi, ffmi, bmr }
    }
}

/// Whole calendar years elapsed from `birth_date` to `as_of`.
///
/// Calendar-aware: the year difference is reduced by one when the
/// birthday has not yet occurred in the `as_of` year. Not a 365.25-day
/// approximation.
#[must_use]
pub fn age_in_years(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Body Mass Index: `weight_kg / height_m^2`, rounded to 1 decimal place.
///
/// Returns `None` when `height_cm` is zero or negative; an unset height is
/// the caller's `None` before this is reached. Never fails.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    Some(round_1dp(weight_kg / (height_m * height_m)))
}

/// Fat-Free Mass Index: `weight_kg * (1 - bf/100) / height_m^2`, rounded to
/// 1 decimal place.
///
/// Returns `None` when `height_cm` is zero or negative. Uses the unadjusted
/// formula (see module docs).
#[must_use]
pub fn ffmi(weight_kg: f64, height_cm: f64, body_fat_percent: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let fat_free_mass_kg = weight_kg * (1.0 - body_fat_percent / 100.0);
    let height_m = height_cm / CM_PER_METER;
    Some(round_1dp(fat_free_mass_kg / (height_m * height_m)))
}

/// Basal Metabolic Rate via the Mifflin-St Jeor equation (1990), in
/// kcal/day rounded to the nearest whole calorie.
///
/// - male: `10*weight + 6.25*height - 5*age + 5`
/// - female: `10*weight + 6.25*height - 5*age - 161`
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> u32 {
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let kcal = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + sex_constant;
    // Negative only for non-physiological inputs; the wire type is unsigned.
    kcal.round().max(0.0) as u32
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_whole_years_only() {
        let birth = date(1990, 5, 10);
        assert_eq!(age_in_years(birth, date(2020, 5, 10)), 30);
        assert_eq!(age_in_years(birth, date(2020, 5, 9)), 29);
        assert_eq!(age_in_years(birth, date(2020, 12, 31)), 30);
    }

    #[test]
    fn test_bmi_matches_formula() {
        // 70 kg at 1.75 m -> 22.857... -> 22.9
        assert_eq!(bmi(70.0, 175.0), Some(22.9));
        assert_eq!(bmi(100.0, 200.0), Some(25.0));
    }

    #[test]
    fn test_bmi_requires_positive_height() {
        assert_eq!(bmi(70.0, 0.0), None);
        assert_eq!(bmi(70.0, -175.0), None);
    }

    #[test]
    fn test_ffmi_below_bmi_when_fat_present() {
        let bmi_value = bmi(80.0, 180.0).unwrap();
        let ffmi_value = ffmi(80.0, 180.0, 15.0).unwrap();
        assert!(ffmi_value < bmi_value);
    }

    #[test]
    fn test_bmr_reference_values() {
        // Mifflin-St Jeor at 70 kg, 175 cm, age 25: 1673.75 / 1507.75
        assert_eq!(bmr(70.0, 175.0, 25, Sex::Male), 1674);
        assert_eq!(bmr(70.0, 175.0, 25, Sex::Female), 1508);
    }

    #[test]
    fn test_sex_label_two_way_fallback() {
        assert_eq!(Sex::from_label("male"), Sex::Male);
        assert_eq!(Sex::from_label("MALE"), Sex::Male);
        assert_eq!(Sex::from_label("female"), Sex::Female);
        assert_eq!(Sex::from_label(""), Sex::Female);
        assert_eq!(Sex::from_label("nonbinary"), Sex::Female);
    }

    #[test]
    fn test_compute_with_incomplete_profile() {
        let profile = ProfileSnapshot {
            sex: None,
            birth_date: None,
            height_cm: Some(175.0),
        };
        let input = MetricInput {
            weight_kg: 70.0,
            body_fat_percent: None,
        };
        let derived = DerivedMetrics::compute(&profile, &input, date(2025, 1, 1));
        assert_eq!(derived.bmi, Some(22.9));
        assert_eq!(derived.ffmi, None);
        assert_eq!(derived.bmr, None);
    }
}
