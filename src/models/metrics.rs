// ABOUTME: Body-metric record models for the storage API
// ABOUTME: BodyMetric, BodyMetricCreate, and BodyMetricUpdate wire definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composition::{DerivedMetrics, MetricInput};

/// One stored body-composition measurement
///
/// The derived indexes (`bmi`, `ffmi`, `bmr`) are persisted with the record
/// as computed at entry time; they are not recomputed on read, so a record
/// created before the profile was completed keeps its own snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetric {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Body water percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_percentage: Option<f64>,
    /// Body Mass Index as computed at entry time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Fat-Free Mass Index as computed at entry time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ffmi: Option<f64>,
    /// Basal Metabolic Rate (kcal/day) as computed at entry time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Creation payload for `POST /body-metrics/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetricCreate {
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Body water percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_percentage: Option<f64>,
    /// Body Mass Index; filled by [`BodyMetricCreate::with_derived`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Fat-Free Mass Index; filled by [`BodyMetricCreate::with_derived`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ffmi: Option<f64>,
    /// Basal Metabolic Rate; filled by [`BodyMetricCreate::with_derived`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BodyMetricCreate {
    /// Start a payload from the two fields the entry form always has.
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            body_fat_percentage: None,
            muscle_mass: None,
            water_percentage: None,
            bmi: None,
            ffmi: None,
            bmr: None,
            notes: None,
        }
    }

    /// The calculator input this payload represents.
    #[must_use]
    pub const fn metric_input(&self) -> MetricInput {
        MetricInput {
            weight_kg: self.weight,
            body_fat_percent: self.body_fat_percentage,
        }
    }

    /// Merge computed indexes into the payload before submission.
    ///
    /// Absent derived values leave the corresponding fields unset so they
    /// are omitted from the JSON rather than sent as zero.
    #[must_use]
    pub fn with_derived(mut self, derived: &DerivedMetrics) -> Self {
        self.bmi = derived.bmi;
        self.ffmi = derived.ffmi;
        self.bmr = derived.bmr.map(f64::from);
        self
    }
}

/// Partial-update payload for `PUT /body-metrics/{id}`
///
/// Unset fields are omitted from the JSON so the server leaves them alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyMetricUpdate {
    /// New measurement date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// New body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// New body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// New muscle mass percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// New body water percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_percentage: Option<f64>,
    /// Recomputed Body Mass Index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Recomputed Fat-Free Mass Index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ffmi: Option<f64>,
    /// Recomputed Basal Metabolic Rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// New free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
