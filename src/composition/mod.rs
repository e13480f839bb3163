// ABOUTME: Body-composition metrics engine: derived-index computation and healthy-range lookup
// ABOUTME: Pure functions over profile and measurement inputs; no I/O, no shared mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Body-composition metrics engine.
//!
//! Two halves, both pure and total over their documented inputs:
//!
//! - [`calculator`] derives BMI, FFMI, and BMR from a profile snapshot and a
//!   measurement; incomplete input yields absent fields, never an error.
//! - [`reference_ranges`] looks up the healthy reference band for a metric
//!   given the person's sex and age, and classifies measured values against
//!   a band.
//!
//! Everything here is safe to call concurrently from any number of callers:
//! the only data besides the explicit arguments are `const` reference tables.

pub mod calculator;
pub mod reference_ranges;

pub use calculator::{age_in_years, bmi, bmr, ffmi, DerivedMetrics, MetricInput, ProfileSnapshot, Sex};
pub use reference_ranges::{healthy_range, MetricKind, RangeStatus, ReferenceRange};
