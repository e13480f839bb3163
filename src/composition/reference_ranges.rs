// ABOUTME: Healthy reference ranges for body-composition metrics, bucketed by sex and age
// ABOUTME: Static tables with lookup and below/normal/above classification for display shading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Healthy Reference Ranges
//!
//! Static reference tables for the five charted metrics, keyed by sex and,
//! where the source data defines it, by age bracket. Tables are process-wide
//! `const` data; the only access path is [`healthy_range`].
//!
//! Coverage differs per table and is preserved exactly as published:
//! the muscle-mass table defines edge fallbacks (youngest bracket below 18,
//! oldest bracket above 85) while the body-fat table covers ages 20-79 with
//! no fallback outside that span.
//!
//! # Scientific References
//!
//! - Gallagher, D., et al. (2000). Healthy percentage body fat ranges.
//!   *American Journal of Clinical Nutrition*, 72(3), 694-701.
//!   <https://doi.org/10.1093/ajcn/72.3.694>
//!
//! - WHO Expert Consultation (2004). Appropriate body-mass index for Asian
//!   populations. *The Lancet*, 363(9403), 157-163.
//!
//! - Schutz, Y., Kyle, U.U.G., & Pichard, C. (2002). Fat-free mass index and
//!   fat mass index percentiles in Caucasians aged 18-98 y.
//!   *International Journal of Obesity*, 26(7), 953-960.
//!
//! - Janssen, I., et al. (2000). Skeletal muscle mass and distribution in
//!   468 men and women aged 18-88 yr.
//!   *Journal of Applied Physiology*, 89(1), 81-88.

use serde::{Deserialize, Serialize};

use super::calculator::Sex;

/// Metric kinds with a published healthy reference band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Body fat percentage (sex x age bracket)
    BodyFat,
    /// Body water percentage (sex-keyed)
    Water,
    /// Body Mass Index (sex-independent)
    Bmi,
    /// Fat-Free Mass Index (sex-keyed)
    Ffmi,
    /// Muscle mass percentage (sex x age bracket)
    MuscleMass,
}

/// Inclusive healthy band for one metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

/// Position of a measured value relative to a reference band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RangeStatus {
    /// Strictly below the band
    Below,
    /// Within the band, bounds included
    Normal,
    /// Strictly above the band
    Above,
}

impl ReferenceRange {
    /// Classify a measured value against this band.
    ///
    /// Both bounds are inclusive: a value equal to `min` or `max` is
    /// [`RangeStatus::Normal`]. Presentation-only; callers typically map the
    /// result to a display color.
    #[must_use]
    pub fn classify(&self, value: f64) -> RangeStatus {
        if value < self.min {
            RangeStatus::Below
        } else if value > self.max {
            RangeStatus::Above
        } else {
            RangeStatus::Normal
        }
    }
}

/// One age bracket of a sex-and-age keyed table, bounds inclusive
struct AgeBandedRange {
    lower: i32,
    upper: i32,
    range: ReferenceRange,
}

/// Healthy body fat percentage by age, male (Gallagher et al. 2000)
const MALE_BODY_FAT: [AgeBandedRange; 3] = [
    AgeBandedRange {
        lower: 20,
        upper: 39,
        range: ReferenceRange { min: 8.0, max: 19.0 },
    },
    AgeBandedRange {
        lower: 40,
        upper: 59,
        range: ReferenceRange {
            min: 11.0,
            max: 21.0,
        },
    },
    AgeBandedRange {
        lower: 60,
        upper: 79,
        range: ReferenceRange {
            min: 13.0,
            max: 24.0,
        },
    },
];

/// Healthy body fat percentage by age, female (Gallagher et al. 2000)
const FEMALE_BODY_FAT: [AgeBandedRange; 3] = [
    AgeBandedRange {
        lower: 20,
        upper: 39,
        range: ReferenceRange {
            min: 21.0,
            max: 32.0,
        },
    },
    AgeBandedRange {
        lower: 40,
        upper: 59,
        range: ReferenceRange {
            min: 23.0,
            max: 33.0,
        },
    },
    AgeBandedRange {
        lower: 60,
        upper: 79,
        range: ReferenceRange {
            min: 24.0,
            max: 35.0,
        },
    },
];

/// Total body water percentage, male
const MALE_WATER: ReferenceRange = ReferenceRange {
    min: 50.0,
    max: 65.0,
};

/// Total body water percentage, female
const FEMALE_WATER: ReferenceRange = ReferenceRange {
    min: 45.0,
    max: 60.0,
};

/// Healthy BMI band (WHO), sex-independent
const BMI_HEALTHY: ReferenceRange = ReferenceRange {
    min: 18.5,
    max: 24.9,
};

/// FFMI reference band, male (Schutz et al. 2002 percentile span)
const MALE_FFMI: ReferenceRange = ReferenceRange {
    min: 17.0,
    max: 22.0,
};

/// FFMI reference band, female (Schutz et al. 2002 percentile span)
const FEMALE_FFMI: ReferenceRange = ReferenceRange {
    min: 14.0,
    max: 17.0,
};

/// Muscle mass percentage by age, male (after Janssen et al. 2000)
const MALE_MUSCLE_MASS: [AgeBandedRange; 4] = [
    AgeBandedRange {
        lower: 18,
        upper: 35,
        range: ReferenceRange {
            min: 40.0,
            max: 44.0,
        },
    },
    AgeBandedRange {
        lower: 36,
        upper: 55,
        range: ReferenceRange {
            min: 36.0,
            max: 40.0,
        },
    },
    AgeBandedRange {
        lower: 56,
        upper: 75,
        range: ReferenceRange {
            min: 32.0,
            max: 35.0,
        },
    },
    AgeBandedRange {
        lower: 76,
        upper: 85,
        range: ReferenceRange {
            min: 29.0,
            max: 32.0,
        },
    },
];

/// Muscle mass percentage by age, female (after Janssen et al. 2000)
const FEMALE_MUSCLE_MASS: [AgeBandedRange; 4] = [
    AgeBandedRange {
        lower: 18,
        upper: 35,
        range: ReferenceRange {
            min: 31.0,
            max: 33.0,
        },
    },
    AgeBandedRange {
        lower: 36,
        upper: 55,
        range: ReferenceRange {
            min: 29.0,
            max: 31.0,
        },
    },
    AgeBandedRange {
        lower: 56,
        upper: 75,
        range: ReferenceRange {
            min: 27.0,
            max: 30.0,
        },
    },
    AgeBandedRange {
        lower: 76,
        upper: 85,
        range: ReferenceRange {
            min: 23.0,
            max: 26.0,
        },
    },
];

/// Look up the healthy reference band for a metric.
///
/// Key requirements differ per table:
/// - [`MetricKind::Bmi`] needs neither sex nor age.
/// - [`MetricKind::Water`] and [`MetricKind::Ffmi`] need sex.
/// - [`MetricKind::BodyFat`] needs sex and age; ages outside 20-79 return
///   `None` because the source table defines no fallback there.
/// - [`MetricKind::MuscleMass`] needs sex and age; ages below 18 use the
///   18-35 bracket and ages above 85 the 76-85 bracket.
///
/// Missing or out-of-coverage keys yield `None`, never an error.
#[must_use]
pub fn healthy_range(
    kind: MetricKind,
    sex: Option<Sex>,
    age_years: Option<i32>,
) -> Option<ReferenceRange> {
    match kind {
        MetricKind::Bmi => Some(BMI_HEALTHY),
        MetricKind::Water => sex.map(|sex| match sex {
            Sex::Male => MALE_WATER,
            Sex::Female => FEMALE_WATER,
        }),
        MetricKind::Ffmi => sex.map(|sex| match sex {
            Sex::Male => MALE_FFMI,
            Sex::Female => FEMALE_FFMI,
        }),
        MetricKind::BodyFat => {
            let table = match sex? {
                Sex::Male => &MALE_BODY_FAT,
                Sex::Female => &FEMALE_BODY_FAT,
            };
            bracket_lookup(table, age_years?)
        }
        MetricKind::MuscleMass => {
            let table = match sex? {
                Sex::Male => &MALE_MUSCLE_MASS,
                Sex::Female => &FEMALE_MUSCLE_MASS,
            };
            let age = age_years?;
            bracket_lookup(table, age).or_else(|| edge_fallback(table, age))
        }
    }
}

fn bracket_lookup(table: &[AgeBandedRange], age: i32) -> Option<ReferenceRange> {
    table
        .iter()
        .find(|band| age >= band.lower && age <= band.upper)
        .map(|band| band.range)
}

fn edge_fallback(table: &[AgeBandedRange], age: i32) -> Option<ReferenceRange> {
    let first = table.first()?;
    let last = table.last()?;
    if age < first.lower {
        Some(first.range)
    } else if age > last.upper {
        Some(last.range)
    } else {
        None
    }
}
