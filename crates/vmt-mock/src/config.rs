//! Generator configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use vmt_core::CalendarDate;
use vmt_lifecycle::StageWalk;

/// Vehicles generated when the caller does not say otherwise.
pub const DEFAULT_VEHICLE_COUNT: usize = 15;

/// Parameters of one generation run.
///
/// The reference date is the "today" the generated history leads up to.
/// Probabilities outside `0.0..=1.0` are clamped, NaN counts as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub reference_date: CalendarDate,
    pub default_count: usize,
    pub walk: StageWalk,
    /// Chance that a movement carries a "Movement from .. to .." comment.
    pub comment_probability: f64,
    /// Chance, per slot, that a supplier slot is populated.
    pub supplier_probability: f64,
    pub min_day_increment: u64,
    pub max_day_increment: u64,
    /// Execution dates lag movement dates by up to this many days.
    pub max_execution_lag: u64,
    /// The last movement of a vehicle lands up to this many days before the
    /// reference date.
    pub max_anchor_offset: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reference_date: CalendarDate::today(),
            default_count: DEFAULT_VEHICLE_COUNT,
            walk: StageWalk::default(),
            comment_probability: 0.3,
            supplier_probability: 0.5,
            min_day_increment: 1,
            max_day_increment: 6,
            max_execution_lag: 2,
            max_anchor_offset: 30,
        }
    }
}

impl GeneratorConfig {
    /// Defaults, anchored at `reference_date`.
    pub fn with_reference_date(reference_date: CalendarDate) -> Self {
        Self {
            reference_date,
            ..Self::default()
        }
    }

    pub fn comment_chance(&self) -> f64 {
        clamp_probability(self.comment_probability)
    }

    pub fn supplier_chance(&self) -> f64 {
        clamp_probability(self.supplier_probability)
    }

    /// Day increments between consecutive movements; never empty.
    pub fn day_increments(&self) -> RangeInclusive<u64> {
        self.min_day_increment..=self.max_day_increment.max(self.min_day_increment)
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
