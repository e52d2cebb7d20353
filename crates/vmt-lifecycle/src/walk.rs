//! # Randomized Stage Walk
//!
//! Drives a [`Lifecycle`] forward with a random cursor: draw a target number
//! of advances, then repeatedly step forward 1–3 canonical positions until
//! that many advances were made or the next step would run past the last
//! stage. The result is a variable-length, skip-prone history that is
//! always a strictly increasing subsequence of the canonical list.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lifecycle::Lifecycle;

/// Bounds for the randomized walk. Both ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageWalk {
    /// Smallest number of advances to attempt.
    pub min_advances: usize,
    /// Largest number of advances to attempt.
    pub max_advances: usize,
    /// Smallest cursor step.
    pub min_step: usize,
    /// Largest cursor step.
    pub max_step: usize,
}

impl Default for StageWalk {
    fn default() -> Self {
        Self {
            min_advances: 3,
            max_advances: 8,
            min_step: 1,
            max_step: 3,
        }
    }
}

impl StageWalk {
    /// Inclusive range of advance counts, repaired so that it is never
    /// empty and never contains 0. Every walk makes at least one movement.
    pub fn advances(&self) -> RangeInclusive<usize> {
        let min = self.min_advances.max(1);
        min..=self.max_advances.max(min)
    }

    /// Inclusive range of step sizes, repaired so that it is never empty
    /// and never contains 0.
    pub fn steps(&self) -> RangeInclusive<usize> {
        let min = self.min_step.max(1);
        min..=self.max_step.max(min)
    }

    /// Walk a fresh lifecycle forward.
    pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Lifecycle {
        let mut lifecycle = Lifecycle::new();
        let advances = rng.gen_range(self.advances());
        for _ in 0..advances {
            let step = rng.gen_range(self.steps());
            if lifecycle.advance_by(step).is_err() {
                break;
            }
        }
        lifecycle
    }
}
