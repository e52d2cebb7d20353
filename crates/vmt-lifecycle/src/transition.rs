//! # Stage Transitions
//!
//! A `StageTransition` is the validated `(source, target)` pair carried by a
//! movement record. Construction rejects a transition onto the same stage;
//! direction is not constrained here because edited records may move a
//! vehicle backwards. Forward-only progression is the lifecycle's rule.

use serde::Serialize;

use vmt_core::Stage;

use crate::lifecycle::LifecycleError;

/// A move from one stage to a different stage. Only [`StageTransition::new`]
/// constructs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StageTransition {
    source: Stage,
    target: Stage,
}

impl StageTransition {
    /// Validate a `source → target` pair.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::SameStage`] when `source == target`.
    pub fn new(source: Stage, target: Stage) -> Result<Self, LifecycleError> {
        if source == target {
            return Err(LifecycleError::SameStage { stage: source });
        }
        Ok(Self { source, target })
    }

    /// Stage the vehicle leaves.
    pub fn source(&self) -> Stage {
        self.source
    }

    /// Stage the vehicle enters.
    pub fn target(&self) -> Stage {
        self.target
    }

    /// Whether the target lies later in the canonical order.
    pub fn is_forward(&self) -> bool {
        self.target > self.source
    }

    /// Canonical stages jumped over (0 for adjacent or backward moves).
    pub fn skipped(&self) -> usize {
        self.target
            .index()
            .saturating_sub(self.source.index())
            .saturating_sub(1)
    }
}

impl std::fmt::Display for StageTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
