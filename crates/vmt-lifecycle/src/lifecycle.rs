//! # Vehicle Lifecycle
//!
//! Models a vehicle's forward progression through the canonical stage list.
//!
//! ## Progression
//!
//! ```text
//! Source In ──▶ Fleet In ──▶ Transport ──▶ Reception ──▶ Inspection ──▶ Repair
//!                                                                         │
//!     ┌───────────────────────────────────────────────────────────────────┘
//!     ▼
//! Ready For Sale ──▶ Remarketing ──▶ Sold ──▶ Pick Up ──▶ Completed ──▶ Archived
//! ```
//!
//! Any advance may skip ahead (`Fleet In ──▶ Inspection`). A lifecycle never
//! revisits a stage and never moves backwards, so the visited stages always
//! form a strictly increasing subsequence of the canonical list.

use serde::Serialize;
use thiserror::Error;

use vmt_core::{Stage, STAGE_COUNT};

use crate::transition::StageTransition;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised by lifecycle progression and transition validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Source and target of a transition are the same stage.
    #[error("source and target stage are both {stage}")]
    SameStage {
        /// The repeated stage.
        stage: Stage,
    },

    /// Attempted to move to a stage at or before the current one.
    #[error("cannot move backwards from {from} to {to}")]
    Backward {
        /// Current stage.
        from: Stage,
        /// Attempted target stage.
        to: Stage,
    },

    /// The lifecycle already reached the final stage.
    #[error("lifecycle is already at terminal stage {stage}")]
    AlreadyTerminal {
        /// The terminal stage.
        stage: Stage,
    },

    /// An advance would run past the end of the stage list.
    #[error("advancing {step} stages from {from} runs past the last stage")]
    Exhausted {
        /// Current stage.
        from: Stage,
        /// Requested step size.
        step: usize,
    },
}

// ─── Lifecycle ───────────────────────────────────────────────────────

/// A vehicle's stage progression and the transitions that produced it.
///
/// Serialize-only: a lifecycle is built by advancing, so `current` always
/// agrees with the last transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lifecycle {
    current: Stage,
    transitions: Vec<StageTransition>,
}

impl Lifecycle {
    /// Start a lifecycle at [`Stage::first()`].
    pub fn new() -> Self {
        Self {
            current: Stage::first(),
            transitions: Vec::new(),
        }
    }

    /// The stage the vehicle is in now.
    pub fn current(&self) -> Stage {
        self.current
    }

    /// Ordered log of every advance.
    pub fn transitions(&self) -> &[StageTransition] {
        &self.transitions
    }

    /// Every visited stage, starting with `Source In`.
    pub fn stages(&self) -> Vec<Stage> {
        std::iter::once(Stage::first())
            .chain(self.transitions.iter().map(StageTransition::target))
            .collect()
    }

    /// Whether the final stage has been reached.
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Move forward to `target`, skipping any stages in between.
    ///
    /// # Errors
    ///
    /// - [`LifecycleError::AlreadyTerminal`] once the last stage is reached.
    /// - [`LifecycleError::SameStage`] when `target` is the current stage.
    /// - [`LifecycleError::Backward`] when `target` precedes it.
    pub fn advance_to(&mut self, target: Stage) -> Result<StageTransition, LifecycleError> {
        if self.current.is_terminal() {
            return Err(LifecycleError::AlreadyTerminal {
                stage: self.current,
            });
        }
        let transition = StageTransition::new(self.current, target)?;
        if !transition.is_forward() {
            return Err(LifecycleError::Backward {
                from: self.current,
                to: target,
            });
        }
        self.record(transition);
        Ok(transition)
    }

    /// Move forward by `step` canonical positions.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::Exhausted`] when the step would pass the last
    /// stage, plus the errors of [`Lifecycle::advance_to`] (a `step` of 0 is
    /// a same-stage move).
    pub fn advance_by(&mut self, step: usize) -> Result<StageTransition, LifecycleError> {
        let index = self.current.index() + step;
        if index >= STAGE_COUNT {
            return Err(LifecycleError::Exhausted {
                from: self.current,
                step,
            });
        }
        match Stage::from_index(index) {
            Some(target) => self.advance_to(target),
            None => Err(LifecycleError::Exhausted {
                from: self.current,
                step,
            }),
        }
    }

    fn record(&mut self, transition: StageTransition) {
        self.transitions.push(transition);
        self.current = transition.target();
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
