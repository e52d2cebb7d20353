//! # vmt-lifecycle — Vehicle Lifecycle Progression
//!
//! Models how a vehicle moves through the canonical [`Stage`] list.
//!
//! ## Components
//!
//! - **Transition** (`transition.rs`): a validated `source → target` pair.
//!   The only structural rule of a movement is that the two stages differ.
//!
//! - **Lifecycle** (`lifecycle.rs`): a forward-only progression starting at
//!   `Source In`. Stages may be skipped; they may never repeat or go back.
//!   Every advance is recorded as a transition.
//!
//! - **Walk** (`walk.rs`): the randomized cursor walk that drives a
//!   lifecycle forward by 1–3 stages at a time, used to synthesize
//!   plausible, irregular histories.
//!
//! ## Design
//!
//! A lifecycle is an enum-indexed progression with runtime-validated
//! advances, not a typestate machine. Twelve stages with arbitrary forward
//! skips would need a type per stage and an impl per reachable pair for no
//! gain in safety: the invariant (strictly increasing stage index) is a
//! single comparison.
//!
//! [`Stage`]: vmt_core::Stage

pub mod lifecycle;
pub mod transition;
pub mod walk;

pub use lifecycle::{Lifecycle, LifecycleError};
pub use transition::StageTransition;
pub use walk::StageWalk;
