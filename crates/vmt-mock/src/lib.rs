//! # vmt-mock — Synthetic Movement Generator
//!
//! Produces realistic-looking `VehicleMovement` datasets for demos and
//! tests: every synthetic vehicle walks forward through the canonical stage
//! list, skipping stages at random, and leaves one movement record per
//! transition.
//!
//! ## Entry points
//!
//! - [`generate_movements`]: thread-local RNG, reference date today.
//! - [`generate_seeded`]: reproducible output for a seed and reference date.
//! - [`MovementGenerator`]: full control over the [`GeneratorConfig`] and the
//!   RNG.
//!
//! ## Crate Policy
//!
//! - Generation is total: any `count` (including 0) yields a collection.
//! - Output is always sorted newest first.
//! - The wall clock is read only by [`generate_movements`] and
//!   [`GeneratorConfig::default`].

pub mod config;
pub mod generator;
pub mod supplier;
pub mod vehicle;
pub mod vocabulary;

pub use config::{GeneratorConfig, DEFAULT_VEHICLE_COUNT};
pub use generator::MovementGenerator;
pub use vehicle::VehicleIdentity;

use rand::rngs::StdRng;
use rand::SeedableRng;

use vmt_core::{CalendarDate, VehicleMovement};

/// Generate the movements of `count` vehicles with default settings.
pub fn generate_movements(count: usize) -> Vec<VehicleMovement> {
    MovementGenerator::default().generate(count, &mut rand::thread_rng())
}

/// Generate reproducibly: the same `seed` and `reference_date` always give
/// the same dataset.
pub fn generate_seeded(
    count: usize,
    seed: u64,
    reference_date: CalendarDate,
) -> Vec<VehicleMovement> {
    MovementGenerator::new(GeneratorConfig::with_reference_date(reference_date))
        .generate(count, &mut StdRng::seed_from_u64(seed))
}
