//! # Movement Generator
//!
//! Produces lifecycle-shaped movement histories for a fleet of synthetic
//! vehicles. Each vehicle gets:
//!
//! 1. a fresh identity (VIN unique within the run, plate, contract),
//! 2. a randomized stage walk starting at `Source In`,
//! 3. one movement per adjacent pair of visited stages.
//!
//! Dates are laid out backwards from the reference date: every day increment
//! is drawn first, then the whole lifecycle is shifted so that its final
//! movement lands within `max_anchor_offset` days before the reference date.
//! Nothing a vehicle did lies in the future.

use std::collections::HashSet;

use rand::Rng;

use vmt_core::{CalendarDate, MovementAction, MovementId, VehicleMovement};
use vmt_lifecycle::StageTransition;

use crate::config::GeneratorConfig;
use crate::supplier::random_supplier_data;
use crate::vehicle::VehicleIdentity;
use crate::vocabulary::{pick, OPERATOR_DOMAINS, OPERATOR_NAMES};

/// Seedable synthetic movement generator.
#[derive(Debug, Clone, Default)]
pub struct MovementGenerator {
    config: GeneratorConfig,
}

impl MovementGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the configured `default_count` of vehicles.
    pub fn generate_default<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<VehicleMovement> {
        self.generate(self.config.default_count, rng)
    }

    /// Generate the movements of `count` vehicles, newest first.
    ///
    /// The same RNG state and configuration always yield the same output.
    /// `count == 0` yields an empty collection.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<VehicleMovement> {
        let mut taken = HashSet::with_capacity(count);
        let mut movements = Vec::new();

        for _ in 0..count {
            let identity = VehicleIdentity::random(rng, &mut taken);
            self.vehicle_movements(&identity, rng, &mut movements);
        }

        // Stable: movements sharing a date keep generation order.
        movements.sort_by(|a, b| b.movement_date.cmp(&a.movement_date));

        tracing::debug!(
            vehicles = count,
            movements = movements.len(),
            reference_date = %self.config.reference_date,
            "generated synthetic movements"
        );
        movements
    }

    fn vehicle_movements<R: Rng + ?Sized>(
        &self,
        identity: &VehicleIdentity,
        rng: &mut R,
        out: &mut Vec<VehicleMovement>,
    ) {
        let lifecycle = self.config.walk.walk(rng);
        let transitions = lifecycle.transitions();

        let increments: Vec<u64> = transitions
            .iter()
            .map(|_| rng.gen_range(self.config.day_increments()))
            .collect();
        let span: u64 = increments.iter().sum();
        let offset = rng.gen_range(0..=self.config.max_anchor_offset);
        let mut date = self.config.reference_date.minus_days(span + offset);

        for (transition, increment) in transitions.iter().zip(increments) {
            date = date.plus_days(increment);
            let id = MovementId::from_sequence(out.len() + 1);
            out.push(self.movement(id, identity, *transition, date, rng));
        }
    }

    fn movement<R: Rng + ?Sized>(
        &self,
        id: MovementId,
        identity: &VehicleIdentity,
        transition: StageTransition,
        movement_date: CalendarDate,
        rng: &mut R,
    ) -> VehicleMovement {
        let lag = rng.gen_range(0..=self.config.max_execution_lag);
        let comment = if rng.gen_bool(self.config.comment_chance()) {
            format!(
                "Movement from {} to {}",
                transition.source(),
                transition.target()
            )
        } else {
            String::new()
        };
        let executed_by = format!(
            "{}@{}",
            pick(rng, OPERATOR_NAMES),
            pick(rng, OPERATOR_DOMAINS)
        );
        let supplier_data = random_supplier_data(
            rng,
            self.config.reference_date,
            self.config.supplier_chance(),
        );

        VehicleMovement {
            id,
            license_plate: identity.license_plate.clone(),
            vin: identity.vin.clone(),
            contract_number: identity.contract_number.clone(),
            source_stage: transition.source(),
            target_stage: transition.target(),
            movement_date,
            action: MovementAction::Update,
            comment,
            execution_date: movement_date.minus_days(lag),
            executed_by,
            supplier_data,
        }
    }
}
