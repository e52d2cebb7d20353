//! # Movement Store
//!
//! Owns the in-memory movement collection the dashboard works on and
//! exposes the table query, the per-vehicle history, and the row edit.
//!
//! Records are held newest first. An edit replaces a record in place, so
//! the table keeps the row where it was even if its date changed.

use serde::{Deserialize, Serialize};

use vmt_core::{
    CalendarDate, LicensePlate, MovementAction, MovementId, Stage, VehicleMovement, Vin,
};
use vmt_lifecycle::StageTransition;

use crate::aggregate::{aggregate_history, MovementHistory};
use crate::error::HistoryError;
use crate::pagination::Page;
use crate::query::MovementQuery;

/// Changes to one movement. Absent fields are left as they are.
///
/// `id` and `vin` are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovementEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_stage: Option<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_stage: Option<Stage>,
    /// Must be in `AB-123-CD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MovementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl MovementEdit {
    /// Whether the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The movement with this edit applied.
    ///
    /// # Errors
    ///
    /// - [`HistoryError::Lifecycle`] when the resulting source and target
    ///   stage are the same.
    /// - [`HistoryError::Validation`] when the licence plate is malformed.
    pub fn applied_to(&self, movement: &VehicleMovement) -> Result<VehicleMovement, HistoryError> {
        let mut updated = movement.clone();

        let transition = StageTransition::new(
            self.source_stage.unwrap_or(movement.source_stage),
            self.target_stage.unwrap_or(movement.target_stage),
        )?;
        updated.source_stage = transition.source();
        updated.target_stage = transition.target();

        if let Some(plate) = &self.license_plate {
            updated.license_plate = LicensePlate::parse(plate.trim())?;
        }
        if let Some(action) = self.action {
            updated.action = action;
        }
        if let Some(date) = self.movement_date {
            updated.movement_date = date;
        }
        if let Some(date) = self.execution_date {
            updated.execution_date = date;
        }
        if let Some(comment) = &self.comment {
            updated.comment = comment.clone();
        }
        Ok(updated)
    }
}

/// Header data for a vehicle's history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub vin: Vin,
    /// Plate on the most recent movement.
    pub license_plate: LicensePlate,
    /// Target stage of the most recent movement.
    pub current_stage: Stage,
    pub movement_count: usize,
}

/// In-memory movement collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementStore {
    records: Vec<VehicleMovement>,
}

impl MovementStore {
    /// Take ownership of `records`, ordered newest first. Records sharing a
    /// date keep their relative order.
    pub fn new(mut records: Vec<VehicleMovement>) -> Self {
        records.sort_by(|a, b| b.movement_date.cmp(&a.movement_date));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VehicleMovement] {
        &self.records
    }

    pub fn into_records(self) -> Vec<VehicleMovement> {
        self.records
    }

    pub fn get(&self, id: &MovementId) -> Option<&VehicleMovement> {
        self.records.iter().find(|m| m.id == *id)
    }

    /// One page of the movement table.
    pub fn query(&self, query: &MovementQuery) -> Page<&VehicleMovement> {
        query.run(&self.records)
    }

    /// The history of one vehicle, recomputed from the current records.
    pub fn history(&self, vin: &Vin) -> MovementHistory {
        aggregate_history(&self.records, vin)
    }

    /// Summary of one vehicle, or `None` when it has no movements.
    pub fn vehicle(&self, vin: &Vin) -> Option<VehicleSummary> {
        let mut latest: Option<&VehicleMovement> = None;
        let mut movement_count = 0;
        for movement in self.records.iter().filter(|m| m.vin == *vin) {
            movement_count += 1;
            if latest.map_or(true, |l| movement.movement_date > l.movement_date) {
                latest = Some(movement);
            }
        }
        latest.map(|m| VehicleSummary {
            vin: m.vin.clone(),
            license_plate: m.license_plate.clone(),
            current_stage: m.target_stage,
            movement_count,
        })
    }

    /// Apply `edit` to the movement with `id`.
    ///
    /// A rejected edit leaves the store untouched.
    pub fn apply_edit(
        &mut self,
        id: &MovementId,
        edit: MovementEdit,
    ) -> Result<&VehicleMovement, HistoryError> {
        let index = self
            .records
            .iter()
            .position(|m| m.id == *id)
            .ok_or_else(|| HistoryError::NotFound { id: id.clone() })?;

        let updated = match edit.applied_to(&self.records[index]) {
            Ok(updated) => updated,
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "rejected movement edit");
                return Err(err);
            }
        };
        tracing::debug!(id = %id, "applied movement edit");
        self.records[index] = updated;
        Ok(&self.records[index])
    }
}
