//! # Vehicle Movement Record
//!
//! One recorded transition of a vehicle from a source stage to a target
//! stage. The JSON shape uses the dashboard's camelCase field names:
//!
//! ```json
//! {
//!   "id": "MOV-00001",
//!   "licensePlate": "AB-123-CD",
//!   "vin": "WVWZZZ1JZXW000001",
//!   "contractNumber": "CTR-123456",
//!   "sourceStage": "Source In",
//!   "targetStage": "Fleet In",
//!   "movementDate": "2024-01-05",
//!   "action": "Update",
//!   "comment": "",
//!   "executionDate": "2024-01-04",
//!   "executedBy": "emma@company.com",
//!   "supplierData": { "supplier2": { "make": "Audi" } }
//! }
//! ```
//!
//! `supplierData` is omitted when absent.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VmtError;
use crate::identity::{ContractNumber, LicensePlate, MovementId, Vin};
use crate::stage::Stage;
use crate::supplier::{SupplierData, SupplierSlot};
use crate::temporal::CalendarDate;

/// The kind of change a movement record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAction {
    /// The vehicle entered the tracked population.
    Create,
    /// The vehicle's stage changed.
    Update,
    /// The vehicle left the tracked population.
    Delete,
}

impl MovementAction {
    /// All actions in display order.
    pub fn all_actions() -> &'static [MovementAction] {
        &[Self::Create, Self::Update, Self::Delete]
    }

    /// The wire and display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

impl std::fmt::Display for MovementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementAction {
    type Err = VmtError;

    /// Parse an action, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_actions()
            .iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| VmtError::Validation(format!("unknown action: {s:?}")))
    }
}

/// One stage transition event for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleMovement {
    /// Unique record identifier.
    pub id: MovementId,
    /// Licence plate at the time of the movement.
    pub license_plate: LicensePlate,
    /// Stable per-vehicle identity; the history grouping key.
    pub vin: Vin,
    /// Contract the vehicle is held under.
    pub contract_number: ContractNumber,
    /// Stage the vehicle left.
    pub source_stage: Stage,
    /// Stage the vehicle entered. Never equal to `source_stage`.
    pub target_stage: Stage,
    /// Day the movement took effect.
    pub movement_date: CalendarDate,
    /// Kind of change.
    pub action: MovementAction,
    /// Free-text remark; empty when none was given.
    #[serde(default)]
    pub comment: String,
    /// Day the movement was executed in the source system.
    pub execution_date: CalendarDate,
    /// Operator identifier (an e-mail address).
    pub executed_by: String,
    /// Upstream source data attached to this movement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_data: Option<SupplierData>,
}

impl VehicleMovement {
    /// The highest-priority supplier slot present on this movement.
    pub fn primary_supplier(&self) -> Option<SupplierSlot> {
        self.supplier_data
            .as_ref()
            .and_then(SupplierData::first_populated)
    }

    /// All supplier slots present on this movement, in priority order.
    pub fn supplier_slots(&self) -> Vec<SupplierSlot> {
        self.supplier_data
            .as_ref()
            .map(SupplierData::populated_slots)
            .unwrap_or_default()
    }

    /// Whether the target stage lies after the source stage in the
    /// canonical lifecycle.
    pub fn is_forward(&self) -> bool {
        self.target_stage > self.source_stage
    }

    /// Number of canonical stages skipped by this movement (0 for a move to
    /// the immediately following stage, and for backward moves).
    pub fn skipped_stages(&self) -> usize {
        self.target_stage
            .index()
            .saturating_sub(self.source_stage.index())
            .saturating_sub(1)
    }
}
