//! # Movement History Aggregation
//!
//! Builds the per-vehicle history view: every movement of one VIN, newest
//! first, plus the same movements partitioned by the upstream source that
//! supplied them.
//!
//! ## Supplier key
//!
//! A movement belongs to exactly one group: the first populated supplier
//! slot in priority order `supplier1 > supplier2 > supplier3 > supplier4`,
//! or [`SupplierKey::Unknown`] when it carries no supplier data. A movement
//! with both `supplier1` and `supplier2` is grouped under `supplier1` only.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vmt_core::{SupplierSlot, VehicleMovement, Vin, VmtError};

/// History group key: a supplier slot, or `unknown`.
///
/// The derived ordering puts the four slots in priority order and
/// `Unknown` last, which is also the display order of the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupplierKey {
    #[serde(rename = "supplier1")]
    Supplier1,
    #[serde(rename = "supplier2")]
    Supplier2,
    #[serde(rename = "supplier3")]
    Supplier3,
    #[serde(rename = "supplier4")]
    Supplier4,
    #[serde(rename = "unknown")]
    Unknown,
}

impl SupplierKey {
    /// All keys in display order.
    pub fn all_keys() -> &'static [SupplierKey] {
        &[
            Self::Supplier1,
            Self::Supplier2,
            Self::Supplier3,
            Self::Supplier4,
            Self::Unknown,
        ]
    }

    /// Classify a movement.
    pub fn of(movement: &VehicleMovement) -> Self {
        movement
            .primary_supplier()
            .map(Self::from)
            .unwrap_or(Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supplier1 => "supplier1",
            Self::Supplier2 => "supplier2",
            Self::Supplier3 => "supplier3",
            Self::Supplier4 => "supplier4",
            Self::Unknown => "unknown",
        }
    }

    /// Name shown on the history timeline ("Supplier 1", "Unknown Source").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Supplier1 => "Supplier 1",
            Self::Supplier2 => "Supplier 2",
            Self::Supplier3 => "Supplier 3",
            Self::Supplier4 => "Supplier 4",
            Self::Unknown => "Unknown Source",
        }
    }

    /// The slot this key stands for; `None` for `Unknown`.
    pub fn slot(&self) -> Option<SupplierSlot> {
        match self {
            Self::Supplier1 => Some(SupplierSlot::Supplier1),
            Self::Supplier2 => Some(SupplierSlot::Supplier2),
            Self::Supplier3 => Some(SupplierSlot::Supplier3),
            Self::Supplier4 => Some(SupplierSlot::Supplier4),
            Self::Unknown => None,
        }
    }
}

impl From<SupplierSlot> for SupplierKey {
    fn from(slot: SupplierSlot) -> Self {
        match slot {
            SupplierSlot::Supplier1 => Self::Supplier1,
            SupplierSlot::Supplier2 => Self::Supplier2,
            SupplierSlot::Supplier3 => Self::Supplier3,
            SupplierSlot::Supplier4 => Self::Supplier4,
        }
    }
}

impl std::fmt::Display for SupplierKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierKey {
    type Err = VmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all_keys()
            .iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| VmtError::Validation(format!("unknown supplier key: {s:?}")))
    }
}

/// Shorthand for [`SupplierKey::of`].
pub fn supplier_key(movement: &VehicleMovement) -> SupplierKey {
    SupplierKey::of(movement)
}

/// One vehicle's history, ready for timeline display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementHistory {
    /// Every movement of the vehicle, newest first.
    pub all: Vec<VehicleMovement>,
    /// The same movements partitioned by supplier key. Only non-empty
    /// groups are present; each group is newest first.
    pub groups: BTreeMap<SupplierKey, Vec<VehicleMovement>>,
}

impl MovementHistory {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Movements of one group; empty when the group is absent.
    pub fn group(&self, key: SupplierKey) -> &[VehicleMovement] {
        self.groups.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Collect the history of `vin` from `records`.
///
/// Matching is exact. Sorting is stable, so movements sharing a date keep
/// their input order. An unknown VIN yields an empty history.
pub fn aggregate_history<'a, I>(records: I, vin: &Vin) -> MovementHistory
where
    I: IntoIterator<Item = &'a VehicleMovement>,
{
    let mut all: Vec<VehicleMovement> = records
        .into_iter()
        .filter(|m| m.vin == *vin)
        .cloned()
        .collect();
    all.sort_by(|a, b| b.movement_date.cmp(&a.movement_date));

    let mut groups: BTreeMap<SupplierKey, Vec<VehicleMovement>> = BTreeMap::new();
    for movement in &all {
        groups
            .entry(SupplierKey::of(movement))
            .or_default()
            .push(movement.clone());
    }

    tracing::debug!(
        vin = %vin,
        movements = all.len(),
        groups = groups.len(),
        "aggregated movement history"
    );
    MovementHistory { all, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::{
        CalendarDate, ContractNumber, LicensePlate, MovementAction, MovementId, Stage,
        Supplier1Data, Supplier2Data, Supplier3Data, SupplierData,
    };

    fn movement(id: &str, vin: &str, date: &str, supplier_data: Option<SupplierData>) -> VehicleMovement {
        VehicleMovement {
            id: MovementId::new(id),
            license_plate: LicensePlate::new("AB-123-CD"),
            vin: Vin::new(vin),
            contract_number: ContractNumber::new("CTR-123456"),
            source_stage: Stage::FleetIn,
            target_stage: Stage::Inspection,
            movement_date: CalendarDate::parse(date).unwrap(),
            action: MovementAction::Update,
            comment: String::new(),
            execution_date: CalendarDate::parse(date).unwrap(),
            executed_by: "emma@company.com".to_string(),
            supplier_data,
        }
    }

    fn slot1() -> Option<SupplierData> {
        Some(SupplierData {
            supplier1: Some(Supplier1Data {
                co2: Some("1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    fn slot2() -> Option<SupplierData> {
        Some(SupplierData {
            supplier2: Some(Supplier2Data {
                km: Some("1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_two_record_example() {
        let records = vec![
            movement("m1", "A", "2024-01-01", slot1()),
            movement("m2", "A", "2024-01-05", slot2()),
        ];
        let history = aggregate_history(&records, &Vin::new("A"));

        let ids: Vec<&str> = history.all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
        assert_eq!(history.groups.len(), 2);
        assert_eq!(history.group(SupplierKey::Supplier1)[0].id.as_str(), "m1");
        assert_eq!(history.group(SupplierKey::Supplier2)[0].id.as_str(), "m2");
    }

    #[test]
    fn test_no_such_vin_is_empty() {
        let records = vec![movement("m1", "A", "2024-01-01", slot1())];
        let history = aggregate_history(&records, &Vin::new("NO-SUCH-VIN"));
        assert!(history.is_empty());
        assert!(history.groups.is_empty());
        assert_eq!(
            serde_json::to_string(&history).unwrap(),
            r#"{"all":[],"groups":{}}"#
        );
    }

    #[test]
    fn test_vin_match_is_exact() {
        let records = vec![
            movement("m1", "abc", "2024-01-01", None),
            movement("m2", "ABC", "2024-01-02", None),
        ];
        let history = aggregate_history(&records, &Vin::new("ABC"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.all[0].id.as_str(), "m2");
    }

    #[test]
    fn test_priority_and_unknown() {
        let both = Some(SupplierData {
            supplier3: Some(Supplier3Data::default()),
            supplier2: Some(Supplier2Data::default()),
            ..Default::default()
        });
        let records = vec![
            movement("m1", "V", "2024-02-01", both),
            movement("m2", "V", "2024-02-02", None),
            movement("m3", "V", "2024-02-03", Some(SupplierData::default())),
        ];
        let history = aggregate_history(&records, &Vin::new("V"));
        assert_eq!(history.group(SupplierKey::Supplier2).len(), 1);
        assert!(history.group(SupplierKey::Supplier3).is_empty());
        let unknown: Vec<&str> = history
            .group(SupplierKey::Unknown)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(unknown, vec!["m3", "m2"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let records = vec![
            movement("first", "V", "2024-03-01", None),
            movement("second", "V", "2024-03-01", None),
        ];
        let history = aggregate_history(&records, &Vin::new("V"));
        let ids: Vec<&str> = history.all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_groups_serialize_with_wire_keys() {
        let records = vec![
            movement("m1", "V", "2024-01-01", slot2()),
            movement("m2", "V", "2024-01-02", None),
        ];
        let json = serde_json::to_value(aggregate_history(&records, &Vin::new("V"))).unwrap();
        let groups = json["groups"].as_object().unwrap();
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["supplier2", "unknown"]);
    }

    #[test]
    fn test_supplier_key_names() {
        assert_eq!(SupplierKey::Unknown.display_name(), "Unknown Source");
        assert_eq!(SupplierKey::Supplier3.display_name(), "Supplier 3");
        assert_eq!("Supplier2".parse::<SupplierKey>().unwrap(), SupplierKey::Supplier2);
        assert_eq!("unknown".parse::<SupplierKey>().unwrap(), SupplierKey::Unknown);
        assert!("supplier9".parse::<SupplierKey>().is_err());
        assert_eq!(SupplierKey::Unknown.slot(), None);
        assert_eq!(
            SupplierKey::from(SupplierSlot::Supplier4).slot(),
            Some(SupplierSlot::Supplier4)
        );
    }
}
