//! # Supplier Data Slots
//!
//! A movement may carry data from up to four upstream sources. Each source
//! has its own vocabulary, so each slot is its own record type:
//!
//! | Slot | Source | Section title |
//! |------|--------|---------------|
//! | `supplier1` | administration (dates, parking, statuses) | Administrative Data |
//! | `supplier2` | vehicle master (make, model, location) | Vehicle Information |
//! | `supplier3` | transport (timing, status) | Transport Information |
//! | `supplier4` | inspection (status, location) | Inspection Details |
//!
//! Every field is an optional string, exactly as the sources deliver them.
//! Keys outside a slot's known vocabulary are kept in its `extra` map and
//! written back unchanged. A slot counts as populated when it is present,
//! even if all of its fields are empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::VmtError;

/// Declares a supplier record: the struct with explicit wire names and a
/// catch-all map for unknown keys, plus [`fields()`](Supplier1Data::fields)
/// listing the populated fields.
macro_rules! supplier_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $field:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[doc = concat!("`", $wire, "` as delivered by the source.")]
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+
            /// Keys the source sent that are not part of the vocabulary above.
            #[serde(flatten, default)]
            pub extra: BTreeMap<String, String>,
        }

        impl $name {
            /// Wire names of every field, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$($wire),+];

            /// Populated fields as `(wire name, value)` pairs: known fields in
            /// declaration order, then `extra` keys in sorted order.
            pub fn fields(&self) -> Vec<(&str, &str)> {
                let mut out = Vec::new();
                $(
                    if let Some(value) = self.$field.as_deref() {
                        out.push(($wire, value));
                    }
                )+
                out.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                out
            }
        }
    };
}

supplier_record! {
    /// Administrative source: registration, planning, parking, and
    /// remarketing dates and statuses.
    pub struct Supplier1Data {
        first_registration_date => "firstRegistrationDate",
        co2 => "co2",
        created_date => "createdDate",
        modified_date => "modifiedDate",
        file_type => "fileType",
        sub_type => "subType",
        client_available_start_date => "clientAvailableStartDate",
        transport_door => "transportDoor",
        reception_date => "receptionDate",
        planning_date => "planningDate",
        date_cmr => "dateCMR",
        inspection_date => "inspectionDate",
        blocking_type => "blockingType",
        parking_location => "parkingLocation",
        parking_place => "parkingPlace",
        administration_status => "administrationStatus",
        administration_status_date => "administrationStatusDate",
        insurance_status => "insuranceStatus",
        insurance_status_date => "insuranceStatusDate",
        remark_log => "remarkLOG",
        contract_file_number => "contractFileNumber",
        start_date => "startDate",
        end_date => "endDate",
        origin => "origin",
        client => "client",
        logistic_status => "logisticStatus",
        logistic_status_date => "logisticStatusDate",
        pick_up_date => "pickUpDate",
        completed_date => "completedDate",
        ready_for_sale_date => "readyForSaleDate",
        old_opdracht_id => "oldOpdrachtId",
        dossier_number => "dossierNumber",
        remarketing_status => "remarketingStatus",
        remarketing_status_date => "remarketingStatusDate",
        remarketing_date => "remarketingDate",
        release_date => "releaseDate",
        date_of_available => "dateOfAvailable",
        date_of_deletion => "dateOfDeletion",
        assign_date => "assignDate",
        performed_on_date => "performedOnDate",
        date_sent => "dateSent",
    }
}

supplier_record! {
    /// Vehicle master source: make, model, mileage, and depot gate events.
    pub struct Supplier2Data {
        status => "status",
        km => "km",
        herkomst => "herkomst",
        make => "make",
        vehicle_type => "type",
        model => "model",
        color => "color",
        location => "location",
        address => "address",
        first_gate_in => "firstGateIn",
        gate_in => "gateIn",
        gate_out => "gateOut",
    }
}

supplier_record! {
    /// Transport source: job status and loading/unloading times.
    pub struct Supplier3Data {
        status => "status",
        transport_type => "type",
        sub_type => "subType",
        loading_time => "loadingTime",
        unloading_time => "unloadingTime",
        status_date => "statusDate",
        created_at => "createdAt",
        updated_at => "updatedAt",
    }
}

supplier_record! {
    /// Inspection source: dossier, status, mileage, and parking location.
    pub struct Supplier4Data {
        inspection_dossier_id => "inspectionDossierId",
        inspection_status => "inspectionStatus",
        inspection_date => "inspectionDate",
        model => "model",
        log_date => "logDate",
        version => "version",
        progress_direction => "progressDirection",
        original_status => "originalStatus",
        progress_status => "progressStatus",
        inspection_mileage => "inspectionMileage",
        location_address => "locationAddress",
        parking_space => "parkingSpace",
    }
}

/// The four optional supplier slots attached to a movement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierData {
    /// Administrative source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier1: Option<Supplier1Data>,
    /// Vehicle master source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier2: Option<Supplier2Data>,
    /// Transport source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier3: Option<Supplier3Data>,
    /// Inspection source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier4: Option<Supplier4Data>,
}

/// Identifies one of the four supplier slots.
///
/// The derived ordering is the classification priority:
/// `Supplier1 < Supplier2 < Supplier3 < Supplier4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupplierSlot {
    /// `supplier1`
    #[serde(rename = "supplier1")]
    Supplier1,
    /// `supplier2`
    #[serde(rename = "supplier2")]
    Supplier2,
    /// `supplier3`
    #[serde(rename = "supplier3")]
    Supplier3,
    /// `supplier4`
    #[serde(rename = "supplier4")]
    Supplier4,
}

impl SupplierSlot {
    /// All slots in priority order.
    pub fn all_slots() -> &'static [SupplierSlot] {
        &[Self::Supplier1, Self::Supplier2, Self::Supplier3, Self::Supplier4]
    }

    /// Wire key of the slot (`supplier1` ... `supplier4`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supplier1 => "supplier1",
            Self::Supplier2 => "supplier2",
            Self::Supplier3 => "supplier3",
            Self::Supplier4 => "supplier4",
        }
    }

    /// Human-readable source name ("Supplier 1").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Supplier1 => "Supplier 1",
            Self::Supplier2 => "Supplier 2",
            Self::Supplier3 => "Supplier 3",
            Self::Supplier4 => "Supplier 4",
        }
    }

    /// Title of the slot's section in the row detail view.
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Supplier1 => "Administrative Data",
            Self::Supplier2 => "Vehicle Information",
            Self::Supplier3 => "Transport Information",
            Self::Supplier4 => "Inspection Details",
        }
    }
}

impl std::fmt::Display for SupplierSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierSlot {
    type Err = VmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::all_slots()
            .iter()
            .copied()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| VmtError::Validation(format!("unknown supplier slot: {s:?}")))
    }
}

impl SupplierData {
    /// Whether the given slot is present.
    pub fn has(&self, slot: SupplierSlot) -> bool {
        match slot {
            SupplierSlot::Supplier1 => self.supplier1.is_some(),
            SupplierSlot::Supplier2 => self.supplier2.is_some(),
            SupplierSlot::Supplier3 => self.supplier3.is_some(),
            SupplierSlot::Supplier4 => self.supplier4.is_some(),
        }
    }

    /// Present slots, in priority order.
    pub fn populated_slots(&self) -> Vec<SupplierSlot> {
        SupplierSlot::all_slots()
            .iter()
            .copied()
            .filter(|slot| self.has(*slot))
            .collect()
    }

    /// The highest-priority present slot, if any.
    pub fn first_populated(&self) -> Option<SupplierSlot> {
        SupplierSlot::all_slots()
            .iter()
            .copied()
            .find(|slot| self.has(*slot))
    }

    /// Whether no slot is present.
    pub fn is_empty(&self) -> bool {
        self.first_populated().is_none()
    }

    /// Populated fields of one slot; empty when the slot is absent.
    pub fn slot_fields(&self, slot: SupplierSlot) -> Vec<(&str, &str)> {
        match slot {
            SupplierSlot::Supplier1 => self.supplier1.as_ref().map(|d| d.fields()),
            SupplierSlot::Supplier2 => self.supplier2.as_ref().map(|d| d.fields()),
            SupplierSlot::Supplier3 => self.supplier3.as_ref().map(|d| d.fields()),
            SupplierSlot::Supplier4 => self.supplier4.as_ref().map(|d| d.fields()),
        }
        .unwrap_or_default()
    }
}
