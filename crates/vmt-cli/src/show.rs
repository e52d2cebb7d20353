//! # Show CLI
//!
//! The expanded row view of one movement: vehicle details, then one section
//! per populated supplier slot.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;

use vmt_core::{MovementId, SupplierSlot, VehicleMovement};
use vmt_history::MovementStore;

use crate::config::CliConfig;
use crate::dataset::{write_json, DatasetArgs};

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Movement id, e.g. MOV-00001.
    #[arg(long)]
    pub id: String,

    /// Print the movement as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_show(args: &ShowArgs, config: &CliConfig) -> Result<u8> {
    let store = MovementStore::new(args.dataset.load(config)?);
    let id = MovementId::new(args.id.trim());
    let movement = store
        .get(&id)
        .with_context(|| format!("movement not found: {id}"))?;

    if args.json {
        write_json(movement, None, true)?;
    } else {
        print!("{}", render_detail(movement));
    }
    Ok(0)
}

/// Render the detail view.
pub fn render_detail(m: &VehicleMovement) -> String {
    let details = [
        ("ID", m.id.to_string()),
        ("License Plate", m.license_plate.to_string()),
        ("VIN", m.vin.to_string()),
        ("Contract Number", m.contract_number.to_string()),
        ("Source Stage", m.source_stage.to_string()),
        ("Target Stage", m.target_stage.to_string()),
        ("Movement Date", m.movement_date.to_string()),
        ("Execution Date", m.execution_date.to_string()),
        ("Action", m.action.to_string()),
        ("Executed By", m.executed_by.clone()),
        ("Comment", m.comment.clone()),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "Vehicle Details");
    for (label, value) in details {
        let value = if value.is_empty() { "-".to_string() } else { value };
        let _ = writeln!(out, "  {label:<16} {value}");
    }

    let Some(data) = m.supplier_data.as_ref() else {
        let _ = writeln!(out);
        let _ = writeln!(out, "No supplier data.");
        return out;
    };
    for slot in SupplierSlot::all_slots() {
        if !data.has(*slot) {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", slot.section_title(), slot.display_name());
        let fields = data.slot_fields(*slot);
        if fields.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for (name, value) in fields {
            let _ = writeln!(out, "  {name:<26} {value}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::{CalendarDate, Supplier2Data, Supplier4Data, SupplierData};
    use vmt_mock::generate_seeded;

    fn sample() -> VehicleMovement {
        generate_seeded(1, 2, CalendarDate::parse("2024-06-30").unwrap())
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_detail_without_supplier_data() {
        let mut m = sample();
        m.supplier_data = None;
        m.comment = String::new();
        let text = render_detail(&m);
        assert!(text.starts_with("Vehicle Details\n"));
        assert!(text.contains(&format!("  VIN              {}", m.vin)));
        assert!(text.contains("  Comment          -"));
        assert!(text.ends_with("No supplier data.\n"));
    }

    #[test]
    fn test_detail_sections_in_slot_order() {
        let mut m = sample();
        m.supplier_data = Some(SupplierData {
            supplier4: Some(Supplier4Data {
                inspection_status: Some("Passed".into()),
                ..Default::default()
            }),
            supplier2: Some(Supplier2Data::default()),
            ..Default::default()
        });
        let text = render_detail(&m);
        let vehicle = text.find("Vehicle Information (Supplier 2)").unwrap();
        let inspection = text.find("Inspection Details (Supplier 4)").unwrap();
        assert!(vehicle < inspection);
        assert!(text.contains("  (empty)"));
        assert!(text.contains("  inspectionStatus           Passed"));
        assert!(!text.contains("Administrative Data"));
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "[]").unwrap();
        let args = ShowArgs {
            dataset: DatasetArgs {
                input: Some(path),
                ..DatasetArgs::default()
            },
            id: "MOV-99999".into(),
            json: false,
        };
        let err = run_show(&args, &CliConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "movement not found: MOV-99999");
    }
}
