//! # History CLI
//!
//! One vehicle's timeline, grouped by the supplier that delivered each
//! movement.
//!
//! ```bash
//! vmt history --seed 42 --vin WVWZZZ1JZXW000001
//! vmt history --input movements.json --vin WVWZZZ1JZXW000001 --supplier supplier2
//! ```

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use vmt_core::{VehicleMovement, Vin};
use vmt_history::{MovementHistory, MovementStore, SupplierKey, VehicleSummary};

use crate::config::CliConfig;
use crate::dataset::{write_json, DatasetArgs};

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Vehicle identification number.
    #[arg(long)]
    pub vin: String,

    /// Show only one group (supplier1..supplier4, unknown).
    #[arg(long)]
    pub supplier: Option<SupplierKey>,

    /// Print the history as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_history(args: &HistoryArgs, config: &CliConfig) -> Result<u8> {
    let store = MovementStore::new(args.dataset.load(config)?);
    let vin = Vin::new(args.vin.trim());
    let history = store.history(&vin);

    if args.json {
        match args.supplier {
            Some(key) => write_json(history.group(key), None, true)?,
            None => write_json(&history, None, true)?,
        }
    } else {
        let summary = store.vehicle(&vin);
        print!("{}", render_history(&vin, summary.as_ref(), &history, args.supplier));
    }
    Ok(0)
}

/// Render the timeline: a header, then one section per non-empty group in
/// supplier order (or just the requested group).
pub fn render_history(
    vin: &Vin,
    summary: Option<&VehicleSummary>,
    history: &MovementHistory,
    only: Option<SupplierKey>,
) -> String {
    let mut out = String::new();
    match summary {
        Some(s) => {
            let _ = writeln!(out, "Vehicle History: {} ({})", s.vin, s.license_plate);
            let _ = writeln!(
                out,
                "Current stage: {}  Movements: {}",
                s.current_stage, s.movement_count
            );
        }
        None => {
            let _ = writeln!(out, "Vehicle History: {vin}");
        }
    }

    if history.is_empty() {
        let _ = writeln!(out, "No movement history found for this vehicle.");
        return out;
    }

    let keys: Vec<SupplierKey> = match only {
        Some(key) => vec![key],
        None => history.groups.keys().copied().collect(),
    };
    for key in keys {
        let group = history.group(key);
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", key.display_name(), group.len());
        if group.is_empty() {
            let _ = writeln!(out, "  No movements from this source.");
        }
        for m in group {
            let _ = writeln!(out, "  {}", timeline_entry(m));
        }
    }
    out
}

fn timeline_entry(m: &VehicleMovement) -> String {
    let mut entry = format!(
        "{}  {} -> {}  {}  by {}",
        m.movement_date, m.source_stage, m.target_stage, m.action, m.executed_by
    );
    if !m.comment.is_empty() {
        let _ = write!(entry, "  \"{}\"", m.comment);
    }
    entry
}
