//! # Edit CLI
//!
//! Apply a row edit to a dataset file and emit the updated dataset.
//!
//! ```bash
//! vmt edit --input movements.json --id MOV-00003 --target-stage Sold \
//!     --comment "sold at auction" --output movements.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use vmt_core::{CalendarDate, MovementAction, MovementId, Stage};
use vmt_history::{MovementEdit, MovementStore};

use crate::config::CliConfig;
use crate::dataset::{read_movements, write_json};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Dataset file to edit.
    #[arg(long)]
    pub input: PathBuf,

    /// Id of the movement to change.
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub source_stage: Option<Stage>,

    #[arg(long)]
    pub target_stage: Option<Stage>,

    /// New plate in AB-123-CD form.
    #[arg(long)]
    pub license_plate: Option<String>,

    #[arg(long)]
    pub action: Option<MovementAction>,

    #[arg(long)]
    pub movement_date: Option<CalendarDate>,

    #[arg(long)]
    pub execution_date: Option<CalendarDate>,

    /// New comment; pass an empty string to clear it.
    #[arg(long)]
    pub comment: Option<String>,

    /// Write the updated dataset here instead of stdout. May equal --input.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

impl EditArgs {
    pub fn edit(&self) -> MovementEdit {
        MovementEdit {
            source_stage: self.source_stage,
            target_stage: self.target_stage,
            license_plate: self.license_plate.clone(),
            action: self.action,
            movement_date: self.movement_date,
            execution_date: self.execution_date,
            comment: self.comment.clone(),
        }
    }
}

/// Edit one movement and write the whole dataset back.
///
/// Every input comes from `args`; `_config` is accepted so all handlers
/// share one dispatch signature.
pub fn run_edit(args: &EditArgs, _config: &CliConfig) -> Result<u8> {
    let edit = args.edit();
    if edit.is_empty() {
        bail!("nothing to change: pass at least one field flag");
    }

    let mut store = MovementStore::new(read_movements(&args.input)?);
    let id = MovementId::new(args.id.trim());
    let updated = store
        .apply_edit(&id, edit)
        .with_context(|| format!("failed to edit movement {id}"))?;
    tracing::info!(
        id = %updated.id,
        source = %updated.source_stage,
        target = %updated.target_stage,
        "movement updated"
    );

    write_json(store.records(), args.output.as_deref(), args.pretty)?;
    Ok(0)
}
