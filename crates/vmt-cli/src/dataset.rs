//! Dataset sources shared by the subcommands.
//!
//! A dataset is either read from a JSON file (`--input`) or generated on the
//! fly (`--count`, `--seed`, `--reference-date`). Files hold a plain JSON
//! array of movements.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use vmt_core::{CalendarDate, VehicleMovement};
use vmt_mock::MovementGenerator;

use crate::config::CliConfig;

/// Synthetic generation parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Number of vehicles to generate.
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// The "today" of the dataset (YYYY-MM-DD). Defaults to the current date.
    #[arg(long)]
    pub reference_date: Option<CalendarDate>,
}

impl GenerationArgs {
    pub fn reference_date(&self) -> CalendarDate {
        self.reference_date.unwrap_or_else(CalendarDate::today)
    }

    /// Generate a dataset, filling unset flags from `config`.
    pub fn generate(&self, config: &CliConfig) -> Vec<VehicleMovement> {
        let reference_date = self.reference_date();
        let mut generator_config = config.generator_config(reference_date);
        if let Some(count) = self.count {
            generator_config.default_count = count;
        }
        let count = generator_config.default_count;
        let generator = MovementGenerator::new(generator_config);
        match self.seed.or(config.seed) {
            Some(seed) => {
                tracing::info!(count, seed, %reference_date, "generating seeded dataset");
                generator.generate_default(&mut StdRng::seed_from_u64(seed))
            }
            None => {
                tracing::info!(count, %reference_date, "generating dataset");
                generator.generate_default(&mut rand::thread_rng())
            }
        }
    }
}

/// Where a subcommand gets its movements from.
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Read movements from a JSON file instead of generating them.
    #[arg(long, conflicts_with_all = ["count", "seed"])]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

impl DatasetArgs {
    pub fn load(&self, config: &CliConfig) -> Result<Vec<VehicleMovement>> {
        match &self.input {
            Some(path) => read_movements(path),
            None => Ok(self.generation.generate(config)),
        }
    }

    /// The date recency filters are evaluated against.
    pub fn reference_date(&self) -> CalendarDate {
        self.generation.reference_date()
    }
}

/// Read a JSON array of movements.
pub fn read_movements(path: &Path) -> Result<Vec<VehicleMovement>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;
    let movements: Vec<VehicleMovement> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))?;
    tracing::debug!(path = %path.display(), movements = movements.len(), "loaded dataset");
    Ok(movements)
}

/// Write `value` as JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
