//! # Generate CLI
//!
//! ```bash
//! vmt generate --count 15 --seed 42 --reference-date 2024-06-30 --pretty
//! vmt generate --output movements.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::CliConfig;
use crate::dataset::{write_json, GenerationArgs};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Write the dataset to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Emit a synthetic dataset as a JSON array, newest movement first.
pub fn run_generate(args: &GenerateArgs, config: &CliConfig) -> Result<u8> {
    let movements = args.generation.generate(config);
    write_json(&movements, args.output.as_deref(), args.pretty)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::{CalendarDate, VehicleMovement};

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let args = GenerateArgs {
            generation: GenerationArgs {
                count: Some(5),
                seed: Some(3),
                reference_date: Some(CalendarDate::parse("2024-06-30").unwrap()),
            },
            output: Some(path.clone()),
            pretty: false,
        };
        assert_eq!(run_generate(&args, &CliConfig::default()).unwrap(), 0);

        let written: Vec<VehicleMovement> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, args.generation.generate(&CliConfig::default()));
    }
}
