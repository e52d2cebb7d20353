//! # vmt-cli — CLI Tool for the Vehicle Movement Tracker
//!
//! Provides the `vmt` command-line interface over the movement generator
//! and the history/query core.
//!
//! ## Subcommands
//!
//! - `vmt generate`: Emit a synthetic movement dataset as JSON.
//! - `vmt list`: The movement table: search, recency filter, pagination.
//! - `vmt history`: One vehicle's timeline grouped by supplier.
//! - `vmt show`: Row detail view with supplier sections.
//! - `vmt edit`: Apply a validated edit to a dataset file.
//!
//! Every subcommand that reads movements accepts either `--input FILE` or
//! the generation flags, so the whole dashboard flow can be driven from a
//! seed:
//!
//! ```bash
//! vmt list --seed 42 --reference-date 2024-06-30 --filter week
//! vmt history --seed 42 --reference-date 2024-06-30 --vin <VIN>
//! ```

pub mod config;
pub mod dataset;
pub mod edit;
pub mod generate;
pub mod history;
pub mod list;
pub mod show;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<config::CliConfig>();
        let _ = std::any::type_name::<dataset::DatasetArgs>();
        let _ = std::any::type_name::<edit::EditArgs>();
        let _ = std::any::type_name::<generate::GenerateArgs>();
        let _ = std::any::type_name::<history::HistoryArgs>();
        let _ = std::any::type_name::<list::ListArgs>();
        let _ = std::any::type_name::<show::ShowArgs>();
    }
}
