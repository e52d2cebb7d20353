//! # vmt CLI entry point
//!
//! Parses command-line arguments, installs logging, loads the optional
//! config file, and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vmt_cli::config::CliConfig;
use vmt_cli::edit::{run_edit, EditArgs};
use vmt_cli::generate::{run_generate, GenerateArgs};
use vmt_cli::history::{run_history, HistoryArgs};
use vmt_cli::list::{run_list, ListArgs};
use vmt_cli::show::{run_show, ShowArgs};

/// Vehicle movement tracker.
///
/// Generates synthetic vehicle stage-movement datasets and answers the
/// dashboard's questions about them: the filtered movement table, a
/// vehicle's supplier-grouped history, and single-row details.
#[derive(Parser, Debug)]
#[command(name = "vmt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./vmt.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic movement dataset.
    Generate(GenerateArgs),

    /// List movements with search, recency filter, and pagination.
    List(ListArgs),

    /// Show one vehicle's movement history grouped by supplier.
    History(HistoryArgs),

    /// Show the details of one movement.
    Show(ShowArgs),

    /// Edit one movement in a dataset file.
    Edit(EditArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("vmt CLI starting");

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Generate(args) => run_generate(args, &config),
        Commands::List(args) => run_list(args, &config),
        Commands::History(args) => run_history(args, &config),
        Commands::Show(args) => run_show(args, &config),
        Commands::Edit(args) => run_edit(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::{CalendarDate, MovementAction, Stage};
    use vmt_history::{RecencyFilter, SupplierKey};

    #[test]
    fn cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["vmt", "generate"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert!(args.generation.count.is_none());
            assert!(args.generation.seed.is_none());
            assert!(args.generation.reference_date.is_none());
            assert!(args.output.is_none());
            assert!(!args.pretty);
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_all_options() {
        let cli = Cli::try_parse_from([
            "vmt",
            "generate",
            "--count",
            "20",
            "--seed",
            "42",
            "--reference-date",
            "2024-06-30",
            "--output",
            "out.json",
            "--pretty",
        ])
        .unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.generation.count, Some(20));
            assert_eq!(args.generation.seed, Some(42));
            assert_eq!(
                args.generation.reference_date,
                Some(CalendarDate::parse("2024-06-30").unwrap())
            );
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.pretty);
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_bad_date_errors() {
        let result = Cli::try_parse_from(["vmt", "generate", "--reference-date", "30/06/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_list_defaults() {
        let cli = Cli::try_parse_from(["vmt", "list"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.filter, RecencyFilter::All);
            assert_eq!(args.page, 1);
            assert!(args.page_size.is_none());
            assert!(args.search.is_none());
            assert!(args.dataset.input.is_none());
            assert!(!args.json);
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_parse_list_with_query() {
        let cli = Cli::try_parse_from([
            "vmt",
            "list",
            "--input",
            "movements.json",
            "--search",
            "fleet",
            "--filter",
            "week",
            "--page",
            "2",
            "--page-size",
            "5",
            "--json",
        ])
        .unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.dataset.input, Some(PathBuf::from("movements.json")));
            assert_eq!(args.search.as_deref(), Some("fleet"));
            assert_eq!(args.filter, RecencyFilter::Week);
            assert_eq!(args.page, 2);
            assert_eq!(args.page_size, Some(5));
            assert!(args.json);
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_parse_list_unknown_filter_errors() {
        assert!(Cli::try_parse_from(["vmt", "list", "--filter", "year"]).is_err());
    }

    #[test]
    fn cli_parse_input_conflicts_with_seed() {
        let result =
            Cli::try_parse_from(["vmt", "list", "--input", "a.json", "--seed", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_history() {
        let cli = Cli::try_parse_from([
            "vmt",
            "history",
            "--vin",
            "WVWZZZ1JZXW000001",
            "--supplier",
            "unknown",
            "--seed",
            "7",
        ])
        .unwrap();
        if let Commands::History(args) = cli.command {
            assert_eq!(args.vin, "WVWZZZ1JZXW000001");
            assert_eq!(args.supplier, Some(SupplierKey::Unknown));
            assert_eq!(args.dataset.generation.seed, Some(7));
        } else {
            panic!("expected history");
        }
    }

    #[test]
    fn cli_parse_history_requires_vin() {
        assert!(Cli::try_parse_from(["vmt", "history"]).is_err());
    }

    #[test]
    fn cli_parse_show() {
        let cli = Cli::try_parse_from(["vmt", "show", "--id", "MOV-00001", "--json"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.id, "MOV-00001");
            assert!(args.json);
        } else {
            panic!("expected show");
        }
    }

    #[test]
    fn cli_parse_edit() {
        let cli = Cli::try_parse_from([
            "vmt",
            "edit",
            "--input",
            "movements.json",
            "--id",
            "MOV-00003",
            "--source-stage",
            "fleet in",
            "--target-stage",
            "Ready For Sale",
            "--action",
            "delete",
            "--movement-date",
            "2024-05-01",
            "--comment",
            "",
        ])
        .unwrap();
        if let Commands::Edit(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("movements.json"));
            assert_eq!(args.source_stage, Some(Stage::FleetIn));
            assert_eq!(args.target_stage, Some(Stage::ReadyForSale));
            assert_eq!(args.action, Some(MovementAction::Delete));
            assert_eq!(
                args.movement_date,
                Some(CalendarDate::parse("2024-05-01").unwrap())
            );
            assert_eq!(args.comment.as_deref(), Some(""));
            assert!(args.output.is_none());
        } else {
            panic!("expected edit");
        }
    }

    #[test]
    fn cli_parse_edit_unknown_stage_errors() {
        let result = Cli::try_parse_from([
            "vmt",
            "edit",
            "--input",
            "m.json",
            "--id",
            "MOV-00001",
            "--target-stage",
            "Teleported",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["vmt", "generate"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["vmt", "-vv", "generate"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["vmt", "generate", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli = Cli::try_parse_from(["vmt", "--config", "vmt.yaml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("vmt.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["vmt"]).is_err());
    }
}
