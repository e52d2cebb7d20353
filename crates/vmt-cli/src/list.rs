//! # List CLI
//!
//! The movement table: recency filter, search, and one page of rows.
//!
//! ```bash
//! vmt list --seed 42 --filter week --search inspection --page 2
//! vmt list --input movements.json --json
//! ```

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use vmt_core::VehicleMovement;
use vmt_history::{MovementQuery, MovementStore, Page, RecencyFilter};

use crate::config::CliConfig;
use crate::dataset::{write_json, DatasetArgs};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Case-insensitive text matched against plate, VIN, contract, stages,
    /// and operator.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Recency window: all, today, week, or month.
    #[arg(long, default_value = "all")]
    pub filter: RecencyFilter,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print the page as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn query(&self, config: &CliConfig) -> MovementQuery {
        let page_size = self.page_size.unwrap_or(config.page_size).max(1);
        MovementQuery::new(self.dataset.reference_date())
            .with_search(self.search.clone().unwrap_or_default())
            .with_recency(self.filter)
            .with_page(page_size, self.page)
    }
}

pub fn run_list(args: &ListArgs, config: &CliConfig) -> Result<u8> {
    let store = MovementStore::new(args.dataset.load(config)?);
    let page = store.query(&args.query(config));
    tracing::debug!(
        total = page.total,
        page = page.page_number(),
        filter = %args.filter,
        "movement table query"
    );

    if args.json {
        let out = json!({
            "items": page.items,
            "total": page.total,
            "page": page.page_number(),
            "pageSize": page.limit,
            "totalPages": page.total_pages(),
            "showing": page.showing(),
        });
        write_json(&out, None, true)?;
    } else {
        print!("{}", render_table(&page));
    }
    Ok(0)
}

const HEADERS: [&str; 9] = [
    "ID",
    "Plate",
    "VIN",
    "Contract",
    "Source",
    "Target",
    "Date",
    "Action",
    "Executed By",
];

fn row(m: &VehicleMovement) -> [String; 9] {
    [
        m.id.to_string(),
        m.license_plate.to_string(),
        m.vin.to_string(),
        m.contract_number.to_string(),
        m.source_stage.to_string(),
        m.target_stage.to_string(),
        m.movement_date.to_string(),
        m.action.to_string(),
        m.executed_by.clone(),
    ]
}

/// Render a page as an aligned text table followed by the pager caption.
pub fn render_table(page: &Page<&VehicleMovement>) -> String {
    let rows: Vec<[String; 9]> = page.items.iter().map(|m| row(m)).collect();
    let mut widths = HEADERS.map(str::len);
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let _ = writeln!(out, "{}", line(&HEADERS));
    if rows.is_empty() {
        let _ = writeln!(out, "No movements found.");
    }
    for r in &rows {
        let cells: Vec<&str> = r.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells));
    }
    let _ = writeln!(
        out,
        "{}  (page {} of {})",
        page.showing(),
        page.page_number(),
        page.total_pages()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::CalendarDate;
    use vmt_history::PageRequest;
    use vmt_mock::generate_seeded;

    #[test]
    fn test_query_uses_config_page_size() {
        let args = ListArgs {
            dataset: DatasetArgs::default(),
            search: Some("sold".into()),
            filter: RecencyFilter::Month,
            page: 3,
            page_size: None,
            json: false,
        };
        let config = CliConfig {
            page_size: 25,
            ..CliConfig::default()
        };
        let query = args.query(&config);
        assert_eq!(query.page, PageRequest::for_page(25, 3));
        assert_eq!(query.search, "sold");
        assert_eq!(query.recency, RecencyFilter::Month);
    }

    #[test]
    fn test_render_table() {
        let records = generate_seeded(2, 8, CalendarDate::parse("2024-06-30").unwrap());
        let page = PageRequest::for_page(3, 1).slice(records.iter());
        let table = render_table(&page);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Executed By"));
        assert_eq!(lines.len(), 1 + page.items.len() + 1);
        assert!(lines[1].starts_with(records[0].id.as_str()));
        assert!(lines
            .last()
            .unwrap()
            .starts_with(&format!("Showing 1-{} of {} entries", page.items.len(), records.len())));
    }

    #[test]
    fn test_render_empty_page() {
        let records: Vec<VehicleMovement> = Vec::new();
        let page = PageRequest::default().slice(records.iter());
        let table = render_table(&page);
        assert!(table.contains("No movements found."));
        assert!(table.contains("Showing 0-0 of 0 entries  (page 1 of 1)"));
    }
}
