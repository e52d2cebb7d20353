//! # vmt-history — Movement History and Dashboard Queries
//!
//! Everything the dashboard computes over a flat movement collection:
//!
//! - **Aggregation** (`aggregate.rs`): one vehicle's movements, newest first,
//!   partitioned by the supplier that delivered them.
//! - **Queries** (`query.rs`): free-text search and the today/week/month
//!   recency window, evaluated against an explicit reference date.
//! - **Pagination** (`pagination.rs`): 1-based pages with the totals a pager
//!   needs.
//! - **Store** (`store.rs`): the owned collection, with lookups and
//!   validated row edits.
//!
//! ## Crate Policy
//!
//! - Aggregation and queries are total and never read the wall clock.
//! - Sorting is stable everywhere; equal dates keep their input order.
//! - Only the store's edit operation can fail.

pub mod aggregate;
pub mod error;
pub mod pagination;
pub mod query;
pub mod store;

pub use aggregate::{aggregate_history, supplier_key, MovementHistory, SupplierKey};
pub use error::HistoryError;
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use query::{matches_search, MovementQuery, RecencyFilter};
pub use store::{MovementEdit, MovementStore, VehicleSummary};
