//! # vmt-core — Foundational Types for the Vehicle Movement Tracker
//!
//! Defines the record types every other crate in the workspace works with:
//! the `VehicleMovement` stage-transition record, its supplier data slots,
//! the canonical lifecycle `Stage` list, and the identifier and date
//! newtypes. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `MovementId`, `Vin`,
//!    `LicensePlate`, `ContractNumber`. A VIN cannot be passed where a
//!    contract number is expected.
//!
//! 2. **Single `Stage` enum.** One ordered definition of the lifecycle.
//!    Stage names are parsed once at the boundary; everything inside the
//!    workspace matches on the enum.
//!
//! 3. **Typed supplier slots.** Each of the four upstream sources has its own
//!    record type with its own field vocabulary. No string-keyed property bags.
//!
//! 4. **Calendar dates, not timestamps.** Movement and execution dates are
//!    `CalendarDate` values rendered as `YYYY-MM-DD`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vmt-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` with the camelCase field names of the
//!   dashboard's JSON.

pub mod error;
pub mod identity;
pub mod movement;
pub mod stage;
pub mod supplier;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::VmtError;
pub use identity::{ContractNumber, LicensePlate, MovementId, Vin, VIN_ALPHABET, VIN_LENGTH};
pub use movement::{MovementAction, VehicleMovement};
pub use stage::{Stage, STAGE_COUNT};
pub use supplier::{
    Supplier1Data, Supplier2Data, Supplier3Data, Supplier4Data, SupplierData, SupplierSlot,
};
pub use temporal::CalendarDate;
