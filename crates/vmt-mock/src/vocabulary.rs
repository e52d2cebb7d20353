//! Fixed value pools the generator draws from.

use rand::seq::SliceRandom;
use rand::Rng;

/// Operator first names for `executedBy`.
pub const OPERATOR_NAMES: &[&str] = &[
    "john", "emma", "michael", "sophia", "david", "olivia", "james", "peter", "maria",
];

/// Operator mail domains for `executedBy`.
pub const OPERATOR_DOMAINS: &[&str] = &[
    "company.com",
    "autoservice.org",
    "vehicletracker.net",
    "carlogistics.eu",
];

/// Letters used on licence plates (the VIN alphabet's letters).
pub const PLATE_LETTERS: &str = "ABCDEFGHJKLMNPRSTUVWXYZ";

pub const FILE_TYPES: &[&str] = &["Lease", "Sale", "Rent"];
pub const PARKING_LOCATIONS: &[&str] = &["Lot A", "Lot B", "Warehouse 3"];

pub const VEHICLE_STATUSES: &[&str] = &["Active", "Inactive", "Pending"];
pub const MAKES: &[&str] = &["Audi", "BMW", "Mercedes", "Volkswagen", "Toyota"];
pub const MODELS: &[&str] = &["A4", "X5", "C-Class", "Golf", "Corolla"];
pub const COLORS: &[&str] = &["Black", "White", "Silver", "Blue", "Red"];
pub const DEPOTS: &[&str] = &["North Depot", "South Depot", "Central Garage"];

pub const TRANSPORT_STATUSES: &[&str] = &["Processing", "Completed", "Delayed"];
pub const TRANSPORT_TYPES: &[&str] = &["Standard", "Express", "Custom"];

pub const INSPECTION_STATUSES: &[&str] = &["Passed", "Failed", "Pending"];
pub const INSPECTION_ADDRESSES: &[&str] = &["123 Main St", "456 Park Ave", "789 Industrial Blvd"];

/// Pick one entry of a pool.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

/// Pick one character of an alphabet.
pub fn pick_char<R: Rng + ?Sized>(rng: &mut R, alphabet: &str) -> char {
    let bytes = alphabet.as_bytes();
    bytes.choose(rng).map(|b| char::from(*b)).unwrap_or('A')
}
