//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers carried by a movement record.
//! A `ContractNumber` cannot be passed where a `Vin` is expected.
//!
//! Each type offers a lenient constructor (`new`), used when ingesting
//! records, and a strict `parse` that checks the canonical format. Records
//! read from a dataset are not rejected for odd identifiers; edits are.

use serde::{Deserialize, Serialize};

use crate::error::VmtError;

/// Characters a generated VIN is drawn from (ISO 3779: no I, O or Q).
pub const VIN_ALPHABET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Length of a well-formed VIN.
pub const VIN_LENGTH: usize = 17;

/// Unique identifier of one movement record, e.g. `MOV-00042`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(pub String);

/// Vehicle identification number. The stable per-vehicle history key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vin(pub String);

/// EU-style licence plate in the `XX-999-XX` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(pub String);

/// Lease/sale contract number in the `CTR-999999` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractNumber(pub String);

impl MovementId {
    /// Wrap an arbitrary identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the identifier for the `sequence`-th generated movement.
    ///
    /// Sequences are zero-padded to five digits: `MOV-00001`. Larger
    /// sequences keep all their digits.
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("MOV-{sequence:05}"))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Vin {
    /// Wrap an arbitrary VIN without format checks.
    pub fn new(vin: impl Into<String>) -> Self {
        Self(vin.into())
    }

    /// Parse a VIN, requiring 17 characters from [`VIN_ALPHABET`].
    pub fn parse(s: &str) -> Result<Self, VmtError> {
        if s.len() != VIN_LENGTH || !s.chars().all(|c| VIN_ALPHABET.contains(c)) {
            return Err(VmtError::Validation(format!(
                "VIN must be {VIN_LENGTH} characters from {VIN_ALPHABET:?}, got: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl LicensePlate {
    /// Wrap an arbitrary plate without format checks.
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    /// Parse a plate, requiring two letters, three digits, two letters
    /// separated by hyphens (`AB-123-CD`).
    pub fn parse(s: &str) -> Result<Self, VmtError> {
        let parts: Vec<&str> = s.split('-').collect();
        let well_formed = parts.len() == 3
            && is_upper_letters(parts[0], 2)
            && is_digits(parts[1], 3)
            && is_upper_letters(parts[2], 2);
        if !well_formed {
            return Err(VmtError::Validation(format!(
                "licence plate must match XX-999-XX, got: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ContractNumber {
    /// Wrap an arbitrary contract number without format checks.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Parse a contract number, requiring `CTR-` followed by six digits.
    pub fn parse(s: &str) -> Result<Self, VmtError> {
        match s.strip_prefix("CTR-") {
            Some(digits) if is_digits(digits, 6) => Ok(Self(s.to_string())),
            _ => Err(VmtError::Validation(format!(
                "contract number must match CTR-999999, got: {s:?}"
            ))),
        }
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_upper_letters(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_uppercase())
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

impl std::fmt::Display for MovementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Vin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ContractNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
