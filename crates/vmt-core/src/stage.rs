//! # Lifecycle Stage — Single Source of Truth
//!
//! Defines the `Stage` enum: the canonical, ordered list of steps a vehicle
//! passes through from entering the fleet to being archived. The order of
//! [`Stage::all_stages()`] is the only valid direction of forward progress.
//!
//! Stages serialize as their display names ("Source In", "Ready For Sale"),
//! the same strings the dashboard shows in its stage columns.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VmtError;

/// A named step in a vehicle's lifecycle.
///
/// | # | Stage |
/// |---|-------|
/// |  0 | Source In |
/// |  1 | Fleet In |
/// |  2 | Transport |
/// |  3 | Reception |
/// |  4 | Inspection |
/// |  5 | Repair |
/// |  6 | Ready For Sale |
/// |  7 | Remarketing |
/// |  8 | Sold |
/// |  9 | Pick Up |
/// | 10 | Completed |
/// | 11 | Archived |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Vehicle sourced from the supplier; every lifecycle starts here.
    #[serde(rename = "Source In")]
    SourceIn,
    /// Registered in the fleet.
    #[serde(rename = "Fleet In")]
    FleetIn,
    /// In transport to a depot.
    #[serde(rename = "Transport")]
    Transport,
    /// Received at the depot gate.
    #[serde(rename = "Reception")]
    Reception,
    /// Undergoing inspection.
    #[serde(rename = "Inspection")]
    Inspection,
    /// In repair after inspection.
    #[serde(rename = "Repair")]
    Repair,
    /// Released for sale.
    #[serde(rename = "Ready For Sale")]
    ReadyForSale,
    /// Offered through a remarketing channel.
    #[serde(rename = "Remarketing")]
    Remarketing,
    /// Sold to a buyer.
    #[serde(rename = "Sold")]
    Sold,
    /// Collected by the buyer.
    #[serde(rename = "Pick Up")]
    PickUp,
    /// Administratively completed.
    #[serde(rename = "Completed")]
    Completed,
    /// Archived (terminal).
    #[serde(rename = "Archived")]
    Archived,
}

/// Total number of lifecycle stages.
pub const STAGE_COUNT: usize = 12;

impl Stage {
    /// Returns all stages in canonical lifecycle order.
    pub fn all_stages() -> &'static [Stage] {
        &[
            Self::SourceIn,
            Self::FleetIn,
            Self::Transport,
            Self::Reception,
            Self::Inspection,
            Self::Repair,
            Self::ReadyForSale,
            Self::Remarketing,
            Self::Sold,
            Self::PickUp,
            Self::Completed,
            Self::Archived,
        ]
    }

    /// The first stage of every lifecycle.
    pub fn first() -> Self {
        Self::SourceIn
    }

    /// Position of this stage in the canonical order (0-based).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The stage at canonical position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all_stages().get(index).copied()
    }

    /// The next stage in canonical order, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Whether this is the final stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Returns the display name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceIn => "Source In",
            Self::FleetIn => "Fleet In",
            Self::Transport => "Transport",
            Self::Reception => "Reception",
            Self::Inspection => "Inspection",
            Self::Repair => "Repair",
            Self::ReadyForSale => "Ready For Sale",
            Self::Remarketing => "Remarketing",
            Self::Sold => "Sold",
            Self::PickUp => "Pick Up",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = VmtError;

    /// Parse a stage from its display name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace, so CLI input
    /// like `"ready for sale"` resolves to [`Stage::ReadyForSale`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all_stages()
            .iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| VmtError::Validation(format!("unknown stage: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stages_count() {
        assert_eq!(Stage::all_stages().len(), STAGE_COUNT);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, stage) in Stage::all_stages().iter().enumerate() {
            assert_eq!(stage.index(), i);
            assert_eq!(Stage::from_index(i), Some(*stage));
        }
        assert_eq!(Stage::from_index(STAGE_COUNT), None);
    }

    #[test]
    fn test_first_and_terminal() {
        assert_eq!(Stage::first(), Stage::SourceIn);
        assert_eq!(Stage::first().index(), 0);
        assert!(Stage::Archived.is_terminal());
        assert!(!Stage::Sold.is_terminal());
        assert_eq!(Stage::Archived.next(), None);
        assert_eq!(Stage::SourceIn.next(), Some(Stage::FleetIn));
    }

    #[test]
    fn test_ordering_follows_lifecycle() {
        assert!(Stage::SourceIn < Stage::FleetIn);
        assert!(Stage::Inspection < Stage::Sold);
        assert!(Stage::Sold < Stage::Archived);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for stage in Stage::all_stages() {
            let parsed: Stage = stage.as_str().parse().unwrap();
            assert_eq!(*stage, parsed);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("ready for sale".parse::<Stage>().unwrap(), Stage::ReadyForSale);
        assert_eq!("  FLEET IN ".parse::<Stage>().unwrap(), Stage::FleetIn);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("Nowhere".parse::<Stage>().is_err());
        assert!("".parse::<Stage>().is_err());
        assert!("FleetIn".parse::<Stage>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for stage in Stage::all_stages() {
            let json = serde_json::to_string(stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
            let parsed: Stage = serde_json::from_str(&json).unwrap();
            assert_eq!(*stage, parsed);
        }
    }

    #[test]
    fn test_serde_rejects_unknown_stage() {
        assert!(serde_json::from_str::<Stage>("\"Ordered\"").is_err());
    }
}
