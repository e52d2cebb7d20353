//! Errors raised by the movement store.

use thiserror::Error;

use vmt_core::{MovementId, VmtError};
use vmt_lifecycle::LifecycleError;

/// Errors from store lookups and edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No movement carries the given id.
    #[error("movement not found: {id}")]
    NotFound {
        /// The requested id.
        id: MovementId,
    },

    /// An edit would produce an invalid record.
    #[error("invalid edit: {0}")]
    Validation(String),

    /// The edited stage pair is not a valid transition.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl From<VmtError> for HistoryError {
    fn from(err: VmtError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmt_core::Stage;

    #[test]
    fn test_display() {
        let err = HistoryError::NotFound {
            id: MovementId::new("MOV-00009"),
        };
        assert_eq!(err.to_string(), "movement not found: MOV-00009");

        let err: HistoryError = LifecycleError::SameStage {
            stage: Stage::Sold,
        }
        .into();
        assert_eq!(err.to_string(), "source and target stage are both Sold");
    }

    #[test]
    fn test_core_validation_maps_to_validation() {
        let err: HistoryError = VmtError::Validation("bad plate".into()).into();
        assert!(matches!(err, HistoryError::Validation(msg) if msg.contains("bad plate")));
    }
}
