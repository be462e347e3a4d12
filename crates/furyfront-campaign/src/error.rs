//! Campaign error type.

use furyfront_core::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    #[error("{context} must not be blank")]
    BlankIdentifier { context: &'static str },

    #[error("campaign progress must be within 0..=100, got {progress}")]
    ProgressOutOfRange { progress: i32 },

    #[error("objective can only be activated while pending")]
    ObjectiveNotPending,

    #[error("objective can only be completed while active")]
    ObjectiveNotActive,

    #[error("a completed objective cannot be failed")]
    ObjectiveAlreadyCompleted,

    #[error("mission can only be started from the not-started state")]
    MissionNotStartable,

    #[error("mission can only be resolved while in progress")]
    MissionNotInProgress,

    #[error("another mission is already in progress")]
    MissionInProgress,

    #[error("no mission is currently active")]
    NoCurrentMission,

    #[error("mission '{id}' not found")]
    MissionNotFound { id: String },

    #[error("save '{id}' not found")]
    SaveNotFound { id: String },

    #[error("save file error: {message}")]
    SaveFile { message: String },
}

impl CampaignError {
    /// Coarse classification, matching the combat crate's convention.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankIdentifier { .. } | Self::ProgressOutOfRange { .. } => ErrorKind::Validation,
            Self::ObjectiveNotPending
            | Self::ObjectiveNotActive
            | Self::ObjectiveAlreadyCompleted
            | Self::MissionNotStartable
            | Self::MissionNotInProgress
            | Self::MissionInProgress
            | Self::NoCurrentMission
            | Self::SaveFile { .. } => ErrorKind::InvalidState,
            Self::MissionNotFound { .. } | Self::SaveNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

pub(crate) fn ensure_identifier(id: &str, context: &'static str) -> Result<(), CampaignError> {
    if id.trim().is_empty() {
        return Err(CampaignError::BlankIdentifier { context });
    }
    Ok(())
}
