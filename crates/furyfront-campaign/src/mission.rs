//! Missions and their objectives.
//!
//! Both are small closed state machines: transitions are methods that
//! validate the current state before mutating, so an illegal call
//! leaves everything as it was.

use serde::{Deserialize, Serialize};

use furyfront_core::enums::{MissionState, ObjectiveStatus};

use crate::error::{ensure_identifier, CampaignError};

/// A single objective inside a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionObjective {
    pub id: String,
    pub description: String,
    status: ObjectiveStatus,
}

impl MissionObjective {
    pub fn new(id: &str, description: &str) -> Result<Self, CampaignError> {
        ensure_identifier(id, "objective id")?;
        ensure_identifier(description, "objective description")?;
        Ok(Self {
            id: id.to_string(),
            description: description.to_string(),
            status: ObjectiveStatus::Pending,
        })
    }

    pub fn status(&self) -> ObjectiveStatus {
        self.status
    }

    /// Pending -> Active.
    pub fn activate(&mut self) -> Result<(), CampaignError> {
        if self.status != ObjectiveStatus::Pending {
            return Err(CampaignError::ObjectiveNotPending);
        }
        self.status = ObjectiveStatus::Active;
        Ok(())
    }

    /// Active -> Completed.
    pub fn complete(&mut self) -> Result<(), CampaignError> {
        if self.status != ObjectiveStatus::Active {
            return Err(CampaignError::ObjectiveNotActive);
        }
        self.status = ObjectiveStatus::Completed;
        Ok(())
    }

    /// Any state except Completed -> Failed.
    pub fn fail(&mut self) -> Result<(), CampaignError> {
        if self.status == ObjectiveStatus::Completed {
            return Err(CampaignError::ObjectiveAlreadyCompleted);
        }
        self.status = ObjectiveStatus::Failed;
        Ok(())
    }
}

/// A campaign mission with an ordered list of objectives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub description: String,
    state: MissionState,
    objectives: Vec<MissionObjective>,
}

impl Mission {
    pub fn new(id: &str, title: &str, description: &str) -> Result<Self, CampaignError> {
        ensure_identifier(id, "mission id")?;
        ensure_identifier(title, "mission title")?;
        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            state: MissionState::NotStarted,
            objectives: Vec::new(),
        })
    }

    pub fn state(&self) -> MissionState {
        self.state
    }

    pub fn objectives(&self) -> &[MissionObjective] {
        &self.objectives
    }

    pub fn add_objective(&mut self, objective: MissionObjective) {
        self.objectives.push(objective);
    }

    /// Look up an objective by id for transition calls.
    pub fn objective_mut(&mut self, id: &str) -> Option<&mut MissionObjective> {
        self.objectives.iter_mut().find(|o| o.id == id)
    }

    /// NotStarted -> InProgress.
    pub fn start(&mut self) -> Result<(), CampaignError> {
        if self.state != MissionState::NotStarted {
            return Err(CampaignError::MissionNotStartable);
        }
        self.state = MissionState::InProgress;
        Ok(())
    }

    /// InProgress -> Completed.
    pub fn complete(&mut self) -> Result<(), CampaignError> {
        if self.state != MissionState::InProgress {
            return Err(CampaignError::MissionNotInProgress);
        }
        self.state = MissionState::Completed;
        Ok(())
    }

    /// InProgress -> Failed.
    pub fn fail(&mut self) -> Result<(), CampaignError> {
        if self.state != MissionState::InProgress {
            return Err(CampaignError::MissionNotInProgress);
        }
        self.state = MissionState::Failed;
        Ok(())
    }
}
