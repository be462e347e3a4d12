//! Campaign progression: a mission registry, a single current mission,
//! and a history of completed missions.

use serde::{Deserialize, Serialize};

use furyfront_core::enums::MissionState;

use crate::error::{ensure_identifier, CampaignError};
use crate::mission::Mission;

/// The campaign. At most one mission is in progress at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Campaign {
    missions: Vec<Mission>,
    current_mission_id: Option<String>,
    completed: Vec<Mission>,
}

impl Campaign {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Missions completed so far, in completion order.
    pub fn completed(&self) -> &[Mission] {
        &self.completed
    }

    pub fn current_mission(&self) -> Option<&Mission> {
        let id = self.current_mission_id.as_deref()?;
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn add_mission(&mut self, mission: Mission) {
        self.missions.push(mission);
    }

    pub fn get_mission(&self, id: &str) -> Result<&Mission, CampaignError> {
        ensure_identifier(id, "mission id")?;
        self.missions
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CampaignError::MissionNotFound { id: id.to_string() })
    }

    /// Start a registered mission. Rejected while another mission is in
    /// progress.
    pub fn start_mission(&mut self, id: &str) -> Result<(), CampaignError> {
        ensure_identifier(id, "mission id")?;
        if self
            .current_mission()
            .is_some_and(|m| m.state() == MissionState::InProgress)
        {
            return Err(CampaignError::MissionInProgress);
        }

        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CampaignError::MissionNotFound { id: id.to_string() })?;
        mission.start()?;
        self.current_mission_id = Some(id.to_string());
        Ok(())
    }

    /// Mark the current mission completed and move it to the history.
    pub fn complete_current_mission(&mut self) -> Result<(), CampaignError> {
        let id = self
            .current_mission_id
            .clone()
            .ok_or(CampaignError::NoCurrentMission)?;
        let index = self
            .missions
            .iter()
            .position(|m| m.id == id)
            .ok_or(CampaignError::MissionNotFound { id })?;

        self.missions[index].complete()?;
        let mission = self.missions.remove(index);
        self.completed.push(mission);
        self.current_mission_id = None;
        Ok(())
    }

    /// Mark the current mission failed. Failed missions stay in the
    /// registry and can be inspected, but the campaign moves on.
    pub fn fail_current_mission(&mut self) -> Result<(), CampaignError> {
        let id = self
            .current_mission_id
            .clone()
            .ok_or(CampaignError::NoCurrentMission)?;
        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CampaignError::MissionNotFound { id })?;

        mission.fail()?;
        self.current_mission_id = None;
        Ok(())
    }

    /// Completed missions as a share of all missions seen, in percent.
    pub fn progress_percent(&self) -> i32 {
        let total = self.missions.len() + self.completed.len();
        if total == 0 {
            return 0;
        }
        (self.completed.len() * 100 / total) as i32
    }
}
