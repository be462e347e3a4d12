//! Campaign save snapshots.
//!
//! `SaveStore` keeps snapshots in memory; `save_to_file`/`load_from_file`
//! round-trip a whole store through JSON on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_identifier, CampaignError};

/// A point-in-time snapshot of campaign progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSave {
    pub id: String,
    pub title: String,
    pub current_mission_id: String,
    /// Seconds since the Unix epoch at creation time.
    pub timestamp: u64,
    pub progress_percent: i32,
}

/// In-memory collection of campaign saves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveStore {
    saves: Vec<CampaignSave>,
    next_id: u64,
}

impl SaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    /// Create a new save snapshot and return it.
    pub fn create_save(
        &mut self,
        title: &str,
        current_mission_id: &str,
        progress_percent: i32,
    ) -> Result<&CampaignSave, CampaignError> {
        ensure_identifier(title, "save title")?;
        ensure_identifier(current_mission_id, "current mission id")?;
        if !(0..=100).contains(&progress_percent) {
            return Err(CampaignError::ProgressOutOfRange {
                progress: progress_percent,
            });
        }

        self.next_id += 1;
        let save = CampaignSave {
            id: format!("save-{}", self.next_id),
            title: title.to_string(),
            current_mission_id: current_mission_id.to_string(),
            timestamp: unix_now(),
            progress_percent,
        };
        self.saves.push(save);
        // Just pushed, the vector cannot be empty.
        Ok(&self.saves[self.saves.len() - 1])
    }

    pub fn get_save(&self, id: &str) -> Result<&CampaignSave, CampaignError> {
        ensure_identifier(id, "save id")?;
        self.saves
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CampaignError::SaveNotFound { id: id.to_string() })
    }

    /// Deleting an unknown id is a no-op, matching file-system semantics.
    pub fn delete_save(&mut self, id: &str) -> Result<(), CampaignError> {
        ensure_identifier(id, "save id")?;
        self.saves.retain(|s| s.id != id);
        Ok(())
    }

    /// All saves, newest first.
    pub fn list_saves(&self) -> Vec<&CampaignSave> {
        let mut saves: Vec<&CampaignSave> = self.saves.iter().collect();
        saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        saves
    }

    #[cfg(test)]
    pub(crate) fn set_timestamp(&mut self, id: &str, timestamp: u64) {
        if let Some(save) = self.saves.iter_mut().find(|s| s.id == id) {
            save.timestamp = timestamp;
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn store_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.json"))
}

/// Write a whole save store to `<dir>/<slot>.json`.
pub fn save_to_file(dir: &Path, slot: &str, store: &SaveStore) -> Result<(), CampaignError> {
    ensure_identifier(slot, "save slot")?;
    fs::create_dir_all(dir).map_err(|e| CampaignError::SaveFile {
        message: format!("failed to create save directory: {e}"),
    })?;
    let json = serde_json::to_string_pretty(store).map_err(|e| CampaignError::SaveFile {
        message: format!("failed to serialize save store: {e}"),
    })?;
    fs::write(store_path(dir, slot), json).map_err(|e| CampaignError::SaveFile {
        message: format!("failed to write save file: {e}"),
    })
}

/// Read a save store back from `<dir>/<slot>.json`.
pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveStore, CampaignError> {
    ensure_identifier(slot, "save slot")?;
    let json = fs::read_to_string(store_path(dir, slot)).map_err(|e| CampaignError::SaveFile {
        message: format!("failed to read save file: {e}"),
    })?;
    serde_json::from_str(&json).map_err(|e| CampaignError::SaveFile {
        message: format!("failed to parse save file: {e}"),
    })
}
