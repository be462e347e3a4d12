//! Campaign layer: missions with objectives, campaign progression, and
//! save snapshots.
//!
//! Everything here is plain data plus state machines; no simulation
//! state leaks in. The combat engine reports outcomes, the campaign
//! records them.

pub mod campaign;
pub mod error;
pub mod mission;
pub mod saves;

pub use campaign::Campaign;
pub use error::CampaignError;
pub use mission::{Mission, MissionObjective};
pub use saves::{CampaignSave, SaveStore};
