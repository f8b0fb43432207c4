//! Events published to presentation collaborators

use serde::{Deserialize, Serialize};

use super::{HardnessOption, ProgressUpdate};

/// Everything that happens to the countdown, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    Selected {
        hardness: HardnessOption,
        total_seconds: u64,
    },
    Progress(ProgressUpdate),
    /// Emitted exactly once per countdown that reaches its total
    Completed { hardness: HardnessOption },
    Cancelled,
}

impl TimerEvent {
    pub fn is_completed(&self) -> bool {
        matches!(self, TimerEvent::Completed { .. })
    }
}
