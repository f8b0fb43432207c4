//! Timer state structure and derived progress values

use serde::{Deserialize, Serialize};

use super::HardnessOption;

/// Text shown before any hardness has been picked
pub const IDLE_LABEL: &str = "How do you like your eggs?";
/// Text shown once the countdown has finished
pub const DONE_LABEL: &str = "DONE!!!";

/// Coarse phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Nothing selected yet
    Idle,
    Running,
    Done,
    /// A selection was cancelled before it reached its total
    Stopped,
}

/// Snapshot of the countdown.
///
/// `elapsed_seconds <= total_seconds` always holds, and `running` is false
/// when nothing is selected or the countdown has reached its total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub selected: Option<HardnessOption>,
    pub total_seconds: u64,
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Create an idle timer state with nothing selected
    pub fn new() -> Self {
        Self {
            selected: None,
            total_seconds: 0,
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Create a freshly started countdown for the given option
    pub fn started(option: HardnessOption) -> Self {
        Self {
            selected: Some(option),
            total_seconds: option.total_seconds(),
            elapsed_seconds: 0,
            running: true,
        }
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the countdown ran to its end
    pub fn is_done(&self) -> bool {
        self.selected.is_some() && self.elapsed_seconds == self.total_seconds
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.is_done() {
            TimerPhase::Done
        } else if self.selected.is_some() {
            TimerPhase::Stopped
        } else {
            TimerPhase::Idle
        }
    }

    /// Fraction of the countdown already elapsed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            0.0
        } else {
            self.elapsed_seconds as f64 / self.total_seconds as f64
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.total_seconds - self.elapsed_seconds
    }

    /// Display text for the current state
    pub fn label(&self) -> &'static str {
        if self.is_done() {
            return DONE_LABEL;
        }
        match self.selected {
            Some(option) => option.name(),
            None => IDLE_LABEL,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
