//! State management module
//!
//! This module contains the countdown state machine and the shared state that
//! owns it.

pub mod hardness;
pub mod timer_state;
pub mod controller;
pub mod events;
pub mod app_state;

// Re-export main types
pub use hardness::{HardnessOption, ParseHardnessError};
pub use timer_state::{TimerPhase, TimerState};
pub use controller::{ProgressUpdate, RunId, TimerController};
pub use events::TimerEvent;
pub use app_state::AppState;
