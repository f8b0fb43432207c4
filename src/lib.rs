//! Egg Timer - A state-managed HTTP daemon that times boiled eggs
//!
//! This library provides the countdown state machine for soft, medium and
//! hard boiled eggs, the tasks that drive it, and an HTTP surface to control
//! and observe it.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, HardnessOption, TimerController, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
