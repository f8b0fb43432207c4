//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server.

pub mod tick;
pub mod alarm;

// Re-export main functions
pub use tick::tick_task;
pub use alarm::alarm_task;
