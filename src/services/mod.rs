//! External collaborators module
//!
//! This module contains the pieces that talk to the outside world on behalf of
//! the countdown, such as the completion alarm.

pub mod alarm;

// Re-export main types
pub use alarm::{ring_bell, Alarm};
