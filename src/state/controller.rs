//! Countdown state machine
//!
//! `TimerController` is the only mutator of `TimerState`. It knows nothing
//! about clocks or tasks: the caller drives it with one `on_tick` per second
//! and starts or stops the tick source around `select` and `cancel`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HardnessOption, TimerState};

/// Identifies one countdown. Ticks carrying an older id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub elapsed_seconds: u64,
    pub total_seconds: u64,
    pub progress: f64,
    /// Set on the tick that reached the total; this is the completion event
    pub completed: bool,
}

#[derive(Debug)]
pub struct TimerController {
    state: TimerState,
    run: RunId,
}

impl TimerController {
    pub fn new() -> Self {
        Self {
            state: TimerState::new(),
            run: RunId(0),
        }
    }

    /// Start a countdown for `option`, replacing whatever was running
    pub fn select(&mut self, option: HardnessOption) -> RunId {
        self.cancel();
        self.state = TimerState::started(option);
        self.run = RunId(self.run.0 + 1);
        debug!("Selected {} ({}s), run {:?}", option, option.total_seconds(), self.run);
        self.run
    }

    /// Advance the running countdown by one second.
    ///
    /// Returns `None` when nothing is running, so ticks arriving after
    /// completion or cancellation change nothing.
    pub fn on_tick(&mut self) -> Option<ProgressUpdate> {
        if !self.state.running {
            return None;
        }

        self.state.elapsed_seconds += 1;
        let completed = self.state.elapsed_seconds >= self.state.total_seconds;
        if completed {
            self.state.elapsed_seconds = self.state.total_seconds;
            self.state.running = false;
        }

        Some(ProgressUpdate {
            elapsed_seconds: self.state.elapsed_seconds,
            total_seconds: self.state.total_seconds,
            progress: self.state.progress(),
            completed,
        })
    }

    /// Stop the running countdown. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.state.running;
        self.state.running = false;
        self.run = RunId(self.run.0 + 1);
        was_running
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn run_id(&self) -> RunId {
        self.run
    }

    /// Check whether `run` is the countdown currently owned by the controller
    pub fn is_current(&self, run: RunId) -> bool {
        self.run == run && self.state.running
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}
