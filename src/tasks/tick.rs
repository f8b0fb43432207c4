//! Countdown tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, error};

use crate::state::{AppState, RunId};

/// Interval between two ticks of a countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that ticks one countdown once per second until it is done.
///
/// The task ends by itself when the run completes or stops being current;
/// `AppState` aborts it when the countdown is replaced or cancelled.
pub async fn tick_task(state: Arc<AppState>, run: RunId) {
    debug!("Starting tick task for {:?}", run);

    let mut interval = interval(TICK_INTERVAL);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        match state.tick(run) {
            Ok(Some(update)) => {
                debug!("Tick {}/{}s ({:.1}%)",
                       update.elapsed_seconds, update.total_seconds, update.progress * 100.0);
                if update.completed {
                    break;
                }
            }
            Ok(None) => {
                debug!("{:?} is no longer current, stopping tick task", run);
                break;
            }
            Err(e) => {
                error!("Failed to apply tick: {}", e);
                break;
            }
        }
    }
}
