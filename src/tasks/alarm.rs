//! Completion alarm background task

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::{services::Alarm, state::TimerEvent};

/// Background task that sounds the alarm whenever a countdown completes.
///
/// Runs until the event channel closes and returns how many alarms it sounded.
pub async fn alarm_task(mut event_rx: broadcast::Receiver<TimerEvent>, alarm: Alarm) -> usize {
    info!("Starting alarm task ({:?})", alarm);

    let mut sounded = 0;

    loop {
        match event_rx.recv().await {
            Ok(event) => {
                if handle_event(&alarm, &event).await {
                    sounded += 1;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Alarm task lagged behind by {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event channel closed, stopping alarm task");
                break;
            }
        }
    }

    sounded
}

/// Play the alarm if `event` is a completion. Returns whether it was played.
pub async fn handle_event(alarm: &Alarm, event: &TimerEvent) -> bool {
    let TimerEvent::Completed { hardness } = event else {
        return false;
    };

    info!("{} eggs are ready, sounding alarm", hardness);
    match alarm.play().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Skipping alarm playback: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::state::{AppState, HardnessOption, ProgressUpdate};

    fn progress(elapsed_seconds: u64) -> TimerEvent {
        TimerEvent::Progress(ProgressUpdate {
            elapsed_seconds,
            total_seconds: 300,
            progress: elapsed_seconds as f64 / 300.0,
            completed: false,
        })
    }

    #[tokio::test]
    async fn only_completion_sounds_the_alarm() {
        assert!(!handle_event(&Alarm::Silent, &progress(1)).await);
        assert!(!handle_event(&Alarm::Silent, &TimerEvent::Cancelled).await);

        let done = TimerEvent::Completed { hardness: HardnessOption::Soft };
        assert!(handle_event(&Alarm::Silent, &done).await);
    }

    #[tokio::test(start_paused = true)]
    async fn finished_countdown_sounds_alarm_once() {
        let state = Arc::new(AppState::new(0, "127.0.0.1".to_string()));
        let alarm = tokio::spawn(alarm_task(state.subscribe_events(), Alarm::Silent));

        state.select(HardnessOption::Soft).unwrap();
        tokio::time::sleep(Duration::from_secs(310)).await;
        assert!(!state.get_timer_state().unwrap().running);

        // Last sender goes away with the state once the tick task has finished
        drop(state);
        assert_eq!(alarm.await.unwrap(), 1);
    }

    #[tokio::test]
    async fn closed_channel_ends_the_task() {
        let (tx, rx) = broadcast::channel(8);
        let alarm = tokio::spawn(alarm_task(rx, Alarm::Silent));

        drop(tx);
        let sounded = tokio::time::timeout(Duration::from_secs(5), alarm)
            .await
            .expect("alarm task did not stop")
            .unwrap();
        assert_eq!(sounded, 0);
    }

    #[tokio::test]
    async fn lagging_keeps_listening() {
        let (tx, rx) = broadcast::channel(2);
        for elapsed in 1..=5 {
            tx.send(progress(elapsed)).unwrap();
        }
        tx.send(TimerEvent::Completed { hardness: HardnessOption::Soft }).unwrap();
        drop(tx);

        // Receiver lags by four events, then still sees the completion
        assert_eq!(alarm_task(rx, Alarm::Silent).await, 1);
    }
}
