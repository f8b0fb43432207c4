//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::tasks::tick_task;
use super::{HardnessOption, ProgressUpdate, RunId, TimerController, TimerEvent, TimerState};

/// Shared application state: the single countdown and its tick source
#[derive(Debug)]
pub struct AppState {
    /// The countdown itself; the only mutator of `TimerState`
    controller: Mutex<TimerController>,
    /// Tick task of the current run, if any
    ticker: Mutex<Option<JoinHandle<()>>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for countdown events (selection, progress, completion)
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Channel carrying the latest timer snapshot
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a new AppState with nothing selected
    pub fn new(port: u16, host: String) -> Self {
        let (event_tx, _) = broadcast::channel(1024);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerState::new());

        Self {
            controller: Mutex::new(TimerController::new()),
            ticker: Mutex::new(None),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            event_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Start a countdown for `option`, cancelling any previous one.
    ///
    /// The old tick task is aborted before the new one is spawned, and the
    /// 0% snapshot is published before the first tick can arrive.
    pub fn select(self: &Arc<Self>, option: HardnessOption) -> Result<TimerState, String> {
        info!("Selecting {} eggs ({}s)", option, option.total_seconds());

        let mut ticker = self.ticker.lock()
            .map_err(|e| format!("Failed to lock tick task: {}", e))?;
        if let Some(handle) = ticker.take() {
            handle.abort();
        }

        let mut controller = self.controller.lock()
            .map_err(|e| format!("Failed to lock timer controller: {}", e))?;
        let run = controller.select(option);
        let new_state = controller.state().clone();

        self.publish_state(new_state.clone());
        self.publish_event(TimerEvent::Selected {
            hardness: option,
            total_seconds: new_state.total_seconds,
        });
        drop(controller);

        *ticker = Some(tokio::spawn(tick_task(Arc::clone(self), run)));
        drop(ticker);

        self.record_action(&format!("select-{}", option.name().to_lowercase()));
        Ok(new_state)
    }

    /// Apply one tick for `run`.
    ///
    /// Ticks from a run that is no longer current are dropped and yield `None`.
    pub fn tick(&self, run: RunId) -> Result<Option<ProgressUpdate>, String> {
        let mut controller = self.controller.lock()
            .map_err(|e| format!("Failed to lock timer controller: {}", e))?;

        if !controller.is_current(run) {
            debug!("Dropping stale tick for {:?}", run);
            return Ok(None);
        }

        let Some(update) = controller.on_tick() else {
            return Ok(None);
        };
        let new_state = controller.state().clone();

        self.publish_state(new_state.clone());
        self.publish_event(TimerEvent::Progress(update.clone()));

        if update.completed {
            if let Some(hardness) = new_state.selected {
                info!("{} eggs are done after {}s", hardness, update.total_seconds);
                self.publish_event(TimerEvent::Completed { hardness });
            }
        }

        Ok(Some(update))
    }

    /// Stop the running countdown, if any
    pub fn cancel(&self) -> Result<TimerState, String> {
        let mut ticker = self.ticker.lock()
            .map_err(|e| format!("Failed to lock tick task: {}", e))?;
        if let Some(handle) = ticker.take() {
            handle.abort();
        }

        let mut controller = self.controller.lock()
            .map_err(|e| format!("Failed to lock timer controller: {}", e))?;
        let was_running = controller.cancel();
        let new_state = controller.state().clone();

        if was_running {
            info!("Countdown cancelled at {}s", new_state.elapsed_seconds);
            self.publish_state(new_state.clone());
            self.publish_event(TimerEvent::Cancelled);
        }
        drop(controller);
        drop(ticker);

        self.record_action("cancel");
        Ok(new_state)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.controller.lock()
            .map(|controller| controller.state().clone())
            .map_err(|e| format!("Failed to lock timer controller: {}", e))
    }

    /// Subscribe to countdown events
    pub fn subscribe_events(&self) -> broadcast::Receiver<TimerEvent> {
        self.event_tx.subscribe()
    }

    /// Watch the latest timer snapshot
    pub fn watch_timer(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    fn publish_state(&self, state: TimerState) {
        if let Err(e) = self.timer_update_tx.send(state) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    fn publish_event(&self, event: TimerEvent) {
        // No subscribers is not an error; the alarm task may not be running
        if self.event_tx.send(event).is_err() {
            debug!("No event subscribers");
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
