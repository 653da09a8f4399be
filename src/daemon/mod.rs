// License: MIT

mod actions;
mod run;

pub mod alarm;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::core::{monitor::Monitor, monitor_msg::MonitorMsg, state::State};
use crate::scopes::Scope;
use crate::wdebug;

use self::alarm::{AlarmToggle, CommandCue, CommandOverlay};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub struct Daemon {
    monitor: Monitor,
    state: State,
    alarm: AlarmToggle<CommandOverlay, CommandCue>,

    poll_interval_ms: u64,

    power_watcher: Option<JoinHandle<()>>,
}

impl Daemon {
    pub fn new(cfg: Config) -> Self {
        let overlay = CommandOverlay::new(cfg.alert_command.clone());
        let cue = CommandCue::new(cfg.cue_command.clone(), cfg.play_cue);

        let state = State::new(cfg.debounce_ms);
        let poll_interval_ms = cfg.poll_interval_ms;

        Self {
            monitor: Monitor::new(cfg),
            state,
            alarm: AlarmToggle::new(overlay, cue),
            poll_interval_ms,
            power_watcher: None,
        }
    }

    /// Registers the signal source. Idempotent: a second call while a watcher
    /// is already running does nothing.
    fn register_power_watcher(&mut self, tx: &mpsc::Sender<MonitorMsg>) {
        if self.power_watcher.is_some() {
            wdebug!(Scope::Daemon, "power watcher already registered");
            return;
        }

        let interval = tokio::time::Duration::from_millis(self.poll_interval_ms);
        self.power_watcher = Some(tokio::spawn(crate::services::power::run_power(
            tx.clone(),
            interval,
        )));
    }

    /// Unregisters the signal source. Safe to call when already unregistered.
    fn unregister_power_watcher(&mut self) {
        if let Some(handle) = self.power_watcher.take() {
            handle.abort();
        }
    }
}
