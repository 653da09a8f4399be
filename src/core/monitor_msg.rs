// License: MIT

use tokio::sync::oneshot;

use crate::core::{
    events::{Event, PowerSignal},
    status::StatusSnapshot,
};

#[derive(Debug)]
pub enum MonitorMsg {
    Event(Event),

    /// Bypass the debouncer and apply a settled signal immediately. This is
    /// the external control surface (`wattdog connected|disconnected`); the
    /// watcher's raw signals take the debounced `Event` path instead.
    Settle {
        signal: PowerSignal,
        reply: oneshot::Sender<Result<String, String>>,
    },

    GetStatus {
        reply: oneshot::Sender<StatusSnapshot>,
    },

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
