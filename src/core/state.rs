// License: MIT

use crate::core::error::{Error, StateError};
use crate::core::events::PowerSignal;

/// Daemon lifecycle. Raw signals are only observed while Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl Lifecycle {
    pub fn label(self) -> &'static str {
        match self {
            Lifecycle::Stopped => "stopped",
            Lifecycle::Starting => "starting",
            Lifecycle::Running => "running",
            Lifecycle::Stopping => "stopping",
        }
    }
}

/// A scheduled settle command. Cancelled if an opposite-kind signal arrives
/// before `due_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub signal: PowerSignal,
    pub due_ms: u64,
}

/// All mutable monitor state. Owned by the daemon loop; the engine never holds
/// locks because every access is serialized through that loop.
#[derive(Debug)]
pub struct State {
    lifecycle: Lifecycle,
    pending: Vec<Pending>,
    debounce_ms: u64,
    last_signal: Option<PowerSignal>,
    last_settled: Option<PowerSignal>,
}

impl State {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            lifecycle: Lifecycle::Stopped,
            pending: Vec::new(),
            debounce_ms,
            last_signal: None,
            last_settled: None,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn set_debounce_ms(&mut self, debounce_ms: u64) {
        self.debounce_ms = debounce_ms;
    }

    pub fn last_signal(&self) -> Option<PowerSignal> {
        self.last_signal
    }

    pub fn last_settled(&self) -> Option<PowerSignal> {
        self.last_settled
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    // ---------------- lifecycle transitions ----------------

    pub fn begin_start(&mut self) -> Result<(), Error> {
        if self.lifecycle != Lifecycle::Stopped {
            return Err(Error::InvalidState(StateError::NotStopped));
        }
        self.lifecycle = Lifecycle::Starting;
        Ok(())
    }

    pub fn mark_running(&mut self) -> Result<(), Error> {
        if self.lifecycle != Lifecycle::Starting {
            return Err(Error::InvalidState(StateError::NotStarting));
        }
        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    /// Leaves Running. Pending settle commands are discarded; shutdown is
    /// terminal cleanup and nothing may fire after it.
    pub fn begin_stop(&mut self) -> Result<(), Error> {
        if self.lifecycle != Lifecycle::Running {
            return Err(Error::InvalidState(StateError::NotRunning));
        }
        self.lifecycle = Lifecycle::Stopping;
        self.pending.clear();
        Ok(())
    }

    pub fn mark_stopped(&mut self) -> Result<(), Error> {
        if self.lifecycle != Lifecycle::Stopping {
            return Err(Error::InvalidState(StateError::NotStopping));
        }
        self.lifecycle = Lifecycle::Stopped;
        Ok(())
    }

    // ---------------- pending commands ----------------

    pub fn note_signal(&mut self, signal: PowerSignal) {
        self.last_signal = Some(signal);
    }

    pub fn note_settled(&mut self, signal: PowerSignal) {
        self.last_settled = Some(signal);
    }

    /// Schedules a settle command one debounce window from `now_ms`.
    /// Same-kind commands already pending are left alone (see monitor docs).
    pub fn schedule(&mut self, signal: PowerSignal, now_ms: u64) {
        self.pending.push(Pending {
            signal,
            due_ms: now_ms + self.debounce_ms,
        });
    }

    /// Cancels every pending command of the given kind. Returns how many were
    /// dropped. Best-effort by construction: a command that already fired is
    /// no longer in the list.
    pub fn cancel(&mut self, signal: PowerSignal) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.signal != signal);
        before - self.pending.len()
    }

    /// Removes and returns every command due at or before `now_ms`, preserving
    /// scheduling order so settled commands apply FIFO.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<PowerSignal> {
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now_ms {
                fired.push(p.signal);
                false
            } else {
                true
            }
        });
        fired
    }
}
