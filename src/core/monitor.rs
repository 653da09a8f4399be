// License: MIT

use crate::config::Config;
use crate::core::{
    action::Action,
    error::{Error, StateError},
    events::{Event, PowerSignal},
    state::{Lifecycle, State},
    status::StatusSnapshot,
};

/// The debounce engine. Pure and tick-driven: callers feed it events with
/// explicit timestamps and it returns the actions that became due. All
/// side effects (overlay, cue, logging of transitions) live in the daemon.
#[derive(Debug)]
pub struct Monitor {
    cfg: Config,
}

impl Monitor {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn handle_event(&mut self, state: &mut State, event: Event) -> Result<Vec<Action>, Error> {
        state.set_debounce_ms(self.cfg.debounce_ms);

        match event {
            Event::Tick { now_ms } => {
                if state.lifecycle() != Lifecycle::Running {
                    return Ok(Vec::new());
                }

                let fired = state.take_due(now_ms);

                let mut out = Vec::with_capacity(fired.len());
                for signal in fired {
                    state.note_settled(signal);
                    out.push(Action::ApplySettled { signal });
                }

                Ok(out)
            }

            Event::Signal { signal, now_ms } => {
                if state.lifecycle() != Lifecycle::Running {
                    return Err(Error::InvalidState(StateError::NotRunning));
                }

                state.note_signal(signal);

                // An opposite signal invalidates anything still waiting to
                // settle. A same-kind duplicate does NOT reset the window:
                // both commands stay scheduled and the idempotent alarm
                // toggle absorbs the extra fire.
                state.cancel(signal.opposite());
                state.schedule(signal, now_ms);

                Ok(Vec::new())
            }
        }
    }

    /// Applies an externally commanded settle, bypassing the debounce window.
    /// Records the signal on the state so `status` reflects it, and returns
    /// the action for the daemon to execute.
    pub fn settle_now(&mut self, state: &mut State, signal: PowerSignal) -> Result<Action, Error> {
        if state.lifecycle() != Lifecycle::Running {
            return Err(Error::InvalidState(StateError::NotRunning));
        }

        state.note_signal(signal);
        state.note_settled(signal);

        Ok(Action::ApplySettled { signal })
    }

    pub fn snapshot(&self, state: &State, alarm_visible: bool) -> StatusSnapshot {
        let power = state.last_signal().map(|s| s.label().to_string());
        let last_settled = state.last_settled().map(|s| s.label().to_string());

        let pretty = format!(
            "wattdog: {}\npower: {}\nalarm: {}\npending commands: {}\ndebounce: {}ms",
            state.lifecycle().label(),
            power.as_deref().unwrap_or("unknown"),
            if alarm_visible { "shown" } else { "hidden" },
            state.pending_len(),
            state.debounce_ms(),
        );

        StatusSnapshot {
            lifecycle: state.lifecycle().label().to_string(),
            power,
            last_settled,
            alarm_visible,
            pending_commands: state.pending_len(),
            debounce_ms: state.debounce_ms(),
            pretty_text: pretty,
        }
    }
}
