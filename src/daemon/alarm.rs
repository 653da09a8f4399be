// License: MIT

use std::process::Stdio;

use crate::core::events::PowerSignal;
use crate::core::utils::run_shell_command_silent;
use crate::scopes::Scope;
use crate::{wdebug, werror, winfo, wwarn};

/// The system-level always-on-top surface the alarm draws on. Acquisition may
/// fail (missing program, resource limits); failures are logged by the toggle
/// and are never fatal.
pub trait OverlaySurface {
    type Handle;

    fn acquire(&mut self) -> Result<Self::Handle, String>;
    fn release(&mut self, handle: Self::Handle);
}

/// Fire-and-forget audible cue, played exactly once per show transition.
pub trait AudibleCue {
    fn play_cue(&mut self);
}

/// Keeps the overlay's shown/hidden state matching the most recently settled
/// signal. Owned by the daemon loop; nothing else touches the overlay.
pub struct AlarmToggle<O: OverlaySurface, C: AudibleCue> {
    overlay: O,
    cue: C,
    handle: Option<O::Handle>,
}

impl<O: OverlaySurface, C: AudibleCue> AlarmToggle<O, C> {
    pub fn new(overlay: O, cue: C) -> Self {
        Self {
            overlay,
            cue,
            handle: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.handle.is_some()
    }

    pub fn apply_settled(&mut self, signal: PowerSignal) {
        match signal {
            PowerSignal::Disconnected => self.show(),
            PowerSignal::Connected => self.hide(),
        }
    }

    /// Unconditionally releases the overlay if held. Used at shutdown; a
    /// no-op when already hidden.
    pub fn force_hide(&mut self) {
        if self.handle.is_some() {
            winfo!(Scope::Alarm, "force-hiding alarm");
            self.hide();
        }
    }

    fn show(&mut self) {
        if self.handle.is_some() {
            wdebug!(Scope::Alarm, "alarm already shown");
            return;
        }

        match self.overlay.acquire() {
            Ok(handle) => {
                self.handle = Some(handle);
                self.cue.play_cue();
                winfo!(Scope::Alarm, "alarm shown");
            }
            Err(e) => {
                // Non-fatal: the alarm simply does not display.
                werror!(Scope::Alarm, "overlay acquire failed: {e}");
            }
        }
    }

    fn hide(&mut self) {
        match self.handle.take() {
            Some(handle) => {
                self.overlay.release(handle);
                winfo!(Scope::Alarm, "alarm hidden");
            }
            None => wdebug!(Scope::Alarm, "alarm already hidden"),
        }
    }
}

// ---------------- process-backed implementations ----------------

/// Overlay backed by a configured long-running alert program. The handle is
/// the child process; release kills it.
#[derive(Debug)]
pub struct CommandOverlay {
    command: Option<String>,
}

impl CommandOverlay {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

impl OverlaySurface for CommandOverlay {
    type Handle = tokio::process::Child;

    fn acquire(&mut self) -> Result<Self::Handle, String> {
        let command = self
            .command
            .as_ref()
            .ok_or_else(|| "no alert_command configured".to_string())?;

        tokio::process::Command::new("sh")
            .arg("-lc")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("failed to spawn alert command: {e}"))
    }

    fn release(&mut self, mut handle: Self::Handle) {
        if let Err(e) = handle.start_kill() {
            wdebug!(Scope::Alarm, "alert process already gone: {e}");
        }
    }
}

#[derive(Debug)]
pub struct CommandCue {
    command: Option<String>,
    enabled: bool,
}

impl CommandCue {
    pub fn new(command: Option<String>, enabled: bool) -> Self {
        Self { command, enabled }
    }
}

impl AudibleCue for CommandCue {
    fn play_cue(&mut self) {
        if !self.enabled {
            return;
        }

        let Some(command) = &self.command else {
            wdebug!(Scope::Alarm, "no cue_command configured");
            return;
        };

        if let Err(e) = run_shell_command_silent(command) {
            wwarn!(Scope::Alarm, "cue failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingOverlay {
        acquires: usize,
        releases: usize,
        fail: bool,
        next_handle: u32,
    }

    impl CountingOverlay {
        fn new(fail: bool) -> Self {
            Self {
                acquires: 0,
                releases: 0,
                fail,
                next_handle: 0,
            }
        }
    }

    impl OverlaySurface for CountingOverlay {
        type Handle = u32;

        fn acquire(&mut self) -> Result<u32, String> {
            if self.fail {
                return Err("permission denied".to_string());
            }
            self.acquires += 1;
            self.next_handle += 1;
            Ok(self.next_handle)
        }

        fn release(&mut self, _handle: u32) {
            self.releases += 1;
        }
    }

    struct CountingCue {
        plays: usize,
    }

    impl AudibleCue for CountingCue {
        fn play_cue(&mut self) {
            self.plays += 1;
        }
    }

    fn toggle(fail: bool) -> AlarmToggle<CountingOverlay, CountingCue> {
        AlarmToggle::new(CountingOverlay::new(fail), CountingCue { plays: 0 })
    }

    #[test]
    fn duplicate_show_acquires_and_cues_once() {
        let mut alarm = toggle(false);

        alarm.apply_settled(PowerSignal::Disconnected);
        alarm.apply_settled(PowerSignal::Disconnected);

        assert!(alarm.is_visible());
        assert_eq!(alarm.overlay.acquires, 1);
        assert_eq!(alarm.cue.plays, 1);
    }

    #[test]
    fn hide_when_hidden_is_noop() {
        let mut alarm = toggle(false);

        alarm.apply_settled(PowerSignal::Connected);

        assert!(!alarm.is_visible());
        assert_eq!(alarm.overlay.releases, 0);
    }

    #[test]
    fn show_then_hide_releases_once() {
        let mut alarm = toggle(false);

        alarm.apply_settled(PowerSignal::Disconnected);
        alarm.apply_settled(PowerSignal::Connected);
        alarm.apply_settled(PowerSignal::Connected);

        assert!(!alarm.is_visible());
        assert_eq!(alarm.overlay.acquires, 1);
        assert_eq!(alarm.overlay.releases, 1);
    }

    #[test]
    fn force_hide_when_hidden_is_noop() {
        let mut alarm = toggle(false);

        alarm.force_hide();

        assert!(!alarm.is_visible());
        assert_eq!(alarm.overlay.releases, 0);
    }

    #[test]
    fn force_hide_releases_held_overlay() {
        let mut alarm = toggle(false);

        alarm.apply_settled(PowerSignal::Disconnected);
        alarm.force_hide();

        assert!(!alarm.is_visible());
        assert_eq!(alarm.overlay.releases, 1);
    }

    #[test]
    fn acquire_failure_leaves_alarm_hidden_and_silent() {
        let mut alarm = toggle(true);

        alarm.apply_settled(PowerSignal::Disconnected);

        assert!(!alarm.is_visible());
        assert_eq!(alarm.cue.plays, 0);

        // A later settled disconnect tries again; still no cue on failure.
        alarm.apply_settled(PowerSignal::Disconnected);
        assert!(!alarm.is_visible());
        assert_eq!(alarm.cue.plays, 0);
    }
}
