// License: MIT

use crate::core::action::Action;
use crate::scopes::Scope;
use crate::winfo;

use super::Daemon;

impl Daemon {
    pub(super) fn exec_action(&mut self, action: Action) {
        match action {
            Action::ApplySettled { signal } => {
                winfo!(Scope::Daemon, "settled: {}", signal.label());
                self.alarm.apply_settled(signal);
            }
        }
    }
}
