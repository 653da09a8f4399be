// License: MIT

use crate::core::events::PowerSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A debounced signal survived its settle window without being cancelled.
    /// The daemon applies it to the alarm toggle (disconnected shows, connected
    /// hides; both idempotent).
    ApplySettled { signal: PowerSignal },
}
