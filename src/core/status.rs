// License: MIT

use serde::Serialize;

/// Snapshot returned from the daemon for `wattdog status`.
///
/// The serialized form is the stable JSON contract; `pretty_text` is the
/// CLI-facing output.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub lifecycle: String,

    /// Last raw signal observed, if any ("connected"/"disconnected").
    pub power: Option<String>,

    /// Last signal that survived its settle window.
    pub last_settled: Option<String>,

    pub alarm_visible: bool,

    pub pending_commands: usize,

    pub debounce_ms: u64,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}
