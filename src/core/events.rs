// License: MIT

/// A raw observation of the AC power line at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSignal {
    Connected,
    Disconnected,
}

impl PowerSignal {
    pub fn opposite(self) -> Self {
        match self {
            PowerSignal::Connected => PowerSignal::Disconnected,
            PowerSignal::Disconnected => PowerSignal::Connected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerSignal::Connected => "connected",
            PowerSignal::Disconnected => "disconnected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tick {
        now_ms: u64,
    },

    /// A raw power signal from the watcher (or any other source).
    /// Debounced before it reaches the alarm.
    Signal {
        signal: PowerSignal,
        now_ms: u64,
    },
}
