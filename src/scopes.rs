// License: MIT

use std::fmt;

/// All standard wattdog logging scopes
#[derive(Debug, Clone, Copy)]
pub enum Scope {
    Alarm,
    Config,
    Core,
    Daemon,
    Ipc,
    Power,
    Ticker,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scope::Alarm => "Alarm",
            Scope::Config => "Config",
            Scope::Core => "Core",
            Scope::Daemon => "Daemon",
            Scope::Ipc => "IPC",
            Scope::Power => "Power",
            Scope::Ticker => "Ticker",
        };
        write!(f, "{}", s)
    }
}
