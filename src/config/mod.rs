// License: MIT

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quiet window a raw signal must survive before it settles.
    pub debounce_ms: u64,

    /// How often the watcher samples /sys/class/power_supply.
    pub poll_interval_ms: u64,

    /// Long-running program shown while the alarm is up; killed on hide.
    /// Typically a full-screen always-on-top window.
    pub alert_command: Option<String>,

    /// Fire-and-forget command played once per show transition.
    pub cue_command: Option<String>,

    pub play_cue: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            alert_command: None,
            cue_command: None,
            play_cue: true,
        }
    }
}

/// Determine default config path: user config first, then system-wide.
/// Falls back to the user path when neither exists (load then yields
/// defaults).
pub fn resolve_default_config_path() -> PathBuf {
    let user_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/etc"))
        .join("wattdog")
        .join("wattdog.json");

    if user_path.exists() {
        return user_path;
    }

    let system_path = PathBuf::from("/etc/wattdog/wattdog.json");
    if system_path.exists() {
        return system_path;
    }

    user_path
}

/// Loads the config, treating a missing file as defaults. Parse errors are
/// real errors; a half-read config must not silently arm the daemon with the
/// wrong commands.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;

    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.debounce_ms, 100);
        assert_eq!(cfg.poll_interval_ms, 1000);
        assert!(cfg.alert_command.is_none());
        assert!(cfg.play_cue);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "alert_command": "alert-window --fullscreen" }"#).unwrap();

        assert_eq!(cfg.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(
            cfg.alert_command.as_deref(),
            Some("alert-window --fullscreen")
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<Config, _> = serde_json::from_str(r#"{ "debounce": 50 }"#);
        assert!(res.is_err());
    }
}
