// License: MIT

use std::path::Path;
use std::process::Stdio;

pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    d.as_millis() as u64
}

/// Spawns a shell command detached, with stdio discarded. Fire-and-forget.
pub fn run_shell_command_silent(command: &str) -> std::io::Result<()> {
    std::process::Command::new("sh")
        .arg("-lc")
        .arg(command)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Reads the AC line state from sysfs. `None` when no mains supply exists
/// (desktops, VMs) or sysfs is unreadable.
pub fn ac_online() -> Option<bool> {
    ac_online_at(Path::new("/sys/class/power_supply"))
}

pub fn ac_online_at(root: &Path) -> Option<bool> {
    let entries = std::fs::read_dir(root).ok()?;

    let mut found_mains = false;
    for entry in entries.flatten() {
        let supply = entry.path();

        let kind = std::fs::read_to_string(supply.join("type")).unwrap_or_default();
        if kind.trim() != "Mains" {
            continue;
        }
        found_mains = true;

        if let Ok(online) = std::fs::read_to_string(supply.join("online")) {
            if online.trim() == "1" {
                return Some(true);
            }
        }
    }

    if found_mains { Some(false) } else { None }
}
