// License: MIT

use tokio::sync::mpsc;

use crate::core::events::PowerSignal;
use crate::core::monitor_msg::MonitorMsg;

use super::handlers::{signal, status, stop};

/// Routes a raw text command from the control socket to its handler.
pub async fn route_command(cmd: &str, tx: &mpsc::Sender<MonitorMsg>) -> String {
    match cmd {
        "connected" => signal::handle_signal(tx, PowerSignal::Connected).await,
        "disconnected" => signal::handle_signal(tx, PowerSignal::Disconnected).await,
        "status" => status::handle_status(tx, false).await,
        "status --json" => status::handle_status(tx, true).await,
        "stop" => stop::handle_stop(tx).await,
        other => format!("ERROR: unknown command '{other}'"),
    }
}
