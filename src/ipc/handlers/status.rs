// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::monitor_msg::MonitorMsg;

/// Handle `wattdog status [--json]`.
pub async fn handle_status(tx: &mpsc::Sender<MonitorMsg>, as_json: bool) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(MonitorMsg::GetStatus { reply: reply_tx })
        .await
        .is_err()
    {
        return not_running(as_json);
    }

    match reply_rx.await {
        Ok(snap) => {
            if as_json {
                serde_json::to_string(&snap)
                    .unwrap_or_else(|e| format!("ERROR: failed to serialize status: {e}"))
            } else {
                snap.pretty_text
            }
        }
        Err(_) => not_running(as_json),
    }
}

fn not_running(as_json: bool) -> String {
    if as_json {
        serde_json::json!({ "lifecycle": "stopped" }).to_string()
    } else {
        "wattdog daemon not running".to_string()
    }
}
