// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::monitor_msg::MonitorMsg;

/// Handle `wattdog stop` (no args).
///
/// Asks the daemon to exit cleanly. The daemon acknowledges before leaving
/// its loop, then force-hides the alarm on the way out, so a successful
/// reply means the overlay is coming down.
pub async fn handle_stop(tx: &mpsc::Sender<MonitorMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(MonitorMsg::StopDaemon { reply: reply_tx })
        .await
        .is_err()
    {
        return "wattdog daemon not running".to_string();
    }

    match reply_rx.await {
        Ok(Ok(ack)) => ack,
        Ok(Err(e)) => format!("ERROR: {e}"),
        Err(_) => "ERROR: daemon exited without acknowledging stop".to_string(),
    }
}
