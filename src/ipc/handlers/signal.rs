// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::events::PowerSignal;
use crate::core::monitor_msg::MonitorMsg;

/// Handle `wattdog connected` / `wattdog disconnected`.
///
/// The control surface applies the signal directly, without the debounce
/// window; only the power watcher's raw signals are debounced.
pub async fn handle_signal(tx: &mpsc::Sender<MonitorMsg>, signal: PowerSignal) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(MonitorMsg::Settle {
            signal,
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        return "wattdog daemon not running".to_string();
    }

    match reply_rx.await {
        Ok(Ok(msg)) => msg,
        Ok(Err(e)) => format!("ERROR: {e}"),
        Err(_) => "ERROR: No response from daemon".to_string(),
    }
}
