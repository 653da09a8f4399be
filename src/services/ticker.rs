// License: MIT

use crate::core::events::Event;
use crate::core::monitor_msg::MonitorMsg;
use crate::core::utils::now_ms;
use crate::scopes::Scope;
use crate::{wdebug, winfo};

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, sleep};

/// Tick period for the debounce clock. Settle commands fire on the first
/// tick at or past their due time, so any fire lands within one period of
/// the nominal 100ms window.
pub const TICK_INTERVAL: Duration = Duration::from_millis(25);

pub async fn run_ticker(tx: Sender<MonitorMsg>) {
    winfo!(Scope::Ticker, "ticker started");

    loop {
        sleep(TICK_INTERVAL).await;

        // If the daemon is gone, stop.
        if tx
            .send(MonitorMsg::Event(Event::Tick { now_ms: now_ms() }))
            .await
            .is_err()
        {
            wdebug!(Scope::Ticker, "ticker stopping (receiver dropped)");
            break;
        }
    }
}
