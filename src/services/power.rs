// License: MIT

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, sleep};

use crate::core::events::{Event, PowerSignal};
use crate::core::monitor_msg::MonitorMsg;
use crate::core::utils;
use crate::scopes::Scope;
use crate::{winfo, wwarn};

fn signal_for(on_ac: bool) -> PowerSignal {
    if on_ac {
        PowerSignal::Connected
    } else {
        PowerSignal::Disconnected
    }
}

/// Watches the AC line and pushes a raw signal on every observed edge,
/// plus one for the state found at startup so the alarm reflects reality
/// when the daemon starts already unplugged.
pub async fn run_power(tx: Sender<MonitorMsg>, poll_interval: Duration) {
    winfo!(Scope::Power, "power watcher started");

    let mut on_ac = utils::ac_online();

    match on_ac {
        Some(v) => {
            winfo!(Scope::Power, "initial AC state: {}", signal_for(v).label());

            let _ = tx
                .send(MonitorMsg::Event(Event::Signal {
                    signal: signal_for(v),
                    now_ms: utils::now_ms(),
                }))
                .await;
        }
        None => {
            wwarn!(
                Scope::Power,
                "no mains supply under /sys/class/power_supply; waiting for one to appear"
            );
        }
    }

    loop {
        sleep(poll_interval).await;

        let now_on_ac = utils::ac_online();

        let Some(v) = now_on_ac else {
            continue;
        };

        if on_ac == Some(v) {
            continue;
        }
        on_ac = Some(v);

        let signal = signal_for(v);
        winfo!(Scope::Power, "AC line changed -> {}", signal.label());

        if tx
            .send(MonitorMsg::Event(Event::Signal {
                signal,
                now_ms: utils::now_ms(),
            }))
            .await
            .is_err()
        {
            break;
        }
    }
}
