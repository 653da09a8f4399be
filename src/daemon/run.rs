// License: MIT

use tokio::sync::{mpsc, watch};

use crate::core::monitor_msg::MonitorMsg;
use crate::scopes::Scope;
use crate::{wdebug, werror, winfo};

use super::{AnyError, Daemon};

impl Daemon {
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        winfo!(Scope::Daemon, "daemon starting");
        self.state.begin_start()?;

        let (tx, mut rx) = mpsc::channel::<MonitorMsg>(256);

        // Registration failures are fatal to startup; without the IPC socket
        // the daemon cannot be told to stop.
        crate::ipc::server::spawn_ipc_server(tx.clone())
            .await
            .map_err(|e| -> AnyError { format!("ipc: failed to start: {e}").into() })?;

        self.register_power_watcher(&tx);

        tokio::spawn(crate::services::ticker::run_ticker(tx.clone()));

        self.state.mark_running()?;
        winfo!(Scope::Daemon, "daemon running");

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        winfo!(Scope::Daemon, "daemon stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        winfo!(Scope::Daemon, "daemon stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        MonitorMsg::Event(event) => {
                            match self.monitor.handle_event(&mut self.state, event) {
                                Ok(actions) => {
                                    for action in actions {
                                        self.exec_action(action);
                                    }
                                }
                                Err(e) => werror!(Scope::Core, "handle_event failed: {e}"),
                            }
                        }

                        MonitorMsg::Settle { signal, reply } => {
                            wdebug!(Scope::Daemon, "direct settle: {}", signal.label());

                            let out = match self.monitor.settle_now(&mut self.state, signal) {
                                Ok(action) => {
                                    self.exec_action(action);
                                    Ok(format!("Applied settled signal: {}", signal.label()))
                                }
                                Err(e) => Err(e.to_string()),
                            };

                            let _ = reply.send(out);
                        }

                        MonitorMsg::GetStatus { reply } => {
                            let snap = self.monitor.snapshot(&self.state, self.alarm.is_visible());
                            let _ = reply.send(snap);
                        }

                        MonitorMsg::StopDaemon { reply } => {
                            winfo!(Scope::Daemon, "daemon stopping (stop requested via IPC)");
                            let _ = reply.send(Ok("Stopping wattdog daemon".to_string()));
                            let _ = shutdown_tx.send(true);
                            break;
                        }
                    }
                }
            }
        }

        // Terminal cleanup: whatever happened before, the alarm ends hidden.
        self.state.begin_stop()?;
        self.unregister_power_watcher();
        self.alarm.force_hide();
        self.state.mark_stopped()?;

        winfo!(Scope::Daemon, "daemon stopped");
        Ok(())
    }
}
