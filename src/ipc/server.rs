// License: MIT

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    time::{Duration, timeout},
};

use crate::core::monitor_msg::MonitorMsg;
use crate::scopes::Scope;
use crate::{wdebug, werror};

use super::router::route_command;

/// Binds the control socket and spawns the accept loop. A stale socket file
/// from a crashed run is replaced if nothing answers on it.
pub async fn spawn_ipc_server(tx: mpsc::Sender<MonitorMsg>) -> Result<(), String> {
    let path = super::socket_path()?;

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if path.exists() && UnixStream::connect(&path).await.is_err() {
        let _ = std::fs::remove_file(&path);
    }

    let listener = UnixListener::bind(&path)
        .map_err(|e| format!("failed to bind {}: {e}", path.display()))?;

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), async {
                            if let Err(e) = handle_connection(&mut stream, &tx).await {
                                werror!(Scope::Ipc, "error handling connection: {}", e);
                            }
                        })
                        .await;

                        if result.is_err() {
                            werror!(Scope::Ipc, "connection timed out after 10 seconds");
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => werror!(Scope::Ipc, "failed to accept connection: {}", e),
            }
        }
    });

    Ok(())
}

async fn handle_connection(
    stream: &mut UnixStream,
    tx: &mpsc::Sender<MonitorMsg>,
) -> std::io::Result<()> {
    let mut buf = vec![0u8; 256];
    let n = stream.read(&mut buf).await?;

    if n == 0 {
        return Ok(());
    }

    let cmd = String::from_utf8_lossy(&buf[..n]).trim().to_string();
    wdebug!(Scope::Ipc, "received command: {}", cmd);

    let response = route_command(&cmd, tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}
