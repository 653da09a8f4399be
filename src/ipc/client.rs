// License: MIT

use std::path::Path;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::UnixStream,
    time::{Duration, timeout},
};

/// An IPC exchange is one short text command and one short text reply;
/// a single deadline covers the whole round trip.
const EXCHANGE_DEADLINE: Duration = Duration::from_secs(3);

pub async fn send_raw(cmd: &str) -> Result<String, String> {
    let path = crate::ipc::socket_path()?;

    if !path.exists() {
        return Err("daemon not running".to_string());
    }

    match timeout(EXCHANGE_DEADLINE, exchange(&path, cmd)).await {
        Ok(Ok(resp)) => Ok(resp),
        Ok(Err(e)) => Err(format!("request '{cmd}' failed: {e}")),
        Err(_) => Err(format!(
            "no answer from daemon within {}s",
            EXCHANGE_DEADLINE.as_secs()
        )),
    }
}

/// Writes the command, half-closes the stream to mark end of request, and
/// reads the reply until the daemon closes its side. Replies are trimmed so
/// callers never deal with trailing newlines.
async fn exchange(path: &Path, cmd: &str) -> std::io::Result<String> {
    let mut stream = UnixStream::connect(path).await?;

    stream.write_all(cmd.as_bytes()).await?;
    stream.shutdown().await?;

    let mut resp = String::new();
    stream.read_to_string(&mut resp).await?;

    Ok(resp.trim_end().to_string())
}
