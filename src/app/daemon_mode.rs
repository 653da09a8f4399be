// License: MIT

use std::io;
use std::path::PathBuf;

use crate::cli::Args;
use crate::daemon::Daemon;
use crate::scopes::Scope;
use crate::{werror, winfo};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // single-instance
    let _instance_lock = crate::app::platform::acquire_single_instance_lock().map_err(|e| {
        eprintln!("{e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    crate::log::set_verbose(args.verbose);
    winfo!(Scope::Daemon, "wattdog starting (log: {})", crate::log::log_path().display());

    let config_path: PathBuf = match args.config.as_deref() {
        Some(p) => p.to_path_buf(),
        None => crate::config::resolve_default_config_path(),
    };

    let cfg = crate::config::load_from_path(&config_path).map_err(|e| {
        werror!(Scope::Config, "{e}");
        e
    })?;

    winfo!(
        Scope::Config,
        "config: {} (debounce={}ms, poll={}ms)",
        config_path.display(),
        cfg.debounce_ms,
        cfg.poll_interval_ms,
    );

    if cfg.alert_command.is_none() {
        winfo!(
            Scope::Config,
            "no alert_command configured; the alarm will log instead of displaying"
        );
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let mut daemon = Daemon::new(cfg);

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(shutdown_rx, shutdown_tx).await }
    });

    tokio::select! {
        res = &mut daemon_task => {
            match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }

        _ = tokio::signal::ctrl_c() => {
            winfo!(Scope::Daemon, "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);

            match daemon_task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err)),
            }
        }
    }
}
