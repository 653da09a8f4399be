// License: MIT

use std::fmt::Arguments;
use std::fs::{self, OpenOptions, create_dir_all, metadata};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use chrono::Local;
use once_cell::sync::Lazy;

use crate::scopes::Scope;

/// Maximum log file size in bytes before rotation (5 MiB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Rotated files kept around as wattdog.log.1 .. wattdog.log.N
const KEEP_BACKUPS: u32 = 3;

#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Info => "\x1b[36m",
            LogLevel::Debug => "\x1b[90m",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
    pub console: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: std::io::stdout().is_terminal(),
        console: false,
    })
});

static RUN_HEADER: Once = Once::new();

/// Verbose mode: debug level plus console mirroring.
pub fn set_verbose(enabled: bool) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = if enabled { LogLevel::Debug } else { LogLevel::Info };
    config.console = enabled;
}

/// Core logging function; prefer the `winfo!`/`wwarn!`/`werror!`/`wdebug!` macros.
pub fn log_message(level: LogLevel, scope: Scope, args: Arguments) {
    let config = GLOBAL_CONFIG.lock().unwrap();

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let level_str = match level {
        LogLevel::Error => "ERR",
        LogLevel::Warn => "WRN",
        LogLevel::Info => "INF",
        LogLevel::Debug => "DBG",
    };

    let file_line = format!("[{}][{}][{}] {}", timestamp, level_str, scope, args);

    if let Err(e) = write_line_to_log(&file_line) {
        eprintln!("wattdog: failed to write log: {}", e);
    }

    if config.console || level == LogLevel::Error {
        let console_line = if config.use_colors {
            format!(
                "{}[{}]{} [{}][{}] {}",
                level.color(),
                level_str,
                RESET_COLOR,
                timestamp,
                scope,
                args
            )
        } else {
            file_line
        };

        match level {
            LogLevel::Error => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

#[macro_export]
macro_rules! wlog {
    ($level:expr, $scope:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $scope, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! winfo {
    ($scope:expr, $($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Info, $scope, $($arg)*) };
}

#[macro_export]
macro_rules! wwarn {
    ($scope:expr, $($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Warn, $scope, $($arg)*) };
}

#[macro_export]
macro_rules! werror {
    ($scope:expr, $($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Error, $scope, $($arg)*) };
}

#[macro_export]
macro_rules! wdebug {
    ($scope:expr, $($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Debug, $scope, $($arg)*) };
}

/// Log file path under the user cache dir.
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("wattdog");
    if !path.exists() {
        let _ = create_dir_all(&path);
    }
    path.push("wattdog.log");
    path
}

fn rotate_log_if_needed(path: &PathBuf) {
    let Ok(meta) = metadata(path) else {
        return;
    };

    if meta.len() < MAX_LOG_SIZE {
        return;
    }

    for i in (1..KEEP_BACKUPS).rev() {
        let from = rotated_name(path, i);
        let to = rotated_name(path, i + 1);
        if from.exists() {
            let _ = fs::rename(from, to);
        }
    }

    let _ = fs::rename(path, rotated_name(path, 1));
}

fn rotated_name(base: &PathBuf, n: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}", base.display(), n))
}

/// Writes the per-run header once, separated from any previous run.
fn ensure_run_header_once(path: &PathBuf) {
    RUN_HEADER.call_once(|| {
        let had_content = metadata(path).map(|m| m.len() > 0).unwrap_or(false);

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            if had_content {
                let _ = writeln!(file);
            }
            let _ = writeln!(
                file,
                "==================== wattdog daemon run start (pid={}) ====================",
                std::process::id()
            );
        }
    });
}

fn write_line_to_log(line: &str) -> std::io::Result<()> {
    let path = log_path();
    rotate_log_if_needed(&path);
    ensure_run_header_once(&path);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}
