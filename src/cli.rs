// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wattdog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Wattdog AC-unplug alarm"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Tell the daemon power is connected (hides the alarm)")]
    Connected,

    #[command(about = "Tell the daemon power is disconnected (shows the alarm)")]
    Disconnected,

    #[command(about = "Display the daemon's current state")]
    Status {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Stop the running wattdog daemon")]
    Stop,
}
