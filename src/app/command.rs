// License: MIT

use crate::cli::{Args, Command};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // command mode: args.command is Some
    let cmd = args.command.as_ref().expect("command mode");

    match cmd {
        Command::Connected => {
            match crate::ipc::client::send_raw("connected").await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Power connected signal sent");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("wattdog: {e}");
                    Ok(())
                }
            }
        }

        Command::Disconnected => {
            match crate::ipc::client::send_raw("disconnected").await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Power disconnected signal sent");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("wattdog: {e}");
                    Ok(())
                }
            }
        }

        Command::Status { json } => {
            let msg = if *json { "status --json" } else { "status" };

            match crate::ipc::client::send_raw(msg).await {
                Ok(resp) => {
                    if !resp.is_empty() {
                        println!("{resp}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("wattdog: {e}");
                    Ok(())
                }
            }
        }

        Command::Stop => {
            match crate::ipc::client::send_raw("stop").await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Stopping wattdog daemon");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("wattdog: {e}");
                    Ok(())
                }
            }
        }
    }
}
