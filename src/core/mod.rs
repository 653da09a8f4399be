// License: MIT

pub mod action;
pub mod error;
pub mod events;
pub mod monitor;
pub mod monitor_msg;
pub mod state;
pub mod status;
pub mod utils;

#[cfg(test)]
mod monitor_tests;
