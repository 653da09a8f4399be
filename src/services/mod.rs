// License: MIT

pub mod power;
pub mod ticker;
