// License: MIT

pub mod signal;
pub mod status;
pub mod stop;
