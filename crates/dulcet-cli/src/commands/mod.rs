//! Command implementations

mod core;
mod import;
mod serve;

pub use core::{cmd_check, cmd_goal, cmd_init, open_db};
pub use import::cmd_import;
pub use serve::cmd_serve;
