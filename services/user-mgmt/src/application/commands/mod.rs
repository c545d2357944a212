//! 命令定义

pub mod auth_commands;
pub mod user_commands;

pub use auth_commands::*;
pub use user_commands::*;
