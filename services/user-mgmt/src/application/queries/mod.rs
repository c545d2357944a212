//! 查询定义

pub mod user_queries;

pub use user_queries::*;
