//! 应用层

pub mod commands;
pub mod handlers;
pub mod outcome;
pub mod queries;
pub mod validation;
