//! 基础设施层

pub mod auth;
pub mod module;
pub mod persistence;

pub use module::UserModule;
