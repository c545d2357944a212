//! 领域服务

pub mod auth_session;
pub mod password_service;
pub mod subscriber_linker;

pub use auth_session::{AuthSession, Credentials, Session};
pub use password_service::PasswordService;
pub use subscriber_linker::SubscriberLinker;
