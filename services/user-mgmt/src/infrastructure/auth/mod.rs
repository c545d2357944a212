//! 本地认证会话实现

pub mod password_auth_session;

pub use password_auth_session::PasswordAuthSession;
