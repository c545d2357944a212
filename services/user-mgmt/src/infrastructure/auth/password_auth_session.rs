//! 基于密码的认证会话实现
//!
//! 会话表放在进程内，会话传输属于外部 Web 框架的职责。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use confetti_common::{SessionId, UserId};
use confetti_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::repositories::UserRepository;
use crate::domain::services::{AuthSession, Credentials, PasswordService, Session};
use crate::domain::user::User;
use crate::domain::value_objects::Email;
use crate::error::UserError;

pub struct PasswordAuthSession {
    users: Arc<dyn UserRepository>,
    sessions: RwLock<HashMap<SessionId, UserId>>,
}

impl PasswordAuthSession {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// 当前活跃会话数
    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl AuthSession for PasswordAuthSession {
    async fn authenticate(&self, credentials: Credentials) -> AppResult<Session> {
        // 未知邮箱、格式非法、密码错误统一返回 Unauthorized，不泄露区别
        let email = Email::new(credentials.email)
            .map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or(UserError::InvalidCredentials)?;

        if !PasswordService::verify_password(&credentials.password, password_hash)? {
            tracing::info!(user_id = %user.id, "password verification failed");
            return Err(UserError::InvalidCredentials.into());
        }

        let session = Session::new(user.id.clone());
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.user_id.clone());

        Ok(session)
    }

    async fn register_with_password(&self, mut user: User, plain_password: &str) -> AppResult<User> {
        user.set_credential(PasswordService::hash_password(plain_password)?);
        self.users.save(&user).await?;
        Ok(user)
    }

    async fn terminate(&self, session: Session) -> AppResult<()> {
        self.sessions.write().await.remove(&session.id);
        Ok(())
    }
}
