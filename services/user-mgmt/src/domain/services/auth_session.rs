//! 认证会话契约
//!
//! 核心通过该策略契约消费凭证验证与会话建立/终止。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use confetti_common::{SessionId, UserId};
use confetti_errors::AppResult;
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// 登录凭证（原始输入，归一化在实现内部完成）
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 会话
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            established_at: Utc::now(),
        }
    }
}

/// 认证会话契约
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// 验证凭证并建立会话；凭证无效返回 Unauthorized
    async fn authenticate(&self, credentials: Credentials) -> AppResult<Session>;

    /// 凭证注册原语：哈希密码并持久化用户；邮箱冲突返回 Conflict
    async fn register_with_password(&self, user: User, plain_password: &str) -> AppResult<User>;

    /// 终止会话；总是成功
    async fn terminate(&self, session: Session) -> AppResult<()>;
}
