//! 用户 Repository trait

use async_trait::async_trait;
use confetti_common::UserId;
use confetti_errors::AppResult;

use crate::domain::user::User;
use crate::domain::value_objects::Email;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// 根据邮箱查找用户（邮箱已归一化）
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// 查询用户列表
    async fn list(&self) -> AppResult<Vec<User>>;

    /// 保存新用户；邮箱唯一性冲突返回 Conflict
    async fn save(&self, user: &User) -> AppResult<()>;

    /// 更新用户；目标不存在返回 NotFound
    async fn update(&self, user: &User) -> AppResult<()>;

    /// 删除用户；目标不存在返回 NotFound
    async fn delete(&self, id: &UserId) -> AppResult<()>;
}
