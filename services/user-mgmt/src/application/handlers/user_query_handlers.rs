//! 用户查询处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::QueryHandler;
use confetti_errors::{AppError, AppResult};

use crate::application::queries::{GetUserQuery, ListUsersQuery};
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;
use crate::error::UserError;

/// 按 ID 查询。目标不存在时一致地返回 NotFound，不静默。
pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl QueryHandler<GetUserQuery> for GetUserHandler {
    async fn handle(&self, query: GetUserQuery) -> AppResult<User> {
        self.users
            .find_by_id(&query.id)
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = %query.id, error = %e, "error fetching user by id");
            })?
            .ok_or_else(|| {
                tracing::warn!(user_id = %query.id, "user not found");
                AppError::from(UserError::UserNotFound)
            })
    }
}

pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl QueryHandler<ListUsersQuery> for ListUsersHandler {
    async fn handle(&self, _query: ListUsersQuery) -> AppResult<Vec<User>> {
        self.users.list().await.inspect_err(|e| {
            tracing::error!(error = %e, "error fetching user list");
        })
    }
}
