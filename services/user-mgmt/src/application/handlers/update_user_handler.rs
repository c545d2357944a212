//! 资料更新处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::CommandHandler;
use confetti_errors::{AppError, AppResult};

use crate::application::commands::{UpdateOutcome, UpdateUserCommand};
use crate::application::validation::{combine_messages, validate};
use crate::domain::repositories::UserRepository;
use crate::domain::services::PasswordService;
use crate::domain::value_objects::PersonName;
use crate::error::UserError;

/// 资料更新：按 ID 做部分字段替换（姓名、邮箱、邮编、密码）。
/// 订阅者关联保持不变，关联只在首次保存前发生。
pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CommandHandler<UpdateUserCommand> for UpdateUserHandler {
    async fn handle(&self, command: UpdateUserCommand) -> AppResult<UpdateOutcome> {
        let normalized = match validate(&command.input) {
            Ok(normalized) => normalized,
            Err(messages) => {
                let combined = combine_messages(&messages);
                tracing::info!(user_id = %command.id, error = %combined, "update input rejected");
                return Ok(UpdateOutcome::rejected(combined));
            }
        };

        let mut user = self
            .users
            .find_by_id(&command.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %command.id, "update target not found");
                AppError::from(UserError::UserNotFound)
            })?;

        let name = match PersonName::new(&normalized.first, &normalized.last) {
            Ok(name) => name,
            Err(e) => {
                tracing::info!(user_id = %command.id, error = %e, "update rejected");
                return Ok(UpdateOutcome::conflict(e));
            }
        };

        user.apply_profile_update(name, normalized.email, Some(normalized.zip_code));
        user.set_credential(PasswordService::hash_password(&normalized.password)?);

        match self.users.update(&user).await {
            Ok(()) => {
                tracing::info!(user_id = %user.id, "user updated");
                Ok(UpdateOutcome::updated(user))
            }
            Err(AppError::Conflict(reason)) => {
                tracing::warn!(user_id = %user.id, error = %reason, "user update conflict");
                Ok(UpdateOutcome::conflict(reason))
            }
            Err(error) => {
                tracing::error!(user_id = %user.id, error = %error, "user update failed");
                Err(error)
            }
        }
    }
}
