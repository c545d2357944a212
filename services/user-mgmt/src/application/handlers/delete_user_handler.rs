//! 删除用户处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::CommandHandler;
use confetti_errors::AppResult;

use crate::application::commands::DeleteUserCommand;
use crate::application::outcome::{WorkflowOutcome, redirects};
use crate::domain::repositories::UserRepository;

/// 按 ID 删除用户。不级联删除 Course/Subscriber。
pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserCommand> for DeleteUserHandler {
    async fn handle(&self, command: DeleteUserCommand) -> AppResult<WorkflowOutcome> {
        self.users.delete(&command.id).await.inspect_err(|e| {
            tracing::warn!(user_id = %command.id, error = %e, "user deletion failed");
        })?;

        tracing::info!(user_id = %command.id, "user deleted");
        Ok(WorkflowOutcome::redirect_only(redirects::USERS))
    }
}
