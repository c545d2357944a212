//! 登出处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::CommandHandler;
use confetti_errors::AppResult;

use crate::application::commands::LogoutCommand;
use crate::application::outcome::{WorkflowOutcome, redirects};
use crate::domain::services::AuthSession;

pub struct LogoutHandler {
    auth_session: Arc<dyn AuthSession>,
}

impl LogoutHandler {
    pub fn new(auth_session: Arc<dyn AuthSession>) -> Self {
        Self { auth_session }
    }
}

#[async_trait]
impl CommandHandler<LogoutCommand> for LogoutHandler {
    async fn handle(&self, command: LogoutCommand) -> AppResult<WorkflowOutcome> {
        let user_id = command.session.user_id.clone();
        self.auth_session.terminate(command.session).await?;

        tracing::info!(user_id = %user_id, "session terminated");
        Ok(WorkflowOutcome::success(
            "You have been logged out.",
            redirects::HOME,
        ))
    }
}
