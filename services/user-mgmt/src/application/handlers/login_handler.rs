//! 登录处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::CommandHandler;
use confetti_errors::{AppError, AppResult};

use crate::application::commands::{LoginCommand, LoginOutcome};
use crate::domain::services::{AuthSession, Credentials};

pub struct LoginHandler {
    auth_session: Arc<dyn AuthSession>,
}

impl LoginHandler {
    pub fn new(auth_session: Arc<dyn AuthSession>) -> Self {
        Self { auth_session }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginHandler {
    async fn handle(&self, command: LoginCommand) -> AppResult<LoginOutcome> {
        let credentials = Credentials {
            email: command.email,
            password: command.password,
        };

        match self.auth_session.authenticate(credentials).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user_id, "session established");
                Ok(LoginOutcome::established(session))
            }
            Err(AppError::Unauthorized(reason)) => {
                tracing::info!(error = %reason, "login failed");
                Ok(LoginOutcome::failed())
            }
            Err(error) => {
                tracing::error!(error = %error, "login aborted");
                Err(error)
            }
        }
    }
}
