//! 注册工作流处理器

use std::sync::Arc;

use async_trait::async_trait;
use confetti_cqrs_core::CommandHandler;
use confetti_errors::{AppError, AppResult};

use crate::application::commands::{RegisterUserCommand, RegistrationOutcome};
use crate::application::validation::{combine_messages, validate};
use crate::domain::services::{AuthSession, SubscriberLinker};
use crate::domain::user::User;
use crate::domain::value_objects::PersonName;

/// 注册工作流
///
/// 校验 → 构造用户 → 订阅者关联（保存前的显式步骤）→ 凭证注册。
/// 预期失败（校验、唯一性冲突）作为终态返回；只有存储连接类故障
/// 作为 Err 向上传播。
pub struct RegisterUserHandler {
    linker: Arc<SubscriberLinker>,
    auth_session: Arc<dyn AuthSession>,
}

impl RegisterUserHandler {
    pub fn new(linker: Arc<SubscriberLinker>, auth_session: Arc<dyn AuthSession>) -> Self {
        Self {
            linker,
            auth_session,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserHandler {
    async fn handle(&self, command: RegisterUserCommand) -> AppResult<RegistrationOutcome> {
        // Validating
        let normalized = match validate(&command.input) {
            Ok(normalized) => normalized,
            Err(messages) => {
                let combined = combine_messages(&messages);
                tracing::info!(error = %combined, "registration input rejected");
                return Ok(RegistrationOutcome::rejected(combined));
            }
        };

        // 姓名为空在校验规则之外，走创建失败路径
        let name = match PersonName::new(&normalized.first, &normalized.last) {
            Ok(name) => name,
            Err(e) => {
                tracing::info!(error = %e, "registration rejected at user construction");
                return Ok(RegistrationOutcome::conflict(e));
            }
        };

        let mut user = User::new(name, normalized.email, Some(normalized.zip_code));

        // Linking：保存前必须完成；查找失败中止保存
        self.linker.link(&mut user).await?;

        // Persisting
        match self
            .auth_session
            .register_with_password(user, &normalized.password)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = %user.id, email = %user.email, "user created");
                Ok(RegistrationOutcome::created(user))
            }
            Err(AppError::Conflict(reason)) => {
                tracing::warn!(error = %reason, "user creation conflict");
                Ok(RegistrationOutcome::conflict(reason))
            }
            Err(error) => {
                tracing::error!(error = %error, "user creation failed");
                Err(error)
            }
        }
    }
}
