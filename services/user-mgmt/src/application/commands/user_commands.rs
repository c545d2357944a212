//! 用户命令

use confetti_common::UserId;
use confetti_cqrs_core::Command;

use crate::application::outcome::{WorkflowOutcome, redirects};
use crate::application::validation::RawRegistration;
use crate::domain::user::User;

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub input: RawRegistration,
}

impl Command for RegisterUserCommand {
    type Result = RegistrationOutcome;
}

/// 注册工作流的终态
///
/// 状态机：Received → Validating → {Rejected | Linking → Persisting →
/// {Created | Conflict}}。每个终态对应一个重定向目标和一条消息。
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// 用户已创建并持久化
    Created {
        user: User,
        outcome: WorkflowOutcome,
    },
    /// 输入校验失败，未尝试创建
    Rejected { outcome: WorkflowOutcome },
    /// 持久化冲突（邮箱已存在等），未创建第二个用户
    Conflict { outcome: WorkflowOutcome },
}

impl RegistrationOutcome {
    pub fn created(user: User) -> Self {
        Self::Created {
            user,
            outcome: WorkflowOutcome::success(
                "User has been successfully created",
                redirects::USERS,
            ),
        }
    }

    pub fn rejected(combined_message: impl Into<String>) -> Self {
        Self::Rejected {
            outcome: WorkflowOutcome::error(combined_message, redirects::NEW_USER_FORM),
        }
    }

    pub fn conflict(reason: impl std::fmt::Display) -> Self {
        Self::Conflict {
            outcome: WorkflowOutcome::error(
                format!("Failed to create user: {}", reason),
                redirects::NEW_USER_FORM,
            ),
        }
    }

    pub fn outcome(&self) -> &WorkflowOutcome {
        match self {
            Self::Created { outcome, .. } => outcome,
            Self::Rejected { outcome } => outcome,
            Self::Conflict { outcome } => outcome,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Created { user, .. } => Some(user),
            _ => None,
        }
    }
}

/// 更新用户命令（按用户 ID 做部分字段替换）
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub id: UserId,
    pub input: RawRegistration,
}

impl Command for UpdateUserCommand {
    type Result = UpdateOutcome;
}

/// 更新工作流的终态
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated {
        user: User,
        outcome: WorkflowOutcome,
    },
    Rejected { outcome: WorkflowOutcome },
    Conflict { outcome: WorkflowOutcome },
}

impl UpdateOutcome {
    pub fn updated(user: User) -> Self {
        let redirect = redirects::user_profile(&user.id);
        Self::Updated {
            user,
            outcome: WorkflowOutcome::redirect_only(redirect),
        }
    }

    pub fn rejected(combined_message: impl Into<String>) -> Self {
        Self::Rejected {
            outcome: WorkflowOutcome::error(combined_message, redirects::NEW_USER_FORM),
        }
    }

    pub fn conflict(reason: impl std::fmt::Display) -> Self {
        Self::Conflict {
            outcome: WorkflowOutcome::error(
                format!("Failed to update user: {}", reason),
                redirects::NEW_USER_FORM,
            ),
        }
    }

    pub fn outcome(&self) -> &WorkflowOutcome {
        match self {
            Self::Updated { outcome, .. } => outcome,
            Self::Rejected { outcome } => outcome,
            Self::Conflict { outcome } => outcome,
        }
    }
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub id: UserId,
}

impl Command for DeleteUserCommand {
    type Result = WorkflowOutcome;
}
