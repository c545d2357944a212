//! 认证命令

use confetti_cqrs_core::Command;

use crate::application::outcome::{WorkflowOutcome, redirects};
use crate::domain::services::Session;

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl Command for LoginCommand {
    type Result = LoginOutcome;
}

/// 登录终态
#[derive(Debug)]
pub enum LoginOutcome {
    /// 会话已建立
    Established {
        session: Session,
        outcome: WorkflowOutcome,
    },
    /// 凭证无效
    Failed { outcome: WorkflowOutcome },
}

impl LoginOutcome {
    pub fn established(session: Session) -> Self {
        Self::Established {
            session,
            outcome: WorkflowOutcome::success("Successfully logged in.", redirects::HOME),
        }
    }

    pub fn failed() -> Self {
        Self::Failed {
            outcome: WorkflowOutcome::error("Login failed.  Retry.", redirects::LOGIN_FORM),
        }
    }

    pub fn outcome(&self) -> &WorkflowOutcome {
        match self {
            Self::Established { outcome, .. } => outcome,
            Self::Failed { outcome } => outcome,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Established { session, .. } => Some(session),
            Self::Failed { .. } => None,
        }
    }
}

/// 登出命令
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub session: Session,
}

impl Command for LogoutCommand {
    type Result = WorkflowOutcome;
}
