//! 工作流结果结构
//!
//! 每个工作流步骤显式返回 {消息, 重定向目标}，替代隐式的请求级
//! flash/redirect 状态。

use serde::Serialize;

/// 重定向目标路径
pub mod redirects {
    use confetti_common::UserId;

    pub const HOME: &str = "/";
    pub const USERS: &str = "/users";
    pub const NEW_USER_FORM: &str = "/users/new";
    pub const LOGIN_FORM: &str = "/users/login";

    pub fn user_profile(id: &UserId) -> String {
        format!("/users/{}", id)
    }
}

/// Flash 消息类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlashKind {
    Success,
    Error,
}

/// 一次性用户可见消息
#[derive(Debug, Clone, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

/// 工作流产出：零或多条消息 + 一个重定向目标
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutcome {
    pub messages: Vec<FlashMessage>,
    pub redirect: String,
}

impl WorkflowOutcome {
    pub fn success(text: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            messages: vec![FlashMessage::success(text)],
            redirect: redirect.into(),
        }
    }

    pub fn error(text: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            messages: vec![FlashMessage::error(text)],
            redirect: redirect.into(),
        }
    }

    pub fn redirect_only(redirect: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            redirect: redirect.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_common::UserId;
    use uuid::Uuid;

    #[test]
    fn test_user_profile_redirect() {
        let id = UserId::from_uuid(Uuid::nil());
        assert_eq!(
            redirects::user_profile(&id),
            format!("/users/{}", Uuid::nil())
        );
    }

    #[test]
    fn test_outcome_constructors() {
        let outcome = WorkflowOutcome::success("ok", redirects::USERS);
        assert_eq!(outcome.redirect, "/users");
        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.messages[0].kind, FlashKind::Success);

        let outcome = WorkflowOutcome::redirect_only(redirects::HOME);
        assert!(outcome.messages.is_empty());
    }
}
