//! confetti-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::Database(_) => 500,
        }
    }

    /// 转换为 Problem Details 响应体
    pub fn to_problem(&self) -> ProblemDetails {
        ProblemDetails {
            title: match self {
                Self::NotFound(_) => "Not Found",
                Self::Validation(_) => "Validation Error",
                Self::Unauthorized(_) => "Unauthorized",
                Self::Conflict(_) => "Conflict",
                Self::Internal(_) => "Internal Server Error",
                Self::Database(_) => "Internal Server Error",
            }
            .to_string(),
            status: self.status_code(),
            detail: self.to_string(),
        }
    }
}

/// RFC 7807 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

/// 应用结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("user").status_code(), 404);
        assert_eq!(AppError::validation("bad input").status_code(), 400);
        assert_eq!(AppError::unauthorized("nope").status_code(), 401);
        assert_eq!(AppError::conflict("dup").status_code(), 409);
        assert_eq!(AppError::database("down").status_code(), 500);
    }

    #[test]
    fn test_problem_details() {
        let problem = AppError::conflict("email already taken").to_problem();
        assert_eq!(problem.status, 409);
        assert_eq!(problem.title, "Conflict");
        assert!(problem.detail.contains("email already taken"));
    }
}
