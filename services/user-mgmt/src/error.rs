//! 服务错误定义

use confetti_errors::AppError;
use thiserror::Error;

use crate::domain::value_objects::{EmailError, PasswordError, PersonNameError, ZipCodeError};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("A user with this email already exists")]
    EmailTaken,
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => AppError::unauthorized("Invalid credentials"),
            UserError::UserNotFound => AppError::not_found("User not found"),
            UserError::EmailTaken => {
                AppError::conflict("A user with this email already exists")
            }
        }
    }
}

impl From<EmailError> for AppError {
    fn from(error: EmailError) -> Self {
        AppError::validation(error.to_string())
    }
}

impl From<ZipCodeError> for AppError {
    fn from(error: ZipCodeError) -> Self {
        AppError::validation(error.to_string())
    }
}

impl From<PersonNameError> for AppError {
    fn from(error: PersonNameError) -> Self {
        AppError::validation(error.to_string())
    }
}

impl From<PasswordError> for AppError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::Empty => AppError::validation(error.to_string()),
            PasswordError::Hash(_) => AppError::internal(error.to_string()),
        }
    }
}
