//! PersonName 值对象

use serde::{Deserialize, Serialize};
use std::fmt;

/// 姓名值对象：first 和 last 都必须非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// 创建新的 PersonName
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self, PersonNameError> {
        let first = first.into().trim().to_string();
        let last = last.into().trim().to_string();

        if first.is_empty() {
            return Err(PersonNameError::EmptyFirst);
        }

        if last.is_empty() {
            return Err(PersonNameError::EmptyLast);
        }

        Ok(Self { first, last })
    }

    /// 派生属性：全名，永不持久化
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// PersonName 错误
#[derive(Debug, thiserror::Error)]
pub enum PersonNameError {
    #[error("First name can not be empty")]
    EmptyFirst,

    #[error("Last name can not be empty")]
    EmptyLast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = PersonName::new("Ann", "Lee").unwrap();
        assert_eq!(name.full(), "Ann Lee");
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(PersonName::new("", "Lee").is_err());
        assert!(PersonName::new("Ann", "").is_err());
        assert!(PersonName::new("   ", "Lee").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let name = PersonName::new(" Ann ", " Lee ").unwrap();
        assert_eq!(name.first, "Ann");
        assert_eq!(name.last, "Lee");
    }
}
