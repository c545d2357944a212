//! ZipCode 值对象

use serde::{Deserialize, Serialize};
use std::fmt;

/// ZipCode 值对象
///
/// 必须恰好 5 位数字，范围 [10000, 99999]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZipCode(pub u32);

impl ZipCode {
    /// 从原始输入创建 ZipCode
    pub fn new(raw: &str) -> Result<Self, ZipCodeError> {
        let raw = raw.trim();

        // 字符串宽度和数值范围双重检查
        if raw.len() != 5 {
            return Err(ZipCodeError::WrongWidth);
        }

        let value: u32 = raw.parse().map_err(|_| ZipCodeError::NotAnInteger)?;

        Self::from_value(value)
    }

    /// 从已解析的数值创建 ZipCode
    pub fn from_value(value: u32) -> Result<Self, ZipCodeError> {
        if !(10000..=99999).contains(&value) {
            return Err(ZipCodeError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ZipCode 错误
#[derive(Debug, thiserror::Error)]
pub enum ZipCodeError {
    #[error("Zip code must be exactly 5 digits")]
    WrongWidth,

    #[error("Zip code must be an integer")]
    NotAnInteger,

    #[error("Zip code {0} is outside the range 10000-99999")]
    OutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zip_codes() {
        assert_eq!(ZipCode::new("30301").unwrap().value(), 30301);
        assert_eq!(ZipCode::new("10000").unwrap().value(), 10000);
        assert_eq!(ZipCode::new("99999").unwrap().value(), 99999);
        assert_eq!(ZipCode::new(" 30301 ").unwrap().value(), 30301);
    }

    #[test]
    fn test_invalid_zip_codes() {
        // 宽度不对
        assert!(ZipCode::new("123").is_err());
        assert!(ZipCode::new("123456").is_err());
        assert!(ZipCode::new("").is_err());

        // 不是整数
        assert!(ZipCode::new("3030a").is_err());

        // 宽度是 5 但数值越界（前导零）
        assert!(ZipCode::new("00123").is_err());
        assert!(ZipCode::new("09999").is_err());
    }

    #[test]
    fn test_from_value_range() {
        assert!(ZipCode::from_value(9999).is_err());
        assert!(ZipCode::from_value(100000).is_err());
        assert!(ZipCode::from_value(10000).is_ok());
    }
}
