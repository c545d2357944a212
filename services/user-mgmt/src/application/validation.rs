//! 注册输入校验
//!
//! 声明式规则表，按顺序求值并累积所有失败，不短路。

use crate::domain::value_objects::{Email, ZipCode};

/// 原始注册输入
#[derive(Debug, Clone, Default)]
pub struct RawRegistration {
    pub first: String,
    pub last: String,
    pub email: String,
    pub zip_code: String,
    pub password: String,
}

/// 归一化后的注册输入
#[derive(Debug, Clone)]
pub struct NormalizedRegistration {
    pub first: String,
    pub last: String,
    pub email: Email,
    pub zip_code: ZipCode,
    pub password: String,
}

pub const EMAIL_MESSAGE: &str = "email is not valid!";
pub const ZIP_CODE_MESSAGE: &str = "Zip Code is not valid.";
pub const PASSWORD_MESSAGE: &str = "Password can not be empty";

/// 校验规则：(字段, 谓词, 消息)
struct Rule {
    field: &'static str,
    message: &'static str,
    check: fn(&RawRegistration) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        field: "email",
        message: EMAIL_MESSAGE,
        check: |raw| Email::new(raw.email.as_str()).is_ok(),
    },
    Rule {
        field: "zipCode",
        message: ZIP_CODE_MESSAGE,
        check: |raw| ZipCode::new(&raw.zip_code).is_ok(),
    },
    Rule {
        field: "password",
        message: PASSWORD_MESSAGE,
        check: |raw| !raw.password.is_empty(),
    },
];

/// 校验并归一化注册输入
///
/// 全部规则都会求值，失败消息按规则顺序收集。
pub fn validate(raw: &RawRegistration) -> Result<NormalizedRegistration, Vec<String>> {
    let mut failures = Vec::new();

    for rule in RULES {
        if !(rule.check)(raw) {
            tracing::debug!(field = rule.field, "registration field failed validation");
            failures.push(rule.message.to_string());
        }
    }

    if !failures.is_empty() {
        return Err(failures);
    }

    // 规则已全部通过，这里的构造不会失败
    let email = Email::new(raw.email.as_str()).map_err(|_| vec![EMAIL_MESSAGE.to_string()])?;
    let zip_code = ZipCode::new(&raw.zip_code).map_err(|_| vec![ZIP_CODE_MESSAGE.to_string()])?;

    Ok(NormalizedRegistration {
        first: raw.first.clone(),
        last: raw.last.clone(),
        email,
        zip_code,
        password: raw.password.clone(),
    })
}

/// 把收集到的失败消息合并为一条用户可见消息
pub fn combine_messages(messages: &[String]) -> String {
    messages.join(" and ")
}
