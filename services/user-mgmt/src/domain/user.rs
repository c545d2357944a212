//! 用户实体

use confetti_common::{AuditInfo, CourseId, SubscriberId, UserId};
use confetti_domain_core::{AggregateRoot, Entity};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, HashedPassword, PersonName, ZipCode};

/// 用户实体
///
/// `password_hash` 在凭证注册之前为 None；`subscribed_account` 一旦设置不再覆盖。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub email: Email,
    pub zip_code: Option<ZipCode>,
    pub password_hash: Option<HashedPassword>,
    pub courses: Vec<CourseId>,
    pub subscribed_account: Option<SubscriberId>,
    pub audit_info: AuditInfo,
}

impl User {
    pub fn new(name: PersonName, email: Email, zip_code: Option<ZipCode>) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            zip_code,
            password_hash: None,
            courses: Vec::new(),
            subscribed_account: None,
            audit_info: AuditInfo::new(),
        }
    }

    /// 派生属性：全名，只计算不持久化
    pub fn full_name(&self) -> String {
        self.name.full()
    }

    /// 设置哈希后的凭证
    pub fn set_credential(&mut self, password_hash: HashedPassword) {
        self.password_hash = Some(password_hash);
        self.audit_info.touch();
    }

    /// 关联订阅者，只在尚未关联时生效
    pub fn attach_subscriber(&mut self, subscriber_id: SubscriberId) {
        if self.subscribed_account.is_none() {
            self.subscribed_account = Some(subscriber_id);
        }
    }

    pub fn is_linked(&self) -> bool {
        self.subscribed_account.is_some()
    }

    /// 部分字段替换（资料编辑）：姓名、邮箱、邮编
    pub fn apply_profile_update(
        &mut self,
        name: PersonName,
        email: Email,
        zip_code: Option<ZipCode>,
    ) {
        self.name = name;
        self.email = email;
        self.zip_code = zip_code;
        self.audit_info.touch();
    }

    pub fn enroll_course(&mut self, course_id: CourseId) {
        if !self.courses.contains(&course_id) {
            self.courses.push(course_id);
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl AggregateRoot for User {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}
