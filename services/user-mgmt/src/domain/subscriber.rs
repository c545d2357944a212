//! 订阅者实体
//!
//! 本服务只查询订阅者，从不创建。

use confetti_common::SubscriberId;
use confetti_domain_core::Entity;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Email;

/// 订阅者（营销/邮件列表记录）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: Email,
}

impl Subscriber {
    pub fn new(id: SubscriberId, email: Email) -> Self {
        Self { id, email }
    }
}

impl Entity for Subscriber {
    type Id = SubscriberId;

    fn id(&self) -> &SubscriberId {
        &self.id
    }
}
