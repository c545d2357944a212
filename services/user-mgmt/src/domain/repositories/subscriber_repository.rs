//! 订阅者 Repository trait

use async_trait::async_trait;
use confetti_errors::AppResult;

use crate::domain::subscriber::Subscriber;
use crate::domain::value_objects::Email;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// 根据邮箱精确查找订阅者
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Subscriber>>;
}
