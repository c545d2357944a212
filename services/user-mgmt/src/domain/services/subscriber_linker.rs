//! 订阅者关联服务
//!
//! 在首次持久化之前把同邮箱的订阅者记录关联到用户。
//! 作为注册工作流的显式步骤调用，而不是实体生命周期钩子。

use std::sync::Arc;

use confetti_errors::AppResult;

use crate::domain::repositories::SubscriberRepository;
use crate::domain::user::User;

/// 订阅者关联服务
pub struct SubscriberLinker {
    subscribers: Arc<dyn SubscriberRepository>,
}

impl SubscriberLinker {
    pub fn new(subscribers: Arc<dyn SubscriberRepository>) -> Self {
        Self { subscribers }
    }

    /// 按邮箱精确匹配查找订阅者并关联。
    ///
    /// - 已关联的用户不再处理（幂等保护，资料更新时不会重跑）。
    /// - 找不到订阅者不是错误，保持未关联。
    /// - 查找失败向上传播，中止后续保存。
    ///
    /// 注意：查找和保存之间不在同一事务里，订阅者在此窗口被删除会留下
    /// 悬空引用，属于接受的边界情况。
    pub async fn link(&self, user: &mut User) -> AppResult<()> {
        if user.is_linked() {
            return Ok(());
        }

        match self.subscribers.find_by_email(&user.email).await? {
            Some(subscriber) => {
                tracing::debug!(
                    user_email = %user.email,
                    subscriber_id = %subscriber.id,
                    "linking user to existing subscriber"
                );
                user.attach_subscriber(subscriber.id);
            }
            None => {
                tracing::debug!(user_email = %user.email, "no matching subscriber");
            }
        }

        Ok(())
    }
}
