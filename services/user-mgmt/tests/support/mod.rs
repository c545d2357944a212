//! 测试支撑：内存仓储与输入构造

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use confetti_common::UserId;
use confetti_errors::AppResult;
use tokio::sync::RwLock;

use user_mgmt::application::validation::RawRegistration;
use user_mgmt::domain::repositories::{SubscriberRepository, UserRepository};
use user_mgmt::domain::subscriber::Subscriber;
use user_mgmt::domain::user::User;
use user_mgmt::domain::value_objects::Email;
use user_mgmt::error::UserError;
use user_mgmt::infrastructure::UserModule;

/// 内存用户仓储，邮箱唯一约束与真实存储一致
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn count_by_email(&self, email: &Email) -> usize {
        self.users
            .read()
            .await
            .values()
            .filter(|u| &u.email == email)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.audit_info.created_at);
        Ok(users)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken.into());
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::UserNotFound.into());
        }
        if users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(UserError::EmailTaken.into());
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        if self.users.write().await.remove(id).is_none() {
            return Err(UserError::UserNotFound.into());
        }
        Ok(())
    }
}

/// 内存订阅者仓储
pub struct InMemorySubscriberRepository {
    subscribers: Vec<Subscriber>,
}

impl InMemorySubscriberRepository {
    pub fn empty() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn with(subscribers: Vec<Subscriber>) -> Self {
        Self { subscribers }
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Subscriber>> {
        Ok(self
            .subscribers
            .iter()
            .find(|s| &s.email == email)
            .cloned())
    }
}

/// 装配一个带内存仓储的模块
pub fn wire_module(
    subscribers: InMemorySubscriberRepository,
) -> (UserModule, Arc<InMemoryUserRepository>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let module = UserModule::wire(users.clone(), Arc::new(subscribers));
    (module, users)
}

/// 合法的注册输入样板
pub fn ann_lee_input() -> RawRegistration {
    RawRegistration {
        first: "Ann".to_string(),
        last: "Lee".to_string(),
        email: "ANN@X.COM".to_string(),
        zip_code: "30301".to_string(),
        password: "secret1".to_string(),
    }
}
