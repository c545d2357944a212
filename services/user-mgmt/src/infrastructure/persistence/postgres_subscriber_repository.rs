//! PostgreSQL 订阅者 Repository 实现

use async_trait::async_trait;
use confetti_common::SubscriberId;
use confetti_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::SubscriberRepository;
use crate::domain::subscriber::Subscriber;
use crate::domain::value_objects::Email;

pub struct PostgresSubscriberRepository {
    pool: PgPool,
}

impl PostgresSubscriberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for PostgresSubscriberRepository {
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "SELECT id, email FROM subscribers WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find subscriber: {}", e)))?;

        match row {
            Some(r) => Ok(Some(r.into_subscriber().map_err(AppError::database)?)),
            None => Ok(None),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: Uuid,
    email: String,
}

impl SubscriberRow {
    fn into_subscriber(self) -> Result<Subscriber, String> {
        let email = Email::new(self.email).map_err(|e| e.to_string())?;
        Ok(Subscriber::new(SubscriberId::from_uuid(self.id), email))
    }
}
