//! PostgreSQL 用户 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use confetti_common::{AuditInfo, CourseId, SubscriberId, UserId};
use confetti_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::User;
use crate::domain::value_objects::{Email, HashedPassword, PersonName, ZipCode};
use crate::error::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, last_name, email, zip_code, password_hash,
           courses, subscribed_account, created_at, updated_at
    FROM users
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to find user: {}", e)))?;

        match row {
            Some(r) => Ok(Some(r.into_user().map_err(AppError::database)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE email = $1", SELECT_COLUMNS))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to find user: {}", e)))?;

        match row {
            Some(r) => Ok(Some(r.into_user().map_err(AppError::database)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!("{} ORDER BY created_at", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list users: {}", e)))?;

        rows.into_iter()
            .map(|r| r.into_user().map_err(AppError::database))
            .collect()
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or_else(|| AppError::internal("user has no registered credential"))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, zip_code, password_hash,
                               courses, subscribed_account, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id.0)
        .bind(&user.name.first)
        .bind(&user.name.last)
        .bind(user.email.as_str())
        .bind(user.zip_code.map(|z| z.value() as i32))
        .bind(password_hash.as_str())
        .bind(user.courses.iter().map(|c| c.0).collect::<Vec<Uuid>>())
        .bind(user.subscribed_account.as_ref().map(|s| s.0))
        .bind(user.audit_info.created_at)
        .bind(user.audit_info.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or_else(|| AppError::internal("user has no registered credential"))?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, zip_code = $5,
                password_hash = $6, courses = $7, subscribed_account = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.name.first)
        .bind(&user.name.last)
        .bind(user.email.as_str())
        .bind(user.zip_code.map(|z| z.value() as i32))
        .bind(password_hash.as_str())
        .bind(user.courses.iter().map(|c| c.0).collect::<Vec<Uuid>>())
        .bind(user.subscribed_account.as_ref().map(|s| s.0))
        .bind(user.audit_info.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound.into());
        }

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound.into());
        }

        Ok(())
    }
}

/// 唯一约束冲突（邮箱已占用）映射为 Conflict，其余映射为 Database
fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23505") {
            return UserError::EmailTaken.into();
        }
    }
    AppError::database(format!("Failed to persist user: {}", e))
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    zip_code: Option<i32>,
    password_hash: String,
    courses: Vec<Uuid>,
    subscribed_account: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, String> {
        let name = PersonName::new(self.first_name, self.last_name).map_err(|e| e.to_string())?;
        let email = Email::new(self.email).map_err(|e| e.to_string())?;
        let zip_code = self
            .zip_code
            .map(|z| {
                u32::try_from(z)
                    .map_err(|e| e.to_string())
                    .and_then(|v| ZipCode::from_value(v).map_err(|e| e.to_string()))
            })
            .transpose()?;

        Ok(User {
            id: UserId::from_uuid(self.id),
            name,
            email,
            zip_code,
            password_hash: Some(HashedPassword(self.password_hash)),
            courses: self.courses.into_iter().map(CourseId::from_uuid).collect(),
            subscribed_account: self.subscribed_account.map(SubscriberId::from_uuid),
            audit_info: AuditInfo {
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
        })
    }
}
