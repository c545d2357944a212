//! 服务装配
//!
//! 路由/视图由外部 Web 框架承担，这里只暴露装配好的处理器集合。

use std::sync::Arc;

use confetti_config::AppConfig;
use confetti_errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::application::handlers::{
    DeleteUserHandler, GetUserHandler, ListUsersHandler, LoginHandler, LogoutHandler,
    RegisterUserHandler, UpdateUserHandler,
};
use crate::domain::repositories::{SubscriberRepository, UserRepository};
use crate::domain::services::SubscriberLinker;
use crate::infrastructure::auth::PasswordAuthSession;
use crate::infrastructure::persistence::{PostgresSubscriberRepository, PostgresUserRepository};

/// 装配好的用户管理模块
pub struct UserModule {
    pub register_user: Arc<RegisterUserHandler>,
    pub update_user: Arc<UpdateUserHandler>,
    pub delete_user: Arc<DeleteUserHandler>,
    pub login: Arc<LoginHandler>,
    pub logout: Arc<LogoutHandler>,
    pub get_user: Arc<GetUserHandler>,
    pub list_users: Arc<ListUsersHandler>,
    pub auth_session: Arc<PasswordAuthSession>,
}

impl UserModule {
    /// 从配置启动：初始化 tracing 并连接数据库
    pub async fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        confetti_telemetry::init_tracing(&config.telemetry.log_level);

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(config.database.url.expose_secret())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))?;

        tracing::info!("user-mgmt module connected to database");
        Ok(Self::with_pool(pool))
    }

    /// 基于已有连接池装配（Postgres 仓储）
    pub fn with_pool(pool: PgPool) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
        let subscribers: Arc<dyn SubscriberRepository> =
            Arc::new(PostgresSubscriberRepository::new(pool));

        Self::wire(users, subscribers)
    }

    /// 基于任意仓储实现装配（测试用内存仓储走这里）
    pub fn wire(
        users: Arc<dyn UserRepository>,
        subscribers: Arc<dyn SubscriberRepository>,
    ) -> Self {
        let linker = Arc::new(SubscriberLinker::new(subscribers));
        let auth_session = Arc::new(PasswordAuthSession::new(users.clone()));

        Self {
            register_user: Arc::new(RegisterUserHandler::new(linker, auth_session.clone())),
            update_user: Arc::new(UpdateUserHandler::new(users.clone())),
            delete_user: Arc::new(DeleteUserHandler::new(users.clone())),
            login: Arc::new(LoginHandler::new(auth_session.clone())),
            logout: Arc::new(LogoutHandler::new(auth_session.clone())),
            get_user: Arc::new(GetUserHandler::new(users.clone())),
            list_users: Arc::new(ListUsersHandler::new(users)),
            auth_session,
        }
    }
}
