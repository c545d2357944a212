//! PostgreSQL 持久化实现

pub mod postgres_subscriber_repository;
pub mod postgres_user_repository;

pub use postgres_subscriber_repository::PostgresSubscriberRepository;
pub use postgres_user_repository::PostgresUserRepository;
