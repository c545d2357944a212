//! 仓储契约

pub mod subscriber_repository;
pub mod user_repository;

pub use subscriber_repository::SubscriberRepository;
pub use user_repository::UserRepository;
