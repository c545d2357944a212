//! 领域层

pub mod repositories;
pub mod services;
pub mod subscriber;
pub mod user;
pub mod value_objects;

pub use subscriber::Subscriber;
pub use user::User;
