//! 命令/查询处理器

pub mod delete_user_handler;
pub mod login_handler;
pub mod logout_handler;
pub mod register_user_handler;
pub mod update_user_handler;
pub mod user_query_handlers;

pub use delete_user_handler::DeleteUserHandler;
pub use login_handler::LoginHandler;
pub use logout_handler::LogoutHandler;
pub use register_user_handler::RegisterUserHandler;
pub use update_user_handler::UpdateUserHandler;
pub use user_query_handlers::{GetUserHandler, ListUsersHandler};
