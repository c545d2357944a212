//! 用户查询

use confetti_common::UserId;
use confetti_cqrs_core::Query;

use crate::domain::user::User;

/// 按 ID 查询用户
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub id: UserId,
}

impl Query for GetUserQuery {
    type Result = User;
}

/// 查询用户列表
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery;

impl Query for ListUsersQuery {
    type Result = Vec<User>;
}
