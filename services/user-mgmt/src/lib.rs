//! User Management Service Library
//!
//! 模块化架构：
//! - `domain`: 领域层（User 实体、值对象、仓储契约、订阅者关联）
//! - `application`: 应用层（注册工作流、登录/登出、资料 CRUD）
//! - `infrastructure`: 基础设施层（Postgres 仓储、本地认证会话、装配）

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
