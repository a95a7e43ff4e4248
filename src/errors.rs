use thiserror::Error;

use crate::models::role::RoleName;

/// 认证链路的显式错误信号；数据库错误原样透传，不做重试或兜底
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found with username {0}")]
    UserNotFound(String),

    #[error("Role not found with name {0}")]
    RoleNotFound(RoleName),

    #[error("User record for {0} is missing a password hash")]
    MissingPasswordHash(String),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}
