use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// 角色名枚举：闭合集合，数据库中每个取值至多存在一行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    RoleUser,
    RoleModerator,
    RoleAdmin,
}

impl RoleName {
    pub const ALL: [RoleName; 3] = [
        RoleName::RoleUser,
        RoleName::RoleModerator,
        RoleName::RoleAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::RoleUser => "ROLE_USER",
            RoleName::RoleModerator => "ROLE_MODERATOR",
            RoleName::RoleAdmin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: RoleName,
}
