use sqlx::SqlitePool;

use crate::errors::AuthError;
use crate::models::role::{Role, RoleName};

/// 角色存储访问：name 带唯一约束，每个枚举值至多一行
#[derive(Clone)]
pub struct RoleStore {
    pool: SqlitePool,
}

impl RoleStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 按枚举值查询角色；未命中返回 None
    pub async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    /// 同 find_by_name，但未命中时显式上抛 RoleNotFound
    pub async fn require_by_name(&self, name: RoleName) -> Result<Role, AuthError> {
        self.find_by_name(name)
            .await?
            .ok_or(AuthError::RoleNotFound(name))
    }

    /// 启动播种：缺失的枚举值各补一行，幂等
    pub async fn seed_defaults(&self) -> Result<(), sqlx::Error> {
        for name in RoleName::ALL {
            sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
                .bind(name)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }
}
