use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::role::Role;
use crate::models::user::User;

/// 用户存储访问：username 带唯一约束，精确查询至多命中一行
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 按用户名查询用户及其关联角色；未命中返回 None，数据库错误原样上抛
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query_as::<_, (i64, String, String, Option<DateTime<Utc>>)>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, username, password_hash, created_at)) = row else {
            return Ok(None);
        };

        let roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(User {
            id,
            username,
            password_hash,
            roles,
            created_at,
        }))
    }
}
