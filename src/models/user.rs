use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// 用户记录：认证过程中只读；注册写入由上层控制器负责，不在本服务内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: Option<DateTime<Utc>>,
}
