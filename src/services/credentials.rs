use serde::Serialize;

use crate::errors::AuthError;
use crate::models::user::User;
use crate::stores::user_store::UserStore;

/// 凭证视图：每次认证时从用户记录派生的只读投影，不落库
/// 密码哈希不参与 JSON 序列化
#[derive(Debug, Clone, Serialize)]
pub struct CredentialView {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub authorities: Vec<String>,
}

impl CredentialView {
    /// 把用户记录适配成认证层期望的形状；用户名和权限集合原样保留。
    /// 记录缺失密码哈希属于数据缺陷，直接上抛，不做掩盖
    pub fn from_user(user: &User) -> Result<CredentialView, AuthError> {
        if user.password_hash.is_empty() {
            return Err(AuthError::MissingPasswordHash(user.username.clone()));
        }

        Ok(CredentialView {
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            authorities: user.roles.iter().map(|r| r.name.to_string()).collect(),
        })
    }
}

/// 凭证服务：认证中间件按用户名加载凭证的唯一入口
#[derive(Clone)]
pub struct CredentialService {
    users: UserStore,
}

impl CredentialService {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }

    /// 按用户名加载凭证视图；用户不存在时显式上抛 UserNotFound
    pub async fn load_user_by_username(&self, username: &str) -> Result<CredentialView, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

        CredentialView::from_user(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::{Role, RoleName};
    use crate::stores::testing::{insert_user, memory_pool};

    fn sample_user() -> User {
        User {
            id: 1,
            username: "alice".into(),
            password_hash: "h1".into(),
            roles: vec![
                Role {
                    id: 1,
                    name: RoleName::RoleUser,
                },
                Role {
                    id: 3,
                    name: RoleName::RoleAdmin,
                },
            ],
            created_at: None,
        }
    }

    #[test]
    fn view_preserves_username_and_authorities_exactly() {
        let view = CredentialView::from_user(&sample_user()).unwrap();

        assert_eq!(view.username, "alice");
        assert_eq!(view.password_hash, "h1");
        assert_eq!(view.authorities, vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn missing_password_hash_is_surfaced_not_masked() {
        let mut user = sample_user();
        user.password_hash.clear();

        let err = CredentialView::from_user(&user).expect_err("malformed record");
        assert!(matches!(err, AuthError::MissingPasswordHash(u) if u == "alice"));
    }

    #[test]
    fn password_hash_never_leaks_into_json() {
        let view = CredentialView::from_user(&sample_user()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[tokio::test]
    async fn load_user_by_username_builds_a_view_from_the_store() {
        let pool = memory_pool().await;
        insert_user(&pool, "alice", "h1", &[RoleName::RoleUser]).await;

        let service = CredentialService::new(UserStore::new(pool));
        let view = service.load_user_by_username("alice").await.unwrap();

        assert_eq!(view.username, "alice");
        assert_eq!(view.authorities, vec!["ROLE_USER"]);
    }

    #[tokio::test]
    async fn unknown_username_surfaces_user_not_found() {
        let pool = memory_pool().await;
        insert_user(&pool, "alice", "h1", &[RoleName::RoleUser]).await;

        let service = CredentialService::new(UserStore::new(pool));
        let err = service
            .load_user_by_username("bob")
            .await
            .expect_err("bob is absent");
        assert!(matches!(err, AuthError::UserNotFound(u) if u == "bob"));
    }
}
