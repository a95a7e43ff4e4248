use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use dotenvy::dotenv;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// 声明子模块
mod errors;
mod middleware;
mod models;
mod services;
mod stores;

use middleware::chain::SecurityChain;
use models::role::RoleName;
use services::credentials::CredentialService;
use stores::role_store::RoleStore;
use stores::user_store::UserStore;

// 定义全局状态：各存储访问对象在 main 中显式构造后注入，不走隐式注册表
pub struct AppState {
    pub db: SqlitePool,
    pub users: UserStore,
    pub roles: RoleStore,
    pub credentials: CredentialService,
}

/// 健康检查 Handler：用于运维平台监测服务可用性
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // 检查数据库连通性
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "up", "database": "connected" })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: database error: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "down", "error": "database_error" })),
            )
        }
    }
}

/// 组装路由并套上中间件链；登录/注册控制器由上层服务提供，不在本仓库内
fn build_router(state: Arc<AppState>, chain: SecurityChain) -> Router {
    let public_routes = Router::new().route("/health", get(health_check));

    let app = Router::new()
        .nest("/api/public", public_routes)
        .with_state(state);

    chain.apply(app)
}

#[tokio::main]
async fn main() {
    // 1. 初始化环境变量与日志
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "认证服务启动中... 当前日志级别: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    // 2. 初始化数据库连接池
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create database connection pool");

    // 3. 建表与角色播种
    stores::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    // 4. 显式构造各存储访问对象并注入共享状态
    let users = UserStore::new(pool.clone());
    let roles = RoleStore::new(pool.clone());
    let credentials = CredentialService::new(users.clone());

    roles
        .seed_defaults()
        .await
        .expect("Failed to seed role table");
    let admin_role = roles
        .require_by_name(RoleName::RoleAdmin)
        .await
        .expect("role seeding must produce ROLE_ADMIN");
    tracing::info!("角色表播种完成, ROLE_ADMIN id={}", admin_role.id);

    let shared_state = Arc::new(AppState {
        db: pool,
        users,
        roles,
        credentials,
    });

    // 5. 组合中间件链并启动监听
    let app = build_router(shared_state, SecurityChain::permissive());

    let addr: SocketAddr = std::env::var("SERVER_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()
        .expect("SERVER_ADDR must be a valid socket address");
    tracing::info!("🚀 Server deployed successfully at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
