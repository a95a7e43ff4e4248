use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// HTTP 中间件链：作为配置对象在 main 中显式组合后套到路由上
pub struct SecurityChain {
    pub cors: CorsLayer,
    pub body_limit: usize,
}

impl SecurityChain {
    /// 默认链：全放行 CORS + 1MB 请求体上限
    pub fn permissive() -> Self {
        Self {
            cors: CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            body_limit: 1024 * 1024,
        }
    }

    pub fn apply(self, router: Router) -> Router {
        router
            .layer(DefaultBodyLimit::max(self.body_limit))
            .layer(self.cors)
            .layer(TraceLayer::new_for_http())
    }
}
