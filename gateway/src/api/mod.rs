//! REST APIハンドラー
//!
//! CEP照会API、照会ログ閲覧API

pub mod ceps;
pub mod error;
pub mod logs;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ceps/search", get(ceps::search_cep))
        .route("/api/ceps/:cep", get(ceps::get_cep))
        .route("/api/logs", get(logs::list_logs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
