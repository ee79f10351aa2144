//! 照会ログ閲覧API

use crate::db::query_log::QueryLog;
use crate::{api::error::AppError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

const DEFAULT_LIMIT: usize = 200;
const MAX_LIMIT: usize = 1000;

/// ログ取得クエリパラメーター
#[derive(Debug, Clone, Deserialize)]
pub struct LogQuery {
    /// 取得件数（1-1000）
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// GET /api/logs - 直近の照会ログを新しい順に返す
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<QueryLog>>, AppError> {
    let limit = query.limit.clamp(1, MAX_LIMIT);
    let logs = state.query_log.load_recent(limit).await?;

    Ok(Json(logs))
}
