//! CEP照会APIハンドラー

use crate::{api::error::AppError, AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use cep_gateway_common::{error::GatewayError, protocol::CepRecord};
use serde::Deserialize;
use tracing::info;

/// 検索クエリパラメーター
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// 照会対象のCEP
    #[serde(default)]
    pub cep: Option<String>,
}

/// GET /api/ceps/:cep - パスパラメーター形式のCEP照会
pub async fn get_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<CepRecord>, AppError> {
    info!(cep = %cep, "CEP lookup requested");

    let record = state.lookup.lookup(&cep).await?;

    Ok(Json(record))
}

/// GET /api/ceps/search?cep={code} - クエリパラメーター形式のCEP照会
///
/// `cep`パラメーターが無い（または空の）場合は照会を行わず400を返す。
pub async fn search_cep(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CepRecord>, AppError> {
    let cep = query
        .cep
        .filter(|c| !c.is_empty())
        .ok_or_else(|| GatewayError::Validation("cep query parameter is required".to_string()))?;

    info!(cep = %cep, "CEP search requested");

    let record = state.lookup.lookup(&cep).await?;

    Ok(Json(record))
}
