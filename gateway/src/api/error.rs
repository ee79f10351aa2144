//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use cep_gateway_common::error::GatewayError;
use serde_json::json;
use tracing::error;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub GatewayError);

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Use external_message() to avoid exposing internal details (upstream URLs etc.)
        // Full error details are logged separately for debugging
        let (status, message) = match &self.0 {
            GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.external_message()),
            GatewayError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.0.external_message()),
            GatewayError::LookupFailed(_) => (StatusCode::BAD_GATEWAY, self.0.external_message()),
            GatewayError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.external_message())
            }
            GatewayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.external_message())
            }
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let payload = json!({
            "error": message
        });

        (status, Json(payload)).into_response()
    }
}
