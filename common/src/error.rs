//! エラー型定義
//!
//! GatewayError / GatewayResult

use thiserror::Error;

/// Gateway共通エラー
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 外部CEP APIの呼び出し失敗（通信エラー、非2xx応答、パース不能なボディ）
    #[error("Upstream lookup error: {0}")]
    Upstream(String),

    /// CEP照会の失敗（監査ログ書き込み後に元のエラーをラップして再送出）
    #[error("Lookup failed: {0}")]
    LookupFailed(#[source] Box<GatewayError>),

    /// データベースエラー
    #[error("Database error: {0}")]
    Database(String),

    /// リクエスト検証エラー
    #[error("Validation error: {0}")]
    Validation(String),

    /// 内部エラー
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// 外部公開用のエラーメッセージ
    ///
    /// 内部詳細（接続先URL等）をレスポンスボディへ漏らさないため、
    /// HTTPレスポンスにはこのメッセージのみを載せる。
    pub fn external_message(&self) -> String {
        match self {
            GatewayError::Upstream(_) | GatewayError::LookupFailed(_) => {
                "Failed to resolve postal code with the upstream service".to_string()
            }
            GatewayError::Database(_) => "Storage operation failed".to_string(),
            GatewayError::Validation(msg) => msg.clone(),
            GatewayError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// Gateway共通Result型
pub type GatewayResult<T> = Result<T, GatewayError>;
