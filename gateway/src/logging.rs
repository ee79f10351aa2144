//! ロギング初期化ユーティリティ

use cep_gateway_common::error::{GatewayError, GatewayResult};
use tracing_subscriber::EnvFilter;

/// トレーシングサブスクライバを初期化する
///
/// フィルタは`RUST_LOG`で上書きできる（デフォルト: "info"）。
pub fn init() -> GatewayResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| GatewayError::Internal(format!("Failed to initialize logging: {}", e)))
}
