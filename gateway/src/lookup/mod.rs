//! 照会オーケストレーション
//!
//! 外部API呼び出しの所要時間を計測し、成否にかかわらず照会ログを
//! 1件書き込んでから結果を呼び出し元へ返す

use crate::client::CepClient;
use crate::db::query_log::QueryLogStorage;
use cep_gateway_common::{
    error::{GatewayError, GatewayResult},
    protocol::{CepRecord, QueryLogEntry},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// 照会サービス
#[derive(Clone)]
pub struct LookupService {
    client: CepClient,
    query_log: Arc<QueryLogStorage>,
}

impl LookupService {
    /// 新しいLookupServiceを作成
    pub fn new(client: CepClient, query_log: Arc<QueryLogStorage>) -> Self {
        Self { client, query_log }
    }

    /// CEPを照会する
    ///
    /// 成功・失敗のどちらの経路でも照会ログを1件保存してから返る。
    /// 所要時間は外部API呼び出しのみを計測する（ログ書き込みは含まない）。
    /// 失敗時は元のエラーを`GatewayError::LookupFailed`でラップして再送出する。
    pub async fn lookup(&self, cep: &str) -> GatewayResult<CepRecord> {
        let query_time = Utc::now();
        let started = Instant::now();

        let result = self.client.fetch(cep).await;

        let response_time_ms = started.elapsed().as_millis() as u64;
        let entry = QueryLogEntry {
            cep: cep.to_string(),
            query_time,
            response_time_ms,
            success: result.is_ok(),
        };

        // ログ書き込み自体の失敗は照会結果を変えない（記録して続行）
        if let Err(e) = self.query_log.save_log(&entry).await {
            error!(cep = %cep, "Failed to save query log: {}", e);
        }

        match result {
            Ok(record) => {
                info!(cep = %cep, latency_ms = response_time_ms, "CEP lookup succeeded");
                Ok(record)
            }
            Err(e) => {
                warn!(cep = %cep, latency_ms = response_time_ms, "CEP lookup failed: {}", e);
                Err(GatewayError::LookupFailed(Box::new(e)))
            }
        }
    }
}
