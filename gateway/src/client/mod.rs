//! 外部CEP APIクライアント
//!
//! 1回の照会につき1回だけ外部APIを呼び出し、JSONをCepRecordへ変換する

use cep_gateway_common::{
    error::{GatewayError, GatewayResult},
    protocol::CepRecord,
};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// 外部CEP APIクライアント
#[derive(Clone)]
pub struct CepClient {
    http_client: Client,
    base_url: String,
}

impl CepClient {
    /// 新しいCepClientを作成
    ///
    /// # Arguments
    /// * `base_url` - 外部CEP APIのベースURL（例: "http://localhost:3000"）
    /// * `timeout` - 外部API呼び出しのタイムアウト
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> GatewayResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// CEPを外部APIで照会する
    ///
    /// リトライは行わない。通信エラー、非2xx応答、パース不能なボディは
    /// いずれも`GatewayError::Upstream`として返す。
    pub async fn fetch(&self, cep: &str) -> GatewayResult<CepRecord> {
        let url = format!("{}/cep/{}", self.base_url, cep);

        debug!("Fetching CEP from upstream: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("Failed to call CEP API: {}", e)))?;

        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "CEP API returned error: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<CepRecord>()
            .await
            .map_err(|e| GatewayError::Upstream(format!("Failed to parse CEP response: {}", e)))
    }
}
