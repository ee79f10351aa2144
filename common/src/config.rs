//! 設定管理
//!
//! GatewayConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// gateway設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// データベースURL (デフォルト: "sqlite://cep-gateway.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// 外部CEP APIのベースURL (デフォルト: "http://localhost:3000")
    #[serde(default = "default_cep_base_url")]
    pub cep_base_url: String,

    /// 外部API呼び出しタイムアウト（秒）(デフォルト: 10)
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://cep-gateway.db".to_string()
}

fn default_cep_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_upstream_timeout() -> u64 {
    10
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            cep_base_url: default_cep_base_url(),
            upstream_timeout_secs: default_upstream_timeout(),
        }
    }
}
