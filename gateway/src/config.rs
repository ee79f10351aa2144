//! 設定管理（環境変数ヘルパー）
//!
//! `CEP_GATEWAY_*` を優先し、短い別名にフォールバックする

use cep_gateway_common::config::GatewayConfig;
use std::str::FromStr;

/// 優先名→フォールバック名の順で環境変数を引く
pub fn get_env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
        .filter(|v| !v.is_empty())
}

/// 環境変数を引き、見つからなければデフォルト値を返す
pub fn get_env_with_fallback_or(primary: &str, fallback: &str, default: &str) -> String {
    get_env_with_fallback(primary, fallback).unwrap_or_else(|| default.to_string())
}

/// 環境変数を引いてパースし、見つからない・パース不能ならデフォルト値を返す
pub fn get_env_with_fallback_parse<T: FromStr>(primary: &str, fallback: &str, default: T) -> T {
    get_env_with_fallback(primary, fallback)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 環境変数からGatewayConfigを構築する（未指定の項目はデフォルト値）
pub fn load_from_env() -> GatewayConfig {
    let defaults = GatewayConfig::default();
    GatewayConfig {
        host: get_env_with_fallback_or("CEP_GATEWAY_HOST", "GATEWAY_HOST", &defaults.host),
        port: get_env_with_fallback_parse("CEP_GATEWAY_PORT", "GATEWAY_PORT", defaults.port),
        database_url: get_env_with_fallback_or(
            "CEP_GATEWAY_DATABASE_URL",
            "DATABASE_URL",
            &defaults.database_url,
        ),
        cep_base_url: get_env_with_fallback_or(
            "CEP_GATEWAY_UPSTREAM_URL",
            "CEP_UPSTREAM_URL",
            &defaults.cep_base_url,
        ),
        upstream_timeout_secs: get_env_with_fallback_parse(
            "CEP_GATEWAY_UPSTREAM_TIMEOUT",
            "UPSTREAM_TIMEOUT",
            defaults.upstream_timeout_secs,
        ),
    }
}
