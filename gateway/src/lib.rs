//! CEP Gateway Server
//!
//! 外部CEP APIへの照会を仲介し、照会ログを記録するHTTPゲートウェイ

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 外部CEP APIクライアント
pub mod client;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// 照会オーケストレーション
pub mod lookup;

/// ロギング初期化ユーティリティ
pub mod logging;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 照会サービス
    pub lookup: lookup::LookupService,
    /// 照会ログストレージ
    pub query_log: std::sync::Arc<db::query_log::QueryLogStorage>,
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
}
