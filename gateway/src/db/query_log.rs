//! 照会ログのストレージ層
//!
//! SQLiteベースで照会ログを永続化（query_logsテーブル）

use cep_gateway_common::{
    error::{GatewayError, GatewayResult},
    protocol::QueryLogEntry,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// 照会ログストレージ（SQLite版）
#[derive(Clone)]
pub struct QueryLogStorage {
    pool: SqlitePool,
}

/// 保存済み照会ログ
///
/// IDは挿入時にストア側で採番される（単調増加）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryLog {
    /// ストア採番ID
    pub id: i64,
    /// 照会したCEP
    pub cep: String,
    /// 照会開始時刻
    pub query_time: DateTime<Utc>,
    /// 外部API呼び出しの所要時間（ミリ秒）
    pub response_time_ms: u64,
    /// 照会が成功したか
    pub success: bool,
}

impl QueryLogStorage {
    /// 新しいストレージインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 照会ログを1件保存し、採番されたIDを返す
    pub async fn save_log(&self, entry: &QueryLogEntry) -> GatewayResult<i64> {
        let query_time = entry.query_time.to_rfc3339();
        let response_time_ms = entry.response_time_ms as i64;

        let result = sqlx::query(
            r#"
            INSERT INTO query_logs (cep, query_time, response_time_ms, success)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entry.cep)
        .bind(&query_time)
        .bind(response_time_ms)
        .bind(entry.success)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Database(format!("Failed to save query log: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    /// すべてのログを読み込み（照会時刻降順）
    pub async fn load_logs(&self) -> GatewayResult<Vec<QueryLog>> {
        let rows = sqlx::query_as::<_, QueryLogRow>(
            "SELECT * FROM query_logs ORDER BY query_time DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Database(format!("Failed to load query logs: {}", e)))?;

        rows.into_iter().map(|row| row.try_into()).collect()
    }

    /// 直近のログを読み込み（照会時刻降順、最大`limit`件）
    pub async fn load_recent(&self, limit: usize) -> GatewayResult<Vec<QueryLog>> {
        let rows = sqlx::query_as::<_, QueryLogRow>(
            "SELECT * FROM query_logs ORDER BY query_time DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Database(format!("Failed to load query logs: {}", e)))?;

        rows.into_iter().map(|row| row.try_into()).collect()
    }
}

/// SQLiteから取得した行データ
#[derive(sqlx::FromRow)]
struct QueryLogRow {
    id: i64,
    cep: String,
    query_time: String,
    response_time_ms: i64,
    success: bool,
}

impl TryFrom<QueryLogRow> for QueryLog {
    type Error = GatewayError;

    fn try_from(row: QueryLogRow) -> Result<Self, Self::Error> {
        let query_time = DateTime::parse_from_rfc3339(&row.query_time)
            .map_err(|e| GatewayError::Database(format!("Invalid query_time: {}", e)))?
            .with_timezone(&Utc);

        Ok(QueryLog {
            id: row.id,
            cep: row.cep,
            query_time,
            response_time_ms: row.response_time_ms.max(0) as u64,
            success: row.success,
        })
    }
}
