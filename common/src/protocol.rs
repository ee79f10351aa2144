//! プロトコル定義
//!
//! 外部CEP APIとの間で交換するレコードと、照会ログエントリ

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// CEPレコード
///
/// 外部CEP APIのレスポンスをそのままの項目名で表す。`cep`以外は
/// 上流が省略する場合があるためすべてオプション。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CepRecord {
    /// CEP（照会キー）
    pub cep: String,
    /// 通り名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logradouro: Option<String>,
    /// 地区名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    /// 市名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidade: Option<String>,
    /// 州コード
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
}

/// 照会ログエントリ
///
/// 1回の照会につき必ず1件作成される。IDは持たない（保存時に
/// ストア側で採番される）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryLogEntry {
    /// 照会したCEP
    pub cep: String,
    /// 照会開始時刻
    pub query_time: DateTime<Utc>,
    /// 外部API呼び出しの所要時間（ミリ秒）
    pub response_time_ms: u64,
    /// 照会が成功したか
    pub success: bool,
}
