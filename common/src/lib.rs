//! CEP Gateway 共通ライブラリ
//!
//! エラー型、プロトコル定義、設定構造体

pub mod config;
pub mod error;
pub mod protocol;
