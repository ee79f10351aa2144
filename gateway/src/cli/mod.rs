//! CLIインターフェース
//!
//! -h/--help と -V/--version のみをサポートする。その他の操作は
//! すべてHTTP API経由で行う。

use clap::Parser;

/// CEP Gateway CLI引数
#[derive(Debug, Parser)]
#[command(
    name = "cep-gateway",
    version,
    about = "HTTP gateway for postal code lookup with query audit logging"
)]
pub struct Cli {}
