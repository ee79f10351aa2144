//! CEP Gateway Server Entry Point

use cep_gateway::cli::Cli;
use cep_gateway::client::CepClient;
use cep_gateway::db::query_log::QueryLogStorage;
use cep_gateway::{api, config, db, logging, lookup, AppState};
use cep_gateway_common::config::GatewayConfig;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    // Parse CLI (only -h/--help and -V/--version)
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");
    let settings = config::load_from_env();
    run_server(settings).await;
}

async fn run_server(settings: GatewayConfig) {
    info!("CEP Gateway v{}", env!("CARGO_PKG_VERSION"));

    // データベース接続プールを最初に作成（他コンポーネントが依存）
    let db_pool = db::create_pool(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    let query_log = Arc::new(QueryLogStorage::new(db_pool.clone()));

    let client = CepClient::new(
        &settings.cep_base_url,
        Duration::from_secs(settings.upstream_timeout_secs),
    )
    .expect("Failed to create CEP client");
    info!("Upstream CEP API: {}", settings.cep_base_url);

    let lookup = lookup::LookupService::new(client, query_log.clone());

    let state = AppState {
        lookup,
        query_log,
        db_pool,
    };
    let app = api::create_router(state);

    let bind_addr = format!("{}:{}", settings.host, settings.port);
    info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
