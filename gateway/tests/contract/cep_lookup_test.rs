//! Contract Test: CEP照会API (GET /api/ceps/:cep, GET /api/ceps/search)

use crate::support::gateway::{load_query_logs, spawn_test_gateway};
use reqwest::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn praca_da_se_body() -> Value {
    json!({
        "cep": "01001000",
        "logradouro": "Praça da Sé",
        "bairro": "Sé",
        "localidade": "São Paulo",
        "uf": "SP"
    })
}

#[tokio::test]
async fn test_get_cep_returns_upstream_record() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cep/01001000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(praca_da_se_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let (gateway, _db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/ceps/01001000", gateway.addr()))
        .send()
        .await
        .expect("request should be sent");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body, praca_da_se_body());

    gateway.stop().await;
}

#[tokio::test]
async fn test_search_cep_returns_same_body_as_path_form() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cep/01001000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(praca_da_se_body()))
        .expect(2)
        .mount(&upstream)
        .await;

    let (gateway, _db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let path_body: Value = client
        .get(format!("http://{}/api/ceps/01001000", gateway.addr()))
        .send()
        .await
        .expect("request should be sent")
        .json()
        .await
        .expect("body should be JSON");

    let search_body: Value = client
        .get(format!(
            "http://{}/api/ceps/search?cep=01001000",
            gateway.addr()
        ))
        .send()
        .await
        .expect("request should be sent")
        .json()
        .await
        .expect("body should be JSON");

    // 2つのエントリポイントは同一のレスポンスボディを返す
    assert_eq!(path_body, search_body);

    gateway.stop().await;
}

#[tokio::test]
async fn test_search_without_cep_returns_400_without_side_effects() {
    let upstream = MockServer::start().await;
    // バリデーションで弾かれるため、上流は一切呼ばれない
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let (gateway, db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/ceps/search", gateway.addr()))
        .send()
        .await
        .expect("request should be sent");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("body should be JSON");
    assert!(body["error"]
        .as_str()
        .expect("error message should be a string")
        .contains("cep"));

    // 照会ログも書かれない
    let logs = load_query_logs(&db_pool).await;
    assert!(logs.is_empty());

    gateway.stop().await;
}

#[tokio::test]
async fn test_upstream_error_returns_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cep/99999999"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&upstream)
        .await;

    let (gateway, _db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/ceps/99999999", gateway.addr()))
        .send()
        .await
        .expect("request should be sent");

    assert_eq!(response.status().as_u16(), 502);

    // エラーボディに上流の詳細が漏れない
    let body: Value = response.json().await.expect("body should be JSON");
    assert!(!body["error"]
        .as_str()
        .expect("error message should be a string")
        .contains("boom"));

    gateway.stop().await;
}

#[tokio::test]
async fn test_upstream_malformed_body_returns_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cep/01001000"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&upstream)
        .await;

    let (gateway, _db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/ceps/01001000", gateway.addr()))
        .send()
        .await
        .expect("request should be sent");

    assert_eq!(response.status().as_u16(), 502);

    gateway.stop().await;
}

#[tokio::test]
async fn test_partial_upstream_record_is_passed_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cep/20040020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cep": "20040020"})))
        .mount(&upstream)
        .await;

    let (gateway, _db_pool) = spawn_test_gateway(&upstream.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/ceps/20040020", gateway.addr()))
        .send()
        .await
        .expect("request should be sent");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body, json!({"cep": "20040020"}));

    gateway.stop().await;
}
