#![allow(clippy::unwrap_used)]
// Integration tests for `CargoClient` using wiremock.

use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dustloop_api::{CargoClient, CargoQuery, Error};

#[derive(Debug, Deserialize, PartialEq)]
struct Row {
    chara: String,
    input: String,
    damage: Option<serde_json::Value>,
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CargoClient) {
    let server = MockServer::start().await;
    let endpoint = format!("{}/wiki/index.php", server.uri());
    let client = CargoClient::from_reqwest(&endpoint, reqwest::Client::new()).unwrap();
    (server, client)
}

fn query() -> CargoQuery {
    CargoQuery::new("MoveData_GGST")
        .fields(["chara", "input", "damage"])
        .order_by(["chara", "input"])
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_decodes_rows() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .and(query_param("title", "Special:CargoExport"))
        .and(query_param("tables", "MoveData_GGST"))
        .and(query_param("fields", "chara, input, damage"))
        .and(query_param("order by", "`chara`, `input`"))
        .and(query_param("limit", "9999"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "chara": "Sol Badguy", "input": "5K", "damage": 20 },
            { "chara": "Sol Badguy", "input": "2D", "damage": null },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rows: Vec<Row> = client.export(&query()).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].chara, "Sol Badguy");
    assert_eq!(rows[0].input, "5K");
    assert_eq!(rows[0].damage, Some(json!(20)));
    assert_eq!(rows[1].damage, None);
}

#[tokio::test]
async fn test_export_empty_table() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let rows: Vec<Row> = client.export(&query()).await.unwrap();
    assert!(rows.is_empty());
}

// ── Error paths ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result: Result<Vec<Row>, Error> = client.export(&query()).await;
    let err = result.unwrap_err();

    assert!(err.is_transient());
    assert_eq!(err.status(), Some(503));
    assert!(
        matches!(err, Error::Status { ref message, .. } if message == "maintenance"),
        "expected Status error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_export_html_instead_of_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Error</html>"))
        .mount(&server)
        .await;

    let result: Result<Vec<Row>, Error> = client.export(&query()).await;

    match result {
        Err(Error::Deserialization { body, .. }) => assert!(body.contains("<html>")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_export_rejects_partially_valid_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "chara": "Sol Badguy", "input": "5K", "damage": 20 },
            { "chara": "Sol Badguy" },
        ])))
        .mount(&server)
        .await;

    let result: Result<Vec<Row>, Error> = client.export(&query()).await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}
