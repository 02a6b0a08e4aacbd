mod common;

use std::time::Duration;

use common::{API_KEY, config, spawn_http_stub};
use tokio::net::TcpListener;
use veriface::gateway::{ReqwestTransport, USER_AGENT};
use veriface::{VeriFace, VerifaceError};

fn http_client(base_url: &str) -> VeriFace {
    let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
    VeriFace::with_transport(&config().with_api_url(base_url), transport)
}

#[tokio::test]
async fn test_find_over_http_sends_headers_and_body() {
    let (base_url, server) = spawn_http_stub(
        "200 OK",
        r#"[{"sessionId":"S1","status":"VERIFIED"}]"#,
    )
    .await;
    let client = http_client(&base_url);

    let found = client
        .find_verifications_by_reference_id("R1")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].session_id(), "S1");

    let raw = server.await.unwrap();
    let lowered = raw.to_ascii_lowercase();
    assert!(raw.starts_with("POST /public-api/v1/verification/find HTTP/1.1"));
    assert!(lowered.contains(&format!("apikey: {API_KEY}")));
    assert!(lowered.contains(&format!("user-agent: {USER_AGENT}")));
    assert!(lowered.contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"referenceId":"R1"}"#));
}

#[tokio::test]
async fn test_api_error_over_http() {
    let (base_url, server) =
        spawn_http_stub("404 Not Found", r#"{"code":"NOT_FOUND"}"#).await;
    let client = http_client(&base_url);

    let err = client.get_verification("S1", None).await.unwrap_err();
    assert_eq!(err.code(), Some("NOT_FOUND"));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /public-api/v1/verification/S1?locale=sk_SK HTTP/1.1"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = http_client(&format!("http://{addr}"));
    let err = client.delete("S1").await.unwrap_err();

    assert!(matches!(err, VerifaceError::Transport(ref e) if e.url.ends_with("/verification/S1")));
    assert_eq!(err.code(), None);
}
