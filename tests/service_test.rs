//! Invocation-level tests for the MCP service layer
//!
//! Exercises the full lookup → validate → execute → format flow against a
//! mock Kagi API, without going through a protocol transport.

use kagi_mcp::kagi_client::{KagiClient, KagiConfig};
use kagi_mcp::registry::ToolError;
use kagi_mcp::service::KagiMcpService;
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> KagiMcpService {
    let config = KagiConfig::new("test-key").with_base_url(server.uri());
    KagiMcpService::new(KagiClient::new(&config).unwrap())
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test args must be an object")
}

#[tokio::test]
async fn unknown_tool_is_rejected_regardless_of_arguments() {
    let server = MockServer::start().await;
    let service = service_for(&server);

    let err = service
        .invoke("nonexistent_tool", &args(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::UnknownTool(_)));
    assert_eq!(
        err.to_string(),
        "UnknownToolError: no tool named 'nonexistent_tool'"
    );

    let err = service
        .invoke("nonexistent_tool", &args(json!({"query": "anything"})))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(_)));
}

#[tokio::test]
async fn search_invocation_renders_numbered_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "A", "url": "http://a", "snippet": "s1"}]
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let text = service
        .invoke("search", &args(json!({"query": "x"})))
        .await
        .unwrap();

    assert_eq!(text, "1. A — http://a\n   s1");
}

#[tokio::test]
async fn validation_failure_lists_every_violation_without_network_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service
        .invoke("search", &args(json!({"limit": "ten"})))
        .await
        .unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("ValidationError:"), "got: {}", message);
    assert!(message.contains("missing required parameter 'query'"));
    assert!(message.contains("parameter 'limit' must be of type integer, got string"));
}

#[tokio::test]
async fn upstream_failure_renders_kind_prefixed_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": [{"code": 401, "msg": "Invalid API key"}]
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service
        .invoke("search", &args(json!({"query": "x"})))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("UpstreamError:"), "got: {}", message);
    assert!(message.contains("401"));
    // The API key never leaks into caller-visible messages
    assert!(!message.contains("test-key"));
}

#[tokio::test]
async fn summarize_invocation_appends_engine_attribution() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .and(body_partial_json(json!({"engine": "cecil"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"output": "A concise summary."}
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let text = service
        .invoke(
            "summarize",
            &args(json!({"target": "https://example.com/doc"})),
        )
        .await
        .unwrap();

    assert_eq!(text, "A concise summary.\n\nSummarized by engine: cecil");
}

#[tokio::test]
async fn summarize_forwards_explicit_engine() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .and(body_partial_json(json!({"engine": "daphne", "summary_type": "takeaway"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"output": "- key point"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let text = service
        .invoke(
            "summarize",
            &args(json!({
                "target": "https://example.com/doc",
                "engine": "daphne",
                "summary_type": "takeaway"
            })),
        )
        .await
        .unwrap();

    assert_eq!(text, "- key point\n\nSummarized by engine: daphne");
}

#[tokio::test]
async fn invalid_engine_name_fails_validation_without_network_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service
        .invoke(
            "summarize",
            &args(json!({"target": "https://example.com", "engine": "hal9000"})),
        )
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("ValidationError:"), "got: {}", message);
    assert!(message.contains("cecil"));
}

#[tokio::test]
async fn concurrent_invocations_do_not_interfere() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "Alpha", "url": "http://alpha", "snippet": "a"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"output": "Beta summary."}
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let search_args = args(json!({"query": "alpha"}));
    let summarize_args = args(json!({"target": "https://example.com/beta"}));
    let search = service.invoke("search", &search_args);
    let summarize = service.invoke("summarize", &summarize_args);

    let (search_text, summary_text) = tokio::join!(search, summarize);

    assert_eq!(search_text.unwrap(), "1. Alpha — http://alpha\n   a");
    assert_eq!(
        summary_text.unwrap(),
        "Beta summary.\n\nSummarized by engine: cecil"
    );
}
