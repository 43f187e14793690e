use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bulletsmith::config::Config;
use bulletsmith::llm_client::{CompletionProvider, GeminiClient, LlmError, Prompt};

fn config_for(server: &MockServer) -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        gemini_endpoint: server.uri(),
        port: 8080,
        rust_log: "info".to_string(),
    }
}

fn sample_prompt() -> Prompt {
    Prompt {
        system_instruction: "You are an expert career coach.".to_string(),
        user_message: "Generate the 5 resume bullet points.".to_string(),
    }
}

#[tokio::test]
async fn posts_the_expected_request_and_returns_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 512 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "1. Did X\n2. Did Y" }] },
                "finishReason": "STOP"
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let reply = client.complete(&sample_prompt()).await.unwrap();

    assert_eq!(reply, "1. Did X\n2. Did Y");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        sent["systemInstruction"]["parts"][0]["text"],
        "You are an expert career coach."
    );
    assert_eq!(
        sent["contents"][0]["parts"][0]["text"],
        "Generate the 5 resume bullet points."
    );
    let temperature = sent["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn api_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let err = client.complete(&sample_prompt()).await.unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let err = client.complete(&sample_prompt()).await.unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("Service Unavailable"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidate_list_is_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let err = client.complete(&sample_prompt()).await.unwrap_err();

    assert!(matches!(err, LlmError::EmptyContent));
}

#[tokio::test]
async fn whitespace_only_reply_is_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  \n " }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let err = client.complete(&sample_prompt()).await.unwrap_err();

    assert!(matches!(err, LlmError::EmptyContent));
}

#[tokio::test]
async fn multiple_parts_are_concatenated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "- Did X\n" }, { "text": "- Did Y" }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&config_for(&server)).unwrap();
    let reply = client.complete(&sample_prompt()).await.unwrap();

    assert_eq!(reply, "- Did X\n- Did Y");
}
