use std::time::{Duration, Instant};

use itemize_engine::{ClientSettings, EngineEvent, EngineHandle};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event before deadline");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn submitted_requests_complete_with_their_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "extracted_items": [] })))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ClientSettings {
        endpoint: format!("{}/parse", server.uri()),
    });
    engine.submit(7, "abc");

    match wait_for_event(&engine).await {
        EngineEvent::ParseCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result, Ok(Vec::new()));
        }
    }
}

#[tokio::test]
async fn failures_are_reported_as_events_too() {
    let engine = EngineHandle::new(ClientSettings {
        endpoint: "http://127.0.0.1:1/parse".to_string(),
    });
    engine.submit(3, "abc");

    match wait_for_event(&engine).await {
        EngineEvent::ParseCompleted { request_id, result } => {
            assert_eq!(request_id, 3);
            assert!(result.is_err());
        }
    }
}
