use itemize_engine::{
    ClientSettings, FailureKind, ItemValue, ParseClient, ParsedItem, ReqwestParseClient,
    GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestParseClient {
    ReqwestParseClient::new(ClientSettings {
        endpoint: format!("{}/parse", server.uri()),
    })
}

#[tokio::test]
async fn posts_content_as_json_and_decodes_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "content": "2x Widget 9.98" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "extracted_items": [
                { "product_name": "Widget", "quantity": 2, "price": 9.98 }
            ]
        })))
        .mount(&server)
        .await;

    let items = client_for(&server)
        .parse(1, "2x Widget 9.98")
        .await
        .expect("parse ok");

    assert_eq!(
        items,
        vec![ParsedItem {
            product_name: Some(ItemValue::Text("Widget".to_string())),
            quantity: Some(ItemValue::Number(2.0)),
            price: Some(ItemValue::Number(9.98)),
            ..ParsedItem::default()
        }]
    );
}

#[tokio::test]
async fn missing_extracted_items_field_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let items = client_for(&server).parse(1, "abc").await.expect("parse ok");
    assert_eq!(items, Vec::new());
}

#[tokio::test]
async fn null_extracted_items_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "extracted_items": null })))
        .mount(&server)
        .await;

    let items = client_for(&server).parse(1, "abc").await.expect("parse ok");
    assert_eq!(items, Vec::new());
}

#[tokio::test]
async fn rejection_surfaces_detail_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "detail": "Invalid invoice" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).parse(1, "abc").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Rejected { status: 422 });
    assert_eq!(err.message, "Invalid invoice");
}

#[tokio::test]
async fn rejection_without_detail_uses_the_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).parse(1, "abc").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Rejected { status: 500 });
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn rejection_with_empty_detail_uses_the_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "detail": "" })))
        .mount(&server)
        .await;

    let err = client_for(&server).parse(1, "abc").await.unwrap_err();
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn undecodable_rejection_body_is_a_malformed_body_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server).parse(1, "abc").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn undecodable_success_body_is_a_malformed_body_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).parse(1, "abc").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    let client = ReqwestParseClient::new(ClientSettings {
        // Port 1 is never listening.
        endpoint: "http://127.0.0.1:1/parse".to_string(),
    });

    let err = client.parse(1, "abc").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.message.is_empty());
}
