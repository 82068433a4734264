use std::collections::HashMap;

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use publitio_api_client::auth::sign;
use publitio_api_client::{Params, PublitioClient, PublitioError, UploadSource};

fn build_client(server: &MockServer) -> PublitioClient {
    PublitioClient::builder("test_key", "test_secret")
        .api_url(server.uri())
        .build()
}

fn query_map(request: &wiremock::Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn test_list_files_sends_signed_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "files_total": 0,
        "files": []
    });

    Mock::given(method("GET"))
        .and(path("/files/list"))
        .and(query_param("api_key", "test_key"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let files = client.list_files(Params::new().set("limit", 10)).await.unwrap();
    assert_eq!(files, response);

    let requests = server.received_requests().await.unwrap();
    let query = query_map(&requests[0]);

    let timestamp = &query["api_timestamp"];
    let nonce = &query["api_nonce"];
    let signature = &query["api_signature"];

    timestamp.parse::<i64>().unwrap();
    assert_eq!(nonce.len(), 8);
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(signature, &sign("test_secret", timestamp, nonce));
}

#[tokio::test]
async fn test_auth_fields_fresh_between_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"files": []})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.list_files(Params::new()).await.unwrap();
    client.list_files(Params::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let first = query_map(&requests[0]);
    let second = query_map(&requests[1]);
    assert_ne!(first["api_nonce"], second["api_nonce"]);
    assert_ne!(first["api_signature"], second["api_signature"]);
}

#[tokio::test]
async fn test_error_json_returned_verbatim() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"error": "not found"});

    Mock::given(method("GET"))
        .and(path("/files/show/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let value = client.show_file("missing").await.unwrap();
    assert_eq!(value, response);
}

#[tokio::test]
async fn test_unknown_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/list"))
        .respond_with(ResponseTemplate::new(301))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.list_files(Params::new()).await.unwrap_err();
    assert!(matches!(error, PublitioError::UnknownStatusCode(301)));
}

#[tokio::test]
async fn test_malformed_response_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.list_files(Params::new()).await.unwrap_err();
    match error {
        PublitioError::MalformedResponse { body } => assert!(body.contains("oops")),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_file_uploads_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/create"))
        .and(query_param("public_id", "sunset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let source = UploadSource::bytes("photo.jpg", &b"JPEGDATA"[..]);
    client
        .create_file(Some(source), Params::new().set("public_id", "sunset"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("photo.jpg"));
    assert!(body.contains("JPEGDATA"));
}

#[tokio::test]
async fn test_create_file_from_path_reads_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let file_path = std::env::temp_dir().join(format!("publitio-upload-{}.jpg", std::process::id()));
    std::fs::write(&file_path, b"DISKDATA").unwrap();

    let client = build_client(&server);
    let result = client
        .create_file(Some(UploadSource::path(&file_path)), Params::new())
        .await;
    std::fs::remove_file(&file_path).unwrap();
    result.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("DISKDATA"));
}

#[tokio::test]
async fn test_create_file_remote_url_is_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/create"))
        .and(query_param("file_url", "https://example.com/a.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let source = UploadSource::remote_url("https://example.com/a.png");
    client.create_file(Some(source), Params::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_update_file_sends_params_in_query() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/files/update/f1"))
        .and(query_param("title", "New title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .update_file("f1", Params::new().set("title", "New title"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_adtag_sends_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/players/adtags/update/a1"))
        .and(body_string_contains("name=spring"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .update_adtag("a1", Params::new().set("name", "spring"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = query_map(&requests[0]);
    assert!(query.contains_key("api_signature"));
    assert!(!query.contains_key("name"));
}

#[tokio::test]
async fn test_delete_file() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/files/delete/f1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let value = client.delete_file("f1").await.unwrap();
    assert_eq!(value["success"], serde_json::json!(true));
}

#[tokio::test]
async fn test_folders_tree() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "folders": [{"id": "root", "children": []}]
    });

    Mock::given(method("GET"))
        .and(path("/folders/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let tree = client.folders_tree().await.unwrap();
    assert_eq!(tree, response);
}

#[tokio::test]
async fn test_api_error_status_with_json_is_not_an_error() {
    // 422 is a known status; a well-formed JSON body comes back verbatim
    // and semantic interpretation is the caller's job.
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": false,
        "code": 422,
        "message": "Missing file parameter"
    });

    Mock::given(method("POST"))
        .and(path("/files/create"))
        .respond_with(ResponseTemplate::new(422).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let value = client.create_file(None, Params::new()).await.unwrap();
    assert_eq!(value["message"], serde_json::json!("Missing file parameter"));
}
