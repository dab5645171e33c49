//! End-to-end tests against the full router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use spoken_time_server::{create_router, AppState, Server, ServerConfig};
use tower::ServiceExt;

const BOUNDARY: &str = "spoken-time-test-boundary";

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    let state = AppState::new(&config).expect("default config is valid");
    create_router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn upload_request(uri: &str, field: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"times.csv\"\r\n\
         Content-Type: text/csv\r\n\
         \r\n\
         {content}\r\n\
         --{b}--\r\n",
        b = BOUNDARY,
        field = field,
        content = content,
    );

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_query_half_past_seven() {
    let (status, body) = get("/api/v1/spoken-time?time=07:30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original"], "07:30");
    assert_eq!(body["spoken"], "half past seven");
}

#[tokio::test]
async fn test_query_noon_and_midnight() {
    let (_, body) = get("/api/v1/spoken-time?time=12:00").await;
    assert_eq!(body["spoken"], "noon");

    let (_, body) = get("/api/v1/spoken-time?time=00:00").await;
    assert_eq!(body["spoken"], "midnight");
}

#[tokio::test]
async fn test_query_non_aligned_minute() {
    let (status, body) = get("/api/v1/spoken-time?time=6:32").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original"], "06:32");
    assert_eq!(body["spoken"], "six thirty two");
}

#[tokio::test]
async fn test_path_quarter_to_ten() {
    let (status, body) = get("/api/v1/spoken-time/9/45").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original"], "09:45");
    assert_eq!(body["spoken"], "quarter to ten");
}

#[tokio::test]
async fn test_out_of_range_is_invalid_time() {
    let (status, body) = get("/api/v1/spoken-time?time=25:99").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_time");
    assert_eq!(body["message"], "hour must be between 0 and 23");

    let (status, body) = get("/api/v1/spoken-time/10/60").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "minute must be between 0 and 59");
}

#[tokio::test]
async fn test_malformed_input_is_invalid_time() {
    let cases = [
        ("/api/v1/spoken-time?time=badinput", "time must be in HH:mm format"),
        ("/api/v1/spoken-time?time=ab:cd", "invalid numeric time format"),
        ("/api/v1/spoken-time/seven/30", "invalid numeric time format"),
        ("/api/v1/spoken-time", "time parameter is required"),
        ("/api/v1/spoken-time?time=%20%20", "time parameter is required"),
    ];

    for (uri, message) in cases {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "Failed for {}", uri);
        assert_eq!(body["code"], "invalid_time", "Failed for {}", uri);
        assert_eq!(body["message"], message, "Failed for {}", uri);
    }
}

#[tokio::test]
async fn test_locale_param() {
    let (status, body) = get("/api/v1/spoken-time?time=07:30&locale=British").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spoken"], "half past seven");

    let (status, body) = get("/api/v1/spoken-time/7/30?locale=klingon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_time");
    assert_eq!(body["message"], "Unknown formatter: klingon");
}

#[tokio::test]
async fn test_upload_converts_in_order() {
    let request = upload_request(
        "/api/v1/spoken-time/upload",
        "file",
        "07:30,09:45\n12:00, 00:00\n\n6:32,23:55",
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let spoken: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["spoken"].as_str().unwrap())
        .collect();
    assert_eq!(
        spoken,
        vec![
            "half past seven",
            "quarter to ten",
            "noon",
            "midnight",
            "six thirty two",
            "five to twelve",
        ]
    );
    assert_eq!(body[4]["original"], "06:32");
}

#[tokio::test]
async fn test_upload_empty_file_is_invalid_file() {
    let request = upload_request("/api/v1/spoken-time/upload", "file", "");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_file");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid CSV format"));
}

#[tokio::test]
async fn test_upload_bad_entry_rejects_whole_file() {
    let request = upload_request("/api/v1/spoken-time/upload", "file", "07:30,25:00,09:45");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_file");
    assert!(body["message"].as_str().unwrap().contains("25:00"));
}

#[tokio::test]
async fn test_upload_missing_file_part() {
    let request = upload_request("/api/v1/spoken-time/upload", "document", "07:30");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_file");
}

#[tokio::test]
async fn test_upload_respects_batch_limit() {
    let mut config = ServerConfig::default();
    config.limits.max_batch_size = 2;

    let request = upload_request("/api/v1/spoken-time/upload", "file", "07:30,09:45,12:00");
    let (status, body) = send(app_with(config), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_file");
}

#[tokio::test]
async fn test_upload_over_size_limit_is_invalid_file() {
    let mut config = ServerConfig::default();
    config.limits.max_upload_bytes = 64;

    let content = vec!["07:30"; 40].join(",");
    let request = upload_request("/api/v1/spoken-time/upload", "file", &content);
    let (status, body) = send(app_with(config), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_file");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid CSV format"));
}

#[tokio::test]
async fn test_upload_under_size_limit_succeeds() {
    let mut config = ServerConfig::default();
    config.limits.max_upload_bytes = 512;

    let request = upload_request("/api/v1/spoken-time/upload", "file", "07:30,12:00");
    let (status, body) = send(app_with(config), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_server_router_serves_api() {
    let server = Server::new(ServerConfig::default()).unwrap();
    let request = Request::builder()
        .uri("/api/v1/spoken-time/12/0")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(server.router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spoken"], "noon");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (status, body) = get("/api/v1/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = get("/internal/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get("/internal/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = get("/internal/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["default_locale"], "british");
    assert_eq!(body["checks"]["locales"][0], "british");
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, body) = get("/api/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.0");
    assert!(body["paths"]["/api/v1/spoken-time/upload"]["post"].is_object());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/spoken-time?time=07:30")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = ServerConfig::default();
    config.formatter.default_locale = "klingon".to_string();
    assert!(AppState::new(&config).is_err());
}
