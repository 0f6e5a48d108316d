// Integration tests for the option provider HTTP API

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use rundeck_options::http::router;
use rundeck_options::RundeckOption;
use serde_json::Value;
use tower::ServiceExt;

use crate::common::{basic_auth, create_test_services, TEST_PASSWORD, TEST_USER};

fn app() -> Router {
    router(create_test_services())
}

async fn get(uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(TEST_USER, TEST_PASSWORD))
        .body(Body::empty())
        .unwrap();
    app().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn options(uri: &str) -> Vec<RundeckOption> {
    let response = get(uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri} should succeed");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn values(options: &[RundeckOption]) -> Vec<&str> {
    options.iter().map(|o| o.value.as_str()).collect()
}

#[tokio::test]
async fn test_health_is_anonymous() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_missing_credentials_challenged() {
    let request = Request::builder()
        .uri("/rundeck/options/artifactId?g=com.example")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::WWW_AUTHENTICATE],
        "Basic realm=\"Test Realm\""
    );
    let body = json_body(response).await;
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_wrong_password_challenged() {
    let request = Request::builder()
        .uri("/rundeck/options/version?a=lib")
        .header(header::AUTHORIZATION, basic_auth(TEST_USER, "wrong"))
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_post_not_allowed() {
    let request = Request::builder()
        .method("POST")
        .uri("/rundeck/options/artifactId?g=com.example")
        .header(header::AUTHORIZATION, basic_auth(TEST_USER, TEST_PASSWORD))
        .body(Body::from("{}"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_non_json_accept_rejected() {
    let request = Request::builder()
        .uri("/rundeck/options/artifactId?g=com.example")
        .header(header::AUTHORIZATION, basic_auth(TEST_USER, TEST_PASSWORD))
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_json_accept_served() {
    let request = Request::builder()
        .uri("/rundeck/options/artifactId?g=com.example")
        .header(header::AUTHORIZATION, basic_auth(TEST_USER, TEST_PASSWORD))
        .header(header::ACCEPT, "text/html, application/json;q=0.9")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn test_unknown_repository_is_bad_request() {
    for uri in [
        "/rundeck/options/artifactId?r=thirdparty&g=com.example",
        "/rundeck/options/version?r=thirdparty&a=lib",
    ] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");

        let body = json_body(response).await;
        assert_eq!(body["error"], "No repository at thirdparty");
        assert_eq!(body["status"], 400);
    }
}

/// artifactIds come back sorted and deduplicated, name equal to value
#[tokio::test]
async fn test_artifact_ids_sorted_unique() {
    let result = options("/rundeck/options/artifactId?g=com.example").await;

    assert_eq!(values(&result), vec!["api", "lib", "web"]);
    assert!(result.iter().all(|o| o.name == o.value));
}

#[tokio::test]
async fn test_artifact_ids_scoped_to_repository() {
    let result = options("/rundeck/options/artifactId?r=snapshots&g=com.example").await;
    assert_eq!(values(&result), vec!["lib"]);
}

#[tokio::test]
async fn test_artifact_ids_without_terms_empty() {
    let result = options("/rundeck/options/artifactId?r=releases").await;
    assert!(result.is_empty());
}

/// Versions sort newest first by Maven rules, not lexically
#[tokio::test]
async fn test_versions_sorted_descending() {
    let result = options("/rundeck/options/version?r=releases&g=com.example&a=lib").await;

    assert_eq!(values(&result), vec!["1.10", "1.9", "1.2", "1.1-beta", "1.0"]);
}

/// A version listed twice keeps the timestamp of its first occurrence
#[tokio::test]
async fn test_versions_deduplicated_across_repositories() {
    let result = options("/rundeck/options/version?g=com.example&a=lib").await;

    assert_eq!(
        values(&result),
        vec!["2.0-SNAPSHOT", "1.10", "1.9", "1.3-SNAPSHOT", "1.2", "1.1-beta", "1.0"]
    );
    let oldest = result.last().unwrap();
    assert_eq!(oldest.name, "1.0 (2011-06-01T08:30:00)");
}

#[tokio::test]
async fn test_version_display_name() {
    let result = options("/rundeck/options/version?r=releases&a=api").await;

    assert_eq!(result, vec![RundeckOption::new("2.0 (2011-06-06T08:30:00)", "2.0")]);
}

/// Vendor qualifiers rank above service packs
#[tokio::test]
async fn test_versions_unknown_qualifier_order() {
    let result = options("/rundeck/options/version?r=releases&g=org.other&a=server").await;

    assert_eq!(values(&result), vec!["1.0-jboss", "1.0-sp1", "1.0"]);
}

#[tokio::test]
async fn test_versions_limit() {
    let result = options("/rundeck/options/version?r=releases&a=lib&g=com.example&l=2").await;
    assert_eq!(values(&result), vec!["1.10", "1.9"]);
}

#[tokio::test]
async fn test_versions_invalid_limit_ignored() {
    for limit in ["0", "-3", "abc", ""] {
        let uri = format!("/rundeck/options/version?r=releases&g=com.example&a=lib&l={limit}");
        let result = options(&uri).await;
        assert_eq!(result.len(), 5, "l={limit} should not limit");
    }
}

/// Keywords come first, RELEASE before LATEST, and are not counted by `l`
#[tokio::test]
async fn test_versions_keywords() {
    let result = options(
        "/rundeck/options/version?r=releases&g=com.example&a=lib\
         &includeLatest=true&includeRelease=TRUE&l=1",
    )
    .await;

    assert_eq!(values(&result), vec!["RELEASE", "LATEST", "1.10"]);
    assert_eq!(result[0].name, "RELEASE");
    assert_eq!(result[1].name, "LATEST");
}

#[tokio::test]
async fn test_versions_keywords_without_matches() {
    let result =
        options("/rundeck/options/version?r=releases&a=missing&includeLatest=true").await;
    assert_eq!(values(&result), vec!["LATEST"]);
}

#[tokio::test]
async fn test_versions_keyword_flag_requires_true() {
    let result =
        options("/rundeck/options/version?r=releases&a=api&includeLatest=yes&includeRelease=1")
            .await;
    assert_eq!(values(&result), vec!["2.0"]);
}

/// The first value of a repeated parameter wins
#[tokio::test]
async fn test_repeated_parameter_first_wins() {
    let result = options("/rundeck/options/version?r=releases&a=api&a=web").await;
    assert_eq!(values(&result), vec!["2.0"]);
}

#[tokio::test]
async fn test_unknown_terms_ignored() {
    let result = options("/rundeck/options/artifactId?g=org.other&foo=bar").await;
    assert_eq!(values(&result), vec!["lib", "server"]);
}
