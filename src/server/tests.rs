//! Tests for the HTTP surface using a mocked search gateway.

use std::sync::Arc;

use axum::response::IntoResponse;
use http::StatusCode;

use super::{AppState, PageError, router};
use crate::github::gateway::MockSearchGateway;
use crate::github::{DashboardError, PullRequestSummary};

async fn serve(gateway: MockSearchGateway) -> String {
    let state = AppState::new(Arc::new(gateway));
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("server should serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_responds_ok() {
    let base = serve(MockSearchGateway::new()).await;

    let response = reqwest::get(format!("{base}/healthz"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("body should read"), "ok");
}

#[tokio::test]
async fn dashboard_page_renders_grouped_pull_requests() {
    let mut gateway = MockSearchGateway::new();
    gateway.expect_search_pull_requests().returning(|query| {
        if query.ends_with("draft:true") {
            Ok(vec![PullRequestSummary {
                title: "Add polish".to_owned(),
                url: "https://github.com/octo/widgets/pull/7".to_owned(),
                author: Some("octocat".to_owned()),
            }])
        } else {
            Ok(Vec::new())
        }
    });
    let base = serve(gateway).await;

    let response = reqwest::get(format!("{base}/octo/widgets"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("text/html"),
        "page should be HTML, got {content_type}"
    );

    let body = response.text().await.expect("body should read");
    assert!(body.contains("octo/widgets pull requests"), "missing title: {body}");
    assert!(body.contains("Drafts (1)"), "missing drafts count: {body}");
    assert!(body.contains("Ready to merge (0)"), "missing empty group: {body}");
}

#[tokio::test]
async fn upstream_failure_becomes_bad_gateway() {
    let mut gateway = MockSearchGateway::new();
    gateway.expect_search_pull_requests().returning(|_| {
        Err(DashboardError::Network {
            message: "connection reset".to_owned(),
        })
    });
    let base = serve(gateway).await;

    let response = reqwest::get(format!("{base}/octo/widgets"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
}

#[test]
fn page_error_maps_statuses() {
    let cases = [
        (
            PageError(DashboardError::InvalidRepository { segment: "owner" }),
            StatusCode::BAD_REQUEST,
        ),
        (PageError(DashboardError::MissingToken), StatusCode::INTERNAL_SERVER_ERROR),
        (
            PageError(DashboardError::Authentication {
                message: "bad credentials".to_owned(),
            }),
            StatusCode::BAD_GATEWAY,
        ),
        (
            PageError(DashboardError::Api {
                message: "boom".to_owned(),
            }),
            StatusCode::BAD_GATEWAY,
        ),
        (
            PageError(DashboardError::Template {
                message: "broken".to_owned(),
            }),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}
