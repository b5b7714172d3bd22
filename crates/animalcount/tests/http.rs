use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use animalcount::handlers::{AppState, router};
use fluency_lexicon::Lexicon;

fn make_state() -> AppState {
    let tempdir = tempfile::tempdir().unwrap();
    let size_path = tempdir.path().join("size_adjectives.csv");
    let animal_path = tempdir.path().join("animals.csv");
    std::fs::write(&size_path, b"big\nsmall\nlittle\n").unwrap();
    std::fs::write(&animal_path, b"cats\ncat\ndog\nmouse\nmice\n").unwrap();
    let lexicon = Lexicon::load(&size_path, &animal_path).unwrap();
    AppState {
        lexicon: Arc::new(lexicon),
        max_transcript_len: 1024,
    }
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn healthz_ok() {
    let app = router(make_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn count_endpoint_scores_transcript() {
    let app = router(make_state());
    let response = app
        .oneshot(post_json(
            "/v1/count",
            serde_json::json!({"transcript": "I saw a big cat and a dog"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["unique_words"], 2);
    assert_eq!(body["total_mentions"], 2);
    assert_eq!(body["plural_overlap"], 0);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches[0]["word"], "cat");
    assert_eq!(matches[0]["count"], 1);
    assert_eq!(matches[1]["word"], "dog");
    let stripped = body["size_adjectives_stripped"].as_array().unwrap();
    assert_eq!(stripped[0]["word"], "big");
}

#[tokio::test]
async fn count_endpoint_reports_plural_overlap() {
    let app = router(make_state());
    let response = app
        .oneshot(post_json(
            "/v1/count",
            serde_json::json!({"transcript": "cats and a mouse and mice"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["unique_words"], 3);
    assert_eq!(body["plural_overlap"], 1);
}

#[tokio::test]
async fn count_endpoint_accepts_empty_transcript() {
    let app = router(make_state());
    let response = app
        .oneshot(post_json("/v1/count", serde_json::json!({"transcript": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["matches"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_mentions"], 0);
    assert_eq!(body["plural_overlap"], 0);
}

#[tokio::test]
async fn count_endpoint_rejects_oversized_transcript() {
    let app = router(make_state());
    let transcript = "cat ".repeat(600);
    let response = app
        .oneshot(post_json(
            "/v1/count",
            serde_json::json!({"transcript": transcript}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("transcript")
    );
}

#[tokio::test]
async fn overlap_endpoint_counts_pairs() {
    let app = router(make_state());
    let response = app
        .oneshot(post_json(
            "/v1/overlap",
            serde_json::json!({"words": ["cat", "cats", "dog"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["overlap"], 1);
}

#[tokio::test]
async fn overlap_endpoint_accepts_empty_list() {
    let app = router(make_state());
    let response = app
        .oneshot(post_json("/v1/overlap", serde_json::json!({"words": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["overlap"], 0);
}
