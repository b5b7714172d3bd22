use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fluency_lexicon::Lexicon;
use fluency_types::CountEntry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::matcher::{count_plurals, match_animals, strip_size_adjectives};

const MAX_OVERLAP_WORDS: usize = 10_000;

#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
    pub max_transcript_len: usize,
}

#[derive(Deserialize)]
pub struct CountRequest {
    pub transcript: String,
}

#[derive(Deserialize)]
pub struct OverlapRequest {
    pub words: Vec<String>,
}

#[derive(Serialize)]
pub struct WordCount {
    word: String,
    count: usize,
}

impl From<CountEntry> for WordCount {
    fn from(entry: CountEntry) -> Self {
        Self {
            word: entry.word,
            count: entry.count,
        }
    }
}

#[derive(Serialize)]
pub struct CountResponse {
    matches: Vec<WordCount>,
    unique_words: usize,
    total_mentions: usize,
    plural_overlap: usize,
    size_adjectives_stripped: Vec<WordCount>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots))
        .route("/v1/count", post(count))
        .route("/v1/overlap", post(overlap))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn robots() -> impl IntoResponse {
    "User-agent: *\nDisallow: /"
}

async fn count(
    State(state): State<AppState>,
    Json(req): Json<CountRequest>,
) -> Result<Response, ApiError> {
    if req.transcript.len() > state.max_transcript_len {
        return Err(ApiError::bad_request(format!(
            "transcript must be at most {} bytes",
            state.max_transcript_len
        )));
    }

    let (stripped_text, size_hits) =
        strip_size_adjectives(&req.transcript, state.lexicon.size_adjectives.entries());
    let matches = match_animals(&stripped_text, state.lexicon.animals.entries());
    let plural_overlap = count_plurals(&matches);

    let response = CountResponse {
        unique_words: matches.len(),
        total_mentions: matches.iter().map(|e| e.count).sum(),
        plural_overlap,
        matches: matches.into_iter().map(WordCount::from).collect(),
        size_adjectives_stripped: size_hits.into_iter().map(WordCount::from).collect(),
    };

    Ok(Json(response).into_response())
}

async fn overlap(Json(req): Json<OverlapRequest>) -> Result<Response, ApiError> {
    if req.words.len() > MAX_OVERLAP_WORDS {
        return Err(ApiError::bad_request(format!(
            "words must be at most {MAX_OVERLAP_WORDS} entries"
        )));
    }

    let overlap = fluency_plural::estimate_overlap(&req.words);
    Ok(Json(json!({ "overlap": overlap })).into_response())
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal => {
                let body = Json(json!({ "error": "internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
