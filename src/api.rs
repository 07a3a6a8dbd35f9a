use crate::{models::SuggestionQuery, out, stream, AppState};
use axum::{
    extract::{Extension, Query},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response, Sse},
};
use std::sync::Arc;

/// Liveness check. Always succeeds with a fixed acknowledgement body.
pub async fn test_endpoint() -> Json<serde_json::Value> {
    out::info("api", "Test endpoint hit");
    Json(serde_json::json!({ "message": "Backend server is working!" }))
}

/// Streams a canned suggestion for the submitted code over SSE.
///
/// `code` must be present and non-empty; an empty or missing value is
/// rejected with 400 before any stream is opened. Whitespace-only code is
/// deliberately accepted (no trimming). `language` defaults to "javascript"
/// when absent or empty.
pub async fn complete_code_stream(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SuggestionQuery>,
) -> Response {
    let code = match query.code {
        Some(ref code) if !code.is_empty() => code,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Code is required"})),
            )
                .into_response();
        }
    };

    let language = match query.language.as_deref() {
        Some(language) if !language.is_empty() => language,
        _ => "javascript",
    };
    out::info("api", &format!("Streaming suggestion for '{}' code", language));

    let suggestion = state.patterns.resolve(code, language);
    let mut response =
        Sse::new(stream::stream_lines(&suggestion, stream::DEFAULT_INTERVAL)).into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternTable;
    use axum::http::header;

    fn state() -> Extension<Arc<AppState>> {
        Extension(Arc::new(AppState {
            patterns: PatternTable::new(),
        }))
    }

    fn query(code: Option<&str>, language: Option<&str>) -> Query<SuggestionQuery> {
        Query(SuggestionQuery {
            code: code.map(str::to_string),
            language: language.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_endpoint_acknowledges() {
        let Json(body) = test_endpoint().await;
        assert_eq!(body["message"], "Backend server is working!");
    }

    #[tokio::test]
    async fn missing_code_is_rejected() {
        let response = complete_code_stream(state(), query(None, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_code_is_rejected() {
        let response = complete_code_stream(state(), query(Some(""), Some("typescript"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejection_carries_the_error_body() {
        let response = complete_code_stream(state(), query(None, None)).await;
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(bytes.as_ref(), br#"{"error":"Code is required"}"#);
    }

    #[tokio::test]
    async fn whitespace_only_code_opens_a_stream() {
        // Present-but-blank code is valid; only the empty string is rejected.
        let response = complete_code_stream(state(), query(Some("   "), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn stream_response_uses_sse_headers() {
        let response =
            complete_code_stream(state(), query(Some("function foo(){}"), Some("typescript")))
                .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );
        assert_eq!(
            response.headers().get(header::CONNECTION).unwrap(),
            "keep-alive"
        );
    }

    #[tokio::test]
    async fn empty_language_opens_a_stream() {
        // An empty language parameter falls back to javascript rather than
        // hitting the unknown-language placeholder.
        let response = complete_code_stream(state(), query(Some("function f(){}"), Some(""))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
    }
}
