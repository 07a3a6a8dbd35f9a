use serde::{Deserialize, Serialize};

/// Query parameters accepted by `/api/complete-code-stream`.
#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub code: Option<String>,
    pub language: Option<String>,
}

/// Payload carried in the `data` field of each SSE frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChunk {
    pub content: String,
}
