//! Wire types matching the note API's JSON (camelCase on the wire).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A saved note record as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Pagination block accompanying a note listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub limit: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Response of `GET /note?page&limit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<Note>,
    pub pagination: Pagination,
}

/// Response of `POST /auth/register`.
///
/// The server may also return a token here; it is deliberately not
/// deserialized. The session credential is cookie-borne and opaque to this
/// layer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default)]
    pub is_verification_required: bool,
}

/// AI commentary returned for a submitted note.
#[derive(Clone, Debug, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// A stored note/commentary pair from the feedback history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}
