use super::*;

#[test]
fn note_listing_decodes_camel_case_wire_format() {
    let body = r#"{
        "notes": [
            {
                "id": "n-1",
                "userId": "u-1",
                "content": "first idea",
                "createdAt": "2025-01-01T00:00:00Z",
                "updatedAt": "2025-01-02T00:00:00Z"
            }
        ],
        "pagination": {"currentPage": 1, "limit": 10, "totalCount": 14, "totalPages": 2}
    }"#;

    let listing: NoteListResponse = serde_json::from_str(body).expect("decode");
    assert_eq!(listing.notes.len(), 1);
    assert_eq!(listing.notes[0].user_id, "u-1");
    assert_eq!(listing.pagination.current_page, 1);
    assert_eq!(listing.pagination.total_pages, 2);
}

#[test]
fn register_response_ignores_token_and_defaults_verification() {
    // The token must stay opaque to this layer; decoding drops it.
    let body = r#"{"message":"welcome","token":"abc123"}"#;
    let resp: RegisterResponse = serde_json::from_str(body).expect("decode");
    assert_eq!(resp.message, "welcome");
    assert!(!resp.is_verification_required);

    let body = r#"{"message":"check your mail","isVerificationRequired":true}"#;
    let resp: RegisterResponse = serde_json::from_str(body).expect("decode");
    assert!(resp.is_verification_required);
}

#[test]
fn feedback_entry_decodes_without_update_stamp() {
    let body = r#"{"id":"f-1","question":"q","answer":"a","createdAt":"2025-01-01T00:00:00Z"}"#;
    let entry: FeedbackEntry = serde_json::from_str(body).expect("decode");
    assert_eq!(entry.id, "f-1");
    assert!(entry.updated_at.is_none());
}
