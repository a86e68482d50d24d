use super::*;

#[test]
fn message_from_body_extracts_server_message() {
    assert_eq!(message_from_body(r#"{"message":"email taken"}"#), "email taken");
}

#[test]
fn message_from_body_handles_non_json() {
    assert_eq!(message_from_body("<html>502</html>"), "");
}

#[test]
fn message_from_body_handles_missing_field() {
    assert_eq!(message_from_body(r#"{"error":"nope"}"#), "");
}

#[test]
fn server_message_only_for_non_empty_server_errors() {
    let rejected = ApiError::Server {
        status: 401,
        message: "bad credentials".to_owned(),
    };
    assert_eq!(rejected.server_message(), Some("bad credentials"));

    let silent = ApiError::Server {
        status: 500,
        message: String::new(),
    };
    assert_eq!(silent.server_message(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
}
