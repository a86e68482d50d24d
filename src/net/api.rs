//! REST endpoint wrappers for the note API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin, with
//! the session cookie attached by the browser on every request.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns `Result<_, ApiError>`; a non-2xx response is turned
//! into [`ApiError::Server`] with the message extracted from the body, so
//! callers can show it or fall back to their own generic string.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{FeedbackEntry, FeedbackResponse, Note, NoteListResponse, RegisterResponse};

/// Map a non-2xx response into [`ApiError::Server`].
#[cfg(feature = "hydrate")]
async fn reject(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Server {
        status,
        message: super::error::message_from_body(&body),
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Verify the current session via `GET /auth/me`.
///
/// Any 2xx means the session is valid; everything else, including a network
/// failure, is an error the caller treats as "not authenticated".
pub async fn fetch_session() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/auth/me")
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /auth/login`. Success implies the server set the
/// session credential.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the session via `POST /auth/logout`.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/logout")
            .json(&serde_json::json!({}))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
pub async fn register(email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<RegisterResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Save a new note via `POST /note`.
pub async fn create_note(content: &str) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/note")
            .json(&serde_json::json!({ "content": content }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<Note>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the note history via `GET /note?page&limit`.
pub async fn fetch_notes(page: u32, limit: u32) -> Result<NoteListResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/note?page={page}&limit={limit}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<NoteListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single note via `GET /note/:id`.
pub async fn fetch_note(id: &str) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/note/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<Note>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Replace a note's content via `PUT /note/:id`.
pub async fn update_note(id: &str, content: &str) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/note/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(&serde_json::json!({ "content": content }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<Note>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, content);
        Err(ApiError::Unavailable)
    }
}

/// Delete a note via `DELETE /note/:id`.
pub async fn delete_note(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/note/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Request AI commentary for note text via `POST /feedback`.
pub async fn create_feedback(note: &str) -> Result<FeedbackResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/feedback")
            .json(&serde_json::json!({ "note": note }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<FeedbackResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = note;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stored note/commentary history via `GET /feedback`.
pub async fn fetch_feedbacks() -> Result<Vec<FeedbackEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/feedback")
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<Vec<FeedbackEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one stored entry via `GET /feedback/:id`.
pub async fn fetch_feedback(id: &str) -> Result<FeedbackEntry, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/feedback/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<FeedbackEntry>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
