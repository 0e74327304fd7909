//! Stateless HTTP request builder and response parser for the comments API.
//!
//! # Design
//! `CommentClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The backend routes end with a trailing
//! slash (`/comments/`, `/comments/{id}/`) and the paths keep it.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{validate_text, Comment, CommentId, CreateComment, UpdateComment};

/// Default endpoint of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Synchronous, stateless client for the comments API.
#[derive(Debug, Clone)]
pub struct CommentClient {
    base_url: String,
}

impl Default for CommentClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CommentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/comments/", self.base_url)
    }

    fn item_url(&self, id: CommentId) -> String {
        format!("{}/comments/{id}/", self.base_url)
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_comment(&self, id: CommentId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_comment(&self, input: &CreateComment) -> Result<HttpRequest, ApiError> {
        validate_text(&input.text)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_comment(
        &self,
        id: CommentId,
        input: &UpdateComment,
    ) -> Result<HttpRequest, ApiError> {
        validate_text(&input.text)?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            url: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_comment(&self, id: CommentId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Any 2xx is accepted; the body, if any, is ignored.
    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
