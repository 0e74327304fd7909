//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::Notify;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Comment, CommentId};

pub const BASE_URL: &str = "http://localhost:8000/api";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }));
        self
    }

    pub fn respond_json<T: serde::Serialize>(self, status: u16, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap();
        self.respond(status, body)
    }

    pub fn unreachable(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())));
        async move { next }
    }
}

/// Holds every request open until the test releases it.
pub struct GatedTransport {
    response: HttpResponse,
    arrived: Notify,
    release: Notify,
}

impl GatedTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.into(),
            },
            arrived: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Resolves once a request has reached the transport.
    pub async fn arrived(&self) {
        self.arrived.notified().await;
    }

    /// Let the pending request complete.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

impl Transport for GatedTransport {
    fn execute(
        &self,
        _request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        self.arrived.notify_one();
        let response = self.response.clone();
        async move {
            self.release.notified().await;
            Ok(response)
        }
    }
}

pub fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
}

pub fn comment(id: CommentId, text: &str) -> Comment {
    Comment {
        id,
        author: "Bob".to_string(),
        text: text.to_string(),
        date: at(0, 0, 0),
        updated_at: Some(at(0, 0, 0)),
        likes: 0,
        image: None,
    }
}
