//! Async comments API: `CommentClient` paired with a `Transport`.

use tracing::debug;

use crate::client::CommentClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Comment, CommentId, CreateComment, UpdateComment};

#[derive(Debug, Clone)]
pub struct CommentApi<T> {
    client: CommentClient,
    transport: T,
}

impl<T: Transport> CommentApi<T> {
    pub fn new(client: CommentClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CommentClient {
        &self.client
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    pub async fn list(&self) -> Result<Vec<Comment>, ApiError> {
        let response = self.send(self.client.build_list_comments()).await?;
        self.client.parse_list_comments(response)
    }

    pub async fn get(&self, id: CommentId) -> Result<Comment, ApiError> {
        let response = self.send(self.client.build_get_comment(id)).await?;
        self.client.parse_get_comment(response)
    }

    pub async fn create(&self, text: &str) -> Result<Comment, ApiError> {
        let request = self.client.build_create_comment(&CreateComment::new(text))?;
        let response = self.send(request).await?;
        self.client.parse_create_comment(response)
    }

    pub async fn update(&self, id: CommentId, text: &str) -> Result<Comment, ApiError> {
        let request = self
            .client
            .build_update_comment(id, &UpdateComment::new(text))?;
        let response = self.send(request).await?;
        self.client.parse_update_comment(response)
    }

    pub async fn delete(&self, id: CommentId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_comment(id)).await?;
        self.client.parse_delete_comment(response)
    }
}
