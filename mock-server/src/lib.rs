//! Development backend for the comment board.
//!
//! Serves `/api/comments/` with the same shape and validation rules as the
//! production backend: newest comments first, blank text rejected with 400,
//! `updated_at` stamped only when an edit actually changes the text.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub const DEFAULT_AUTHOR: &str = "Admin";
pub const EMPTY_TEXT_MESSAGE: &str = "Comment text cannot be empty.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub likes: i64,
    pub image: String,
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub text: String,
    pub author: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateComment {
    pub text: Option<String>,
}

/// One entry of a seed file: `{"comments": [...]}`.
#[derive(Deserialize)]
pub struct SeedComment {
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub image: String,
}

#[derive(Deserialize)]
struct SeedFile {
    comments: Vec<SeedComment>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    comments: HashMap<u64, Comment>,
}

impl Store {
    /// Build a store from seed JSON, assigning ids in file order.
    pub fn from_seed(raw: &str) -> Result<Self, serde_json::Error> {
        let seed: SeedFile = serde_json::from_str(raw)?;
        let mut store = Store::default();
        for entry in seed.comments {
            let id = store.allocate_id();
            store.comments.insert(
                id,
                Comment {
                    id,
                    author: entry.author,
                    text: entry.text,
                    date: entry.date,
                    updated_at: None,
                    likes: entry.likes,
                    image: entry.image,
                },
            );
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Newest first; ties broken by id, highest first.
    fn ordered(&self) -> Vec<Comment> {
        let mut all: Vec<Comment> = self.comments.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        all
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let comments = Router::new()
        .route("/comments/", get(list_comments).post(create_comment))
        .route(
            "/comments/{id}/",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
        .with_state(db);
    Router::new().nest("/api", comments)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." })))
}

fn validate_text(text: &str) -> ApiResult<()> {
    if text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "text": [EMPTY_TEXT_MESSAGE] })),
        ));
    }
    Ok(())
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    Json(db.read().await.ordered())
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CreateComment>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    validate_text(&input.text)?;
    let mut store = db.write().await;
    let id = store.allocate_id();
    let comment = Comment {
        id,
        author: input
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        text: input.text,
        date: Utc::now(),
        updated_at: None,
        likes: 0,
        image: String::new(),
    };
    store.comments.insert(id, comment.clone());
    debug!(id, "created comment");
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn get_comment(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Comment>> {
    let store = db.read().await;
    store.comments.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateComment>,
) -> ApiResult<Json<Comment>> {
    let mut store = db.write().await;
    let comment = store.comments.get_mut(&id).ok_or_else(not_found)?;
    if let Some(text) = input.text {
        validate_text(&text)?;
        if text != comment.text {
            comment.text = text;
            comment.updated_at = Some(Utc::now());
        }
    }
    debug!(id, "updated comment");
    Ok(Json(comment.clone()))
}

async fn delete_comment(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    store
        .comments
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}
