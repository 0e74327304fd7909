//! In-memory comment list kept consistent with server responses.
//!
//! # Design
//! `CommentBoard` owns the ordered collection and is the only thing that
//! mutates it. Every mutation waits for the server's answer and then patches
//! the collection from the single item in that answer: create prepends,
//! update replaces by id, delete removes by id. Nothing is applied
//! optimistically, so a failed request leaves the collection untouched.
//!
//! The state sits behind an async mutex that is only taken after the
//! network call has settled. Independent operations may therefore run
//! concurrently and the last response to settle wins.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::api::CommentApi;
use crate::confirm::Confirm;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{validate_text, Comment, CommentId};

pub const LOAD_FAILED: &str = "Failed to load comments. Please try again later.";
pub const ADD_FAILED: &str = "Failed to add comment. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update comment. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete comment. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this comment?";

/// Lifecycle of the comment collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardState {
    /// The initial list request has not settled yet.
    Loading,
    /// The collection is usable. `error` holds the last user-facing failure
    /// until it is dismissed or a later operation succeeds.
    Ready {
        items: Vec<Comment>,
        error: Option<String>,
    },
}

impl BoardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, BoardState::Loading)
    }

    pub fn items(&self) -> &[Comment] {
        match self {
            BoardState::Loading => &[],
            BoardState::Ready { items, .. } => items,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BoardState::Loading => None,
            BoardState::Ready { error, .. } => error.as_deref(),
        }
    }

    /// Apply `f` to the ready collection, leaving `Loading` first if needed.
    fn settle(&mut self, f: impl FnOnce(&mut Vec<Comment>, &mut Option<String>)) {
        let (mut items, mut error) = match std::mem::replace(self, BoardState::Loading) {
            BoardState::Loading => (Vec::new(), None),
            BoardState::Ready { items, error } => (items, error),
        };
        f(&mut items, &mut error);
        *self = BoardState::Ready { items, error };
    }

    fn fail(&mut self, message: &str) {
        self.settle(|_, error| *error = Some(message.to_string()));
    }
}

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation gate said no; nothing was sent.
    Declined,
}

pub struct CommentBoard<T, C> {
    api: CommentApi<T>,
    confirm: C,
    state: Mutex<BoardState>,
    submitting: AtomicBool,
}

impl<T: Transport, C: Confirm> CommentBoard<T, C> {
    pub fn new(api: CommentApi<T>, confirm: C) -> Self {
        Self {
            api,
            confirm,
            state: Mutex::new(BoardState::Loading),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &CommentApi<T> {
        &self.api
    }

    /// Initial fetch. Moves `Loading` to `Ready` whether or not it succeeds.
    pub async fn mount(&self) -> Result<(), ApiError> {
        self.load().await
    }

    /// Re-fetch the whole list. On failure the current items are kept.
    pub async fn reload(&self) -> Result<(), ApiError> {
        self.load().await
    }

    async fn load(&self) -> Result<(), ApiError> {
        let result = self.api.list().await;
        let mut state = self.state.lock().await;
        match result {
            Ok(comments) => {
                let items = dedup_by_id(comments);
                info!(count = items.len(), "loaded comments");
                *state = BoardState::Ready { items, error: None };
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error fetching comments");
                state.fail(LOAD_FAILED);
                Err(err)
            }
        }
    }

    /// Post a new comment and put the server's copy at the front.
    ///
    /// Blank text is rejected before any request and leaves the state
    /// untouched, error included.
    pub async fn add(&self, text: &str) -> Result<Comment, ApiError> {
        validate_text(text)?;
        let result = {
            let _submitting = Submitting::start(&self.submitting);
            self.api.create(text).await
        };
        let mut state = self.state.lock().await;
        match result {
            Ok(comment) => {
                debug!(id = comment.id, "comment added");
                state.settle(|items, error| {
                    prepend(items, comment.clone());
                    *error = None;
                });
                Ok(comment)
            }
            Err(err) => {
                error!(error = %err, "error adding comment");
                state.fail(ADD_FAILED);
                Err(err)
            }
        }
    }

    /// Edit a comment's text and replace the local copy with the server's.
    pub async fn update(&self, id: CommentId, text: &str) -> Result<Comment, ApiError> {
        validate_text(text)?;
        let result = self.api.update(id, text).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(comment) => {
                debug!(id, "comment updated");
                state.settle(|items, error| {
                    replace(items, comment.clone());
                    *error = None;
                });
                Ok(comment)
            }
            Err(err) => {
                error!(id, error = %err, "error updating comment");
                state.fail(UPDATE_FAILED);
                Err(err)
            }
        }
    }

    /// Delete a comment after the confirmation gate agrees.
    pub async fn delete(&self, id: CommentId) -> Result<DeleteOutcome, ApiError> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }
        let result = self.api.delete(id).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                debug!(id, "comment deleted");
                state.settle(|items, error| {
                    remove(items, id);
                    *error = None;
                });
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!(id, error = %err, "error deleting comment");
                state.fail(DELETE_FAILED);
                Err(err)
            }
        }
    }

    /// Clear the error banner. The collection is not touched.
    pub async fn dismiss_error(&self) {
        let mut state = self.state.lock().await;
        if let BoardState::Ready { error, .. } = &mut *state {
            *error = None;
        }
    }

    pub async fn snapshot(&self) -> BoardState {
        self.state.lock().await.clone()
    }

    pub async fn items(&self) -> Vec<Comment> {
        self.state.lock().await.items().to_vec()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error().map(str::to_string)
    }

    /// True while an add request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }
}

/// Holds the submitting flag up for as long as it lives.
struct Submitting<'a>(&'a AtomicBool);

impl<'a> Submitting<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Insert at index 0. A stale entry with the same id is dropped so ids stay
/// unique.
fn prepend(items: &mut Vec<Comment>, comment: Comment) {
    items.retain(|c| c.id != comment.id);
    items.insert(0, comment);
}

/// Swap in the server's copy. Unknown ids are ignored.
fn replace(items: &mut [Comment], comment: Comment) {
    match items.iter_mut().find(|c| c.id == comment.id) {
        Some(slot) => *slot = comment,
        None => debug!(id = comment.id, "updated comment is not in the local list"),
    }
}

/// Drop the entry with `id`. Unknown ids are ignored.
fn remove(items: &mut Vec<Comment>, id: CommentId) {
    let before = items.len();
    items.retain(|c| c.id != id);
    if items.len() == before {
        debug!(id, "deleted comment is not in the local list");
    }
}

/// Keep the first occurrence of every id, preserving server order.
fn dedup_by_id(comments: Vec<Comment>) -> Vec<Comment> {
    let mut seen = std::collections::HashSet::new();
    comments.into_iter().filter(|c| seen.insert(c.id)).collect()
}
