//! Client core for the comment board.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! comments REST API without touching the network (host-does-IO pattern).
//! A `Transport` implementation executes the round-trip; `CommentBoard`
//! keeps an ordered in-memory list consistent with each server answer.
//!
//! # Design
//! - `CommentClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*` so the I/O
//!   boundary is explicit. `CommentApi` glues the pair to a `Transport`.
//! - `CommentBoard` patches local state only from settled responses.
//! - Confirmation and display formatting are injected (`Confirm`,
//!   `Formatter`), so none of this depends on a terminal or a locale.

pub mod api;
pub mod client;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod format;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::CommentApi;
pub use client::{CommentClient, DEFAULT_BASE_URL};
pub use confirm::{AlwaysConfirm, Confirm};
pub use controller::{BoardState, CommentBoard, DeleteOutcome};
pub use error::ApiError;
pub use format::{EnUsFormatter, Formatter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{Comment, CommentId, CreateComment, UpdateComment};
pub use view::{Avatar, CommentCard, CommentItem, EditState, EditedPolicy, SaveOutcome};
