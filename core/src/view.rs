//! Per-comment view model: display card, edited marker, and the
//! `Viewing`/`Editing` state machine with its local edit buffer.
//!
//! # Design
//! The item never mutates the collection itself. Saving goes through
//! `CommentBoard::update`, and the item only leaves `Editing` once that
//! call succeeds, so a failed save keeps whatever the user typed.

use tracing::debug;

use crate::confirm::Confirm;
use crate::controller::CommentBoard;
use crate::error::ApiError;
use crate::format::Formatter;
use crate::transport::Transport;
use crate::types::{validate_text, Comment, CommentId};

pub const DEFAULT_EDITED_THRESHOLD_MS: i64 = 5000;
pub const DEFAULT_EDITOR_NAME: &str = "Admin";

/// Decides when a comment counts as edited and who gets credited for it.
///
/// `updated_at` is stamped by the server and may trail `date` by a few
/// milliseconds right after creation; gaps up to `threshold_ms` inclusive
/// are not edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedPolicy {
    pub threshold_ms: i64,
    pub editor_name: String,
}

impl Default for EditedPolicy {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_EDITED_THRESHOLD_MS,
            editor_name: DEFAULT_EDITOR_NAME.to_string(),
        }
    }
}

impl EditedPolicy {
    pub fn is_edited(&self, comment: &Comment) -> bool {
        comment.updated_at.is_some_and(|updated| {
            (updated - comment.date).num_milliseconds().abs() > self.threshold_ms
        })
    }

    /// "Edited <date> by <editor>", or `None` when the comment is unedited.
    pub fn marker(&self, comment: &Comment, formatter: &impl Formatter) -> Option<String> {
        let updated = comment.updated_at.filter(|_| self.is_edited(comment))?;
        Some(format!(
            "Edited {} by {}",
            formatter.format_date(&updated),
            self.editor_name
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Placeholder(String),
}

/// Everything needed to draw one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCard {
    pub id: CommentId,
    pub author: String,
    pub avatar: Avatar,
    pub date: String,
    pub text: String,
    pub likes: String,
    pub edited: Option<String>,
}

impl CommentCard {
    pub fn render(comment: &Comment, policy: &EditedPolicy, formatter: &impl Formatter) -> Self {
        let avatar = match &comment.image {
            Some(url) => Avatar::Image(url.clone()),
            None => Avatar::Placeholder(formatter.avatar_placeholder(&comment.author)),
        };
        Self {
            id: comment.id,
            author: comment.author.clone(),
            avatar,
            date: formatter.format_date(&comment.date),
            text: comment.text.clone(),
            likes: format!("👍 {} likes", comment.likes),
            edited: policy.marker(comment, formatter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { buffer: String },
}

/// What a call to `CommentItem::save` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The board accepted the edit and the item is back in `Viewing`.
    Saved,
    /// The item was not being edited; nothing was sent.
    NotEditing,
}

/// Edit state for a single comment.
#[derive(Debug, Clone)]
pub struct CommentItem {
    id: CommentId,
    state: EditState,
}

impl CommentItem {
    pub fn new(id: CommentId) -> Self {
        Self {
            id,
            state: EditState::Viewing,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            EditState::Viewing => None,
            EditState::Editing { buffer } => Some(buffer),
        }
    }

    /// Enter `Editing` with the buffer seeded from the current text.
    pub fn begin_edit(&mut self, comment: &Comment) {
        self.state = EditState::Editing {
            buffer: comment.text.clone(),
        };
    }

    /// Replace the buffer contents. Ignored while viewing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer } = &mut self.state {
            *buffer = text.into();
        }
    }

    /// Throw the buffer away and go back to `Viewing`.
    pub fn cancel(&mut self) {
        self.state = EditState::Viewing;
    }

    /// Submit the buffer through the board.
    ///
    /// A blank buffer is rejected without a request. On any failure the item
    /// stays in `Editing` with the buffer intact.
    pub async fn save<T: Transport, C: Confirm>(
        &mut self,
        board: &CommentBoard<T, C>,
    ) -> Result<SaveOutcome, ApiError> {
        let text = match &self.state {
            EditState::Viewing => {
                debug!(id = self.id, "save requested while not editing");
                return Ok(SaveOutcome::NotEditing);
            }
            EditState::Editing { buffer } => buffer.clone(),
        };
        validate_text(&text)?;
        board.update(self.id, &text).await?;
        self.state = EditState::Viewing;
        Ok(SaveOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::api::CommentApi;
    use crate::client::CommentClient;
    use crate::confirm::AlwaysConfirm;
    use crate::controller::UPDATE_FAILED;
    use crate::format::EnUsFormatter;
    use crate::testing::{at, comment, ScriptedTransport, BASE_URL};

    fn board(transport: &ScriptedTransport) -> CommentBoard<&ScriptedTransport, AlwaysConfirm> {
        CommentBoard::new(
            CommentApi::new(CommentClient::new(BASE_URL), transport),
            AlwaysConfirm,
        )
    }

    fn updated_after(ms: i64) -> Comment {
        let mut c = comment(1, "hi");
        c.updated_at = Some(c.date + Duration::milliseconds(ms));
        c
    }

    #[test]
    fn edited_marker_uses_strict_threshold() {
        let policy = EditedPolicy::default();
        assert!(!policy.is_edited(&updated_after(0)));
        assert!(!policy.is_edited(&updated_after(5000)));
        assert!(policy.is_edited(&updated_after(5001)));
    }

    #[test]
    fn edited_marker_compares_absolute_difference() {
        let policy = EditedPolicy::default();
        assert!(!policy.is_edited(&updated_after(-5000)));
        assert!(policy.is_edited(&updated_after(-5001)));
    }

    #[test]
    fn missing_updated_at_is_never_edited() {
        let mut c = comment(1, "hi");
        c.updated_at = None;
        assert!(!EditedPolicy::default().is_edited(&c));
        assert!(EditedPolicy::default().marker(&c, &EnUsFormatter).is_none());
    }

    #[test]
    fn threshold_is_configurable() {
        let policy = EditedPolicy {
            threshold_ms: 60_000,
            ..EditedPolicy::default()
        };
        assert!(!policy.is_edited(&updated_after(10_000)));
    }

    #[test]
    fn card_uses_placeholder_without_image() {
        let mut c = comment(1, "hi");
        c.author = "bob".to_string();
        let card = CommentCard::render(&c, &EditedPolicy::default(), &EnUsFormatter);
        assert_eq!(card.avatar, Avatar::Placeholder("B".to_string()));
        assert_eq!(card.date, "Jan 1, 2024");
        assert_eq!(card.likes, "👍 0 likes");
        assert!(card.edited.is_none());
    }

    #[test]
    fn card_uses_image_when_present() {
        let mut c = comment(1, "hi");
        c.image = Some("https://example.com/a.png".to_string());
        let card = CommentCard::render(&c, &EditedPolicy::default(), &EnUsFormatter);
        assert_eq!(
            card.avatar,
            Avatar::Image("https://example.com/a.png".to_string())
        );
    }

    #[test]
    fn begin_edit_seeds_buffer_and_cancel_discards_it() {
        let c = comment(1, "hi");
        let mut item = CommentItem::new(c.id);
        assert_eq!(item.state(), &EditState::Viewing);

        item.begin_edit(&c);
        assert_eq!(item.buffer(), Some("hi"));
        item.set_buffer("changed");
        item.cancel();

        assert!(!item.is_editing());
        item.begin_edit(&c);
        assert_eq!(item.buffer(), Some("hi"));
    }

    #[test]
    fn set_buffer_is_ignored_while_viewing() {
        let mut item = CommentItem::new(1);
        item.set_buffer("nope");
        assert_eq!(item.buffer(), None);
    }

    #[tokio::test]
    async fn edit_scenario_shows_edited_marker() {
        let original = comment(1, "hi");
        let mut edited = comment(1, "hi there");
        edited.updated_at = Some(at(0, 0, 10));
        let transport = ScriptedTransport::new()
            .respond(
                200,
                r#"[{"id":1,"text":"hi","date":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z","likes":0,"author":"Bob"}]"#,
            )
            .respond_json(200, &edited);
        let board = board(&transport);
        board.mount().await.unwrap();

        let items = board.items().await;
        assert_eq!(items.len(), 1);
        let policy = EditedPolicy::default();
        let card = CommentCard::render(&items[0], &policy, &EnUsFormatter);
        assert!(card.edited.is_none());

        let mut item = CommentItem::new(1);
        item.begin_edit(&original);
        item.set_buffer("hi there");
        assert_eq!(item.save(&board).await.unwrap(), SaveOutcome::Saved);

        assert!(!item.is_editing());
        let items = board.items().await;
        let card = CommentCard::render(&items[0], &policy, &EnUsFormatter);
        assert_eq!(card.text, "hi there");
        assert_eq!(card.edited.as_deref(), Some("Edited Jan 1, 2024 by Admin"));
    }

    #[tokio::test]
    async fn save_while_viewing_sends_nothing() {
        let transport = ScriptedTransport::new();
        let board = board(&transport);
        let mut item = CommentItem::new(1);

        let outcome = item.save(&board).await.unwrap();

        assert_eq!(outcome, SaveOutcome::NotEditing);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn blank_save_stays_editing_without_request() {
        let transport = ScriptedTransport::new();
        let board = board(&transport);
        let mut item = CommentItem::new(1);
        item.begin_edit(&comment(1, "hi"));
        item.set_buffer("   ");

        assert!(matches!(item.save(&board).await, Err(ApiError::Validation)));

        assert_eq!(item.buffer(), Some("   "));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn failed_save_keeps_buffer() {
        let transport = ScriptedTransport::new()
            .respond_json(200, &vec![comment(1, "hi")])
            .respond(500, "boom");
        let board = board(&transport);
        board.mount().await.unwrap();
        let mut item = CommentItem::new(1);
        item.begin_edit(&comment(1, "hi"));
        item.set_buffer("draft");

        assert!(item.save(&board).await.is_err());

        assert_eq!(item.buffer(), Some("draft"));
        assert_eq!(board.items().await[0].text, "hi");
        assert_eq!(board.error().await.as_deref(), Some(UPDATE_FAILED));
    }
}
