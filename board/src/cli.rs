use clap::{Parser, Subcommand};
use comment_core::{CommentId, DEFAULT_BASE_URL};
use comment_core::view::{DEFAULT_EDITED_THRESHOLD_MS, DEFAULT_EDITOR_NAME};

pub const BASE_URL_ENV: &str = "COMMENT_BOARD_API_BASE_URL";

#[derive(Parser, Debug)]
#[command(name = "comment-board")]
#[command(version, about = "List, post, edit and delete comments", long_about = None)]
pub struct Cli {
    /// Base URL of the comments API
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Minimum gap between creation and last update, in milliseconds, before
    /// a comment is shown as edited
    #[arg(long, global = true, default_value_t = DEFAULT_EDITED_THRESHOLD_MS)]
    pub edited_threshold_ms: i64,

    /// Name shown in the "Edited ... by" marker
    #[arg(long, global = true, default_value = DEFAULT_EDITOR_NAME)]
    pub editor_name: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show all comments, newest first
    List,

    /// Show a single comment
    Show { id: CommentId },

    /// Post a new comment
    Add { text: String },

    /// Replace the text of a comment
    Edit { id: CommentId, text: String },

    /// Delete a comment
    Delete {
        id: CommentId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
