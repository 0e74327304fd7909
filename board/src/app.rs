//! Runs one CLI command against a freshly mounted board.

use anyhow::Result;
use comment_core::{
    ApiError, CommentApi, CommentBoard, CommentClient, CommentItem, DeleteOutcome, EditedPolicy,
    EnUsFormatter, Transport,
};
use tracing::{debug, error};

use crate::cli::{Cli, Command};
use crate::prompt::TerminalConfirm;
use crate::render::{self, Line};
use crate::transport::ReqwestTransport;

pub const EMPTY_TEXT: &str = "Comment text cannot be empty.";
pub const SHOW_FAILED: &str = "Failed to load comment. Please try again.";

/// What a command produced: lines to show and whether it succeeded.
#[derive(Debug)]
pub struct Report {
    pub lines: Vec<Line>,
    pub success: bool,
}

pub async fn execute(cli: Cli) -> Result<Report> {
    execute_with(cli, ReqwestTransport::default()).await
}

pub async fn execute_with<T: Transport>(cli: Cli, transport: T) -> Result<Report> {
    let policy = EditedPolicy {
        threshold_ms: cli.edited_threshold_ms,
        editor_name: cli.editor_name.clone(),
    };
    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let api = CommentApi::new(CommentClient::new(&cli.base_url), transport);
    let board = CommentBoard::new(api, TerminalConfirm::new(assume_yes));
    debug!(base_url = %cli.base_url, command = ?cli.command, "running command");

    if let Command::Show { id } = cli.command {
        return Ok(match board.api().get(id).await {
            Ok(comment) => Report {
                lines: render::card(&comment, &policy, &EnUsFormatter),
                success: true,
            },
            Err(ApiError::NotFound) => failure(format!("Comment #{id} not found.")),
            Err(e) => {
                error!(id, error = %e, "error fetching comment");
                failure(SHOW_FAILED.to_string())
            }
        });
    }

    // A failed load still leaves an empty, usable board; the command runs
    // regardless and the load banner stays until something succeeds.
    let loaded = board.mount().await.is_ok();
    let mut success = loaded;
    let mut notice = None;
    match &cli.command {
        Command::List | Command::Show { .. } => {}
        Command::Add { text } => match board.add(text).await {
            Ok(_) => success = true,
            Err(e) => {
                success = false;
                notice = validation_notice(&e);
            }
        },
        Command::Edit { id, text } => {
            let current = board.items().await.into_iter().find(|c| c.id == *id);
            match current {
                Some(comment) => {
                    let mut item = CommentItem::new(comment.id);
                    item.begin_edit(&comment);
                    item.set_buffer(text.as_str());
                    if let Err(e) = item.save(&board).await {
                        success = false;
                        notice = validation_notice(&e);
                    }
                }
                None if loaded => {
                    success = false;
                    notice = Some(format!("Comment #{id} not found."));
                }
                None => {
                    success = false;
                    notice = Some(format!(
                        "Comment #{id} was not edited because comments could not be loaded."
                    ));
                }
            }
        }
        Command::Delete { id, .. } => match board.delete(*id).await {
            Ok(DeleteOutcome::Deleted) => success = true,
            Ok(DeleteOutcome::Declined) => notice = Some("Delete cancelled.".to_string()),
            Err(_) => success = false,
        },
    }

    let mut lines = render::board(&board.snapshot().await, &policy, &EnUsFormatter);
    if let Some(notice) = notice {
        lines.push(Line::Notice(notice));
    }
    Ok(Report { lines, success })
}

/// Blank text never reaches the board's error banner, so say it here.
fn validation_notice(err: &ApiError) -> Option<String> {
    matches!(err, ApiError::Validation).then(|| EMPTY_TEXT.to_string())
}

fn failure(message: String) -> Report {
    Report {
        lines: vec![Line::Error(message)],
        success: false,
    }
}
