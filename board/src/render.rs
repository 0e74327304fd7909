//! Board layout as a list of typed lines; `Output` decides how they look.

use comment_core::{Avatar, BoardState, Comment, CommentCard, EditedPolicy, Formatter};

pub const LOADING: &str = "Loading comments...";
pub const EMPTY: &str = "No comments yet. Be the first to comment!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Title(String),
    Subtitle(String),
    Error(String),
    Notice(String),
    Author(String),
    Body(String),
    Footer(String),
    Blank,
}

pub fn board(state: &BoardState, policy: &EditedPolicy, formatter: &impl Formatter) -> Vec<Line> {
    if state.is_loading() {
        return vec![Line::Notice(LOADING.to_string())];
    }

    let items = state.items();
    let mut lines = vec![
        Line::Title("Comments".to_string()),
        Line::Subtitle(format!("{} comments", items.len())),
    ];
    if let Some(error) = state.error() {
        lines.push(Line::Error(error.to_string()));
    }
    lines.push(Line::Blank);

    if items.is_empty() {
        lines.push(Line::Notice(EMPTY.to_string()));
        return lines;
    }
    for comment in items {
        lines.extend(card(comment, policy, formatter));
        lines.push(Line::Blank);
    }
    lines
}

pub fn card(comment: &Comment, policy: &EditedPolicy, formatter: &impl Formatter) -> Vec<Line> {
    let card = CommentCard::render(comment, policy, formatter);
    let avatar = match &card.avatar {
        Avatar::Image(url) => format!("<{url}>"),
        Avatar::Placeholder(glyph) => format!("[{glyph}]"),
    };

    let mut lines = vec![Line::Author(format!(
        "#{} {avatar} {} · {}",
        card.id, card.author, card.date
    ))];
    lines.extend(card.text.lines().map(|l| Line::Body(format!("  {l}"))));
    let footer = match &card.edited {
        Some(edited) => format!("{} · {edited}", card.likes),
        None => card.likes.clone(),
    };
    lines.push(Line::Footer(footer));
    lines
}
