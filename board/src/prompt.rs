//! Terminal confirmation for destructive commands.

use comment_core::Confirm;
use console::Term;
use tracing::warn;

/// Asks on stderr unless `--yes` was given.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let term = Term::stderr();
        if let Err(e) = term.write_str(&format!("{message} [y/N] ")) {
            warn!(error = %e, "failed to write confirmation prompt");
            return false;
        }
        match term.read_line() {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
