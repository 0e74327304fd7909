use anyhow::Result;
use console::{style, Term};

use crate::render::Line;

pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn write(&self, lines: &[Line]) -> Result<()> {
        for line in lines {
            let text = match line {
                Line::Title(s) => style(s).bold().to_string(),
                Line::Subtitle(s) => style(s).dim().to_string(),
                Line::Error(s) => format!("{} {}", style("✗").red(), style(s).red()),
                Line::Notice(s) => style(s).yellow().to_string(),
                Line::Author(s) => style(s).cyan().bold().to_string(),
                Line::Body(s) => s.clone(),
                Line::Footer(s) => style(s).dim().to_string(),
                Line::Blank => String::new(),
            };
            self.term.write_line(&text)?;
        }
        Ok(())
    }
}
