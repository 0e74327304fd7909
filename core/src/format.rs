//! Presentation helpers kept out of the reconciliation core.

use chrono::{DateTime, Utc};

/// Turns raw comment fields into display strings.
pub trait Formatter {
    fn format_date(&self, at: &DateTime<Utc>) -> String;

    /// Glyph shown in place of a missing avatar image.
    fn avatar_placeholder(&self, author: &str) -> String;
}

/// US English short dates ("Jan 1, 2024"), rendered in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUsFormatter;

impl Formatter for EnUsFormatter {
    fn format_date(&self, at: &DateTime<Utc>) -> String {
        at.format("%b %-d, %Y").to_string()
    }

    fn avatar_placeholder(&self, author: &str) -> String {
        author
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_short_us_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 10).unwrap();
        assert_eq!(EnUsFormatter.format_date(&at), "Jan 1, 2024");
        let at = Utc.with_ymd_and_hms(2023, 12, 25, 23, 59, 59).unwrap();
        assert_eq!(EnUsFormatter.format_date(&at), "Dec 25, 2023");
    }

    #[test]
    fn placeholder_is_uppercased_first_letter() {
        assert_eq!(EnUsFormatter.avatar_placeholder("bob"), "B");
        assert_eq!(EnUsFormatter.avatar_placeholder("élise"), "É");
    }

    #[test]
    fn placeholder_for_blank_author() {
        assert_eq!(EnUsFormatter.avatar_placeholder("  "), "?");
    }
}
