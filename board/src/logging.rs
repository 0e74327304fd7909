//! Log filter for the board binary.

use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "COMMENT_BOARD_LOG_LEVEL";

/// Quiet defaults: everything at `warn`, HTTP plumbing pinned to `warn`.
const DEFAULT_DIRECTIVES: &str = "warn,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

/// Build the filter from the user's directives, if any.
///
/// User directives come after the defaults, so a directive for the same
/// target (`reqwest=debug`) replaces the pinned one.
pub fn log_filter(user: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = match user.map(str::trim).filter(|s| !s.is_empty()) {
        Some(user) => format!("{DEFAULT_DIRECTIVES},{user}"),
        None => DEFAULT_DIRECTIVES.to_string(),
    };
    Ok(EnvFilter::builder().parse(directives)?)
}

/// `log_filter` fed from `COMMENT_BOARD_LOG_LEVEL`.
pub fn env_log_filter() -> anyhow::Result<EnvFilter> {
    log_filter(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pin_http_crates() {
        let filter = log_filter(None).unwrap().to_string();
        assert!(filter.contains("reqwest=warn"));
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    fn user_directive_overrides_pinned_crate() {
        let filter = log_filter(Some("reqwest=debug")).unwrap().to_string();
        assert!(filter.contains("reqwest=debug"));
        assert!(!filter.contains("reqwest=warn"));
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    fn user_global_level_replaces_default() {
        let filter = log_filter(Some("debug")).unwrap().to_string();
        assert!(filter.split(',').any(|d| d == "debug"));
        assert!(!filter.split(',').any(|d| d == "warn"));
    }

    #[test]
    fn env_var_feeds_the_filter() {
        temp_env::with_var(LOG_LEVEL_ENV, Some("rustls=trace"), || {
            let filter = env_log_filter().unwrap().to_string();
            assert!(filter.contains("rustls=trace"));
        });
    }

    #[test]
    fn bad_directive_is_an_error() {
        assert!(log_filter(Some("reqwest=loud")).is_err());
    }
}
