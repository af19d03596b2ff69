//! Platform-aware logging initialization.
//!
//! In the browser, `tracing` events go to the developer console through
//! `tracing-web`. The chosen level is remembered in localStorage.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

use crate::app::storage::BrowserStorage;

static INIT: Once = Once::new();

/// localStorage key holding the log level.
pub const LOG_LEVEL_KEY: &str = "tm_web_log_level";

/// Initialize logging for the current platform.
///
/// Idempotent. Native builds (tests) install nothing.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>> =
    std::sync::OnceLock::new();

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // no std::time on wasm32

    let (filter, handle) = tracing_subscriber::reload::Layer::new(get_log_level());
    let _ = RELOAD_HANDLE.set(handle);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

pub fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        _ => "trace",
    }
}

/// Change the active level and remember it for the next page load.
pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    if let Some(handle) = RELOAD_HANDLE.get() {
        let _ = handle.reload(level);
    }

    if let Err(e) = BrowserStorage::new().set(LOG_LEVEL_KEY, level_name(level)) {
        tracing::warn!(error = %e, "failed to persist log level");
    }
}

/// Stored level, WARN when nothing (or garbage) is stored.
pub fn get_log_level() -> LevelFilter {
    BrowserStorage::new()
        .get(LOG_LEVEL_KEY)
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(LevelFilter::WARN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" warn "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_level_name_matches_parse() {
        for level in [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE] {
            assert_eq!(parse_level(level_name(level)), Some(level));
        }
    }

    #[test]
    fn test_default_level_off_browser() {
        // No browser storage natively, so the default applies
        assert_eq!(get_log_level(), LevelFilter::WARN);
    }
}
