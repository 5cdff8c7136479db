//! Build-time Configuration
//!
//! Values are baked in when the wasm bundle is built:
//! - `TODO_API_URL`: prefix for API paths, empty means same origin
//! - `TODO_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace`

use log::Level;

/// Local storage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Request header carrying the session token
pub const TOKEN_HEADER: &str = "token";

pub const LOGIN_PATH: &str = "/login/";
pub const TASK_PATH: &str = "/task/";

/// Base URL the API paths are joined onto
pub fn api_base_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or("")
}

/// Join an API path onto a base URL without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("TODO_LOG_LEVEL")).unwrap_or(if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    })
}

fn parse_log_level(raw: Option<&str>) -> Option<Level> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/task/"), "/task/");
        assert_eq!(join_url("https://api.example.com", "/task/"), "https://api.example.com/task/");
        assert_eq!(join_url("https://api.example.com/", "/login/"), "https://api.example.com/login/");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("warn")), Some(Level::Warn));
        assert_eq!(parse_log_level(Some(" TRACE ")), Some(Level::Trace));
        assert_eq!(parse_log_level(Some("loud")), None);
        assert_eq!(parse_log_level(None), None);
    }
}
