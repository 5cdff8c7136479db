//! Console Logging
//!
//! Routes the `log` facade to the browser console.

use crate::config;

pub fn init() {
    let level = config::log_level();
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already initialized".into());
    }
    log::debug!("[APP] logging at {}", level);
}
