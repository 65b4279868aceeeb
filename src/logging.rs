//! Console Logging
//!
//! Messages are tagged `[SCOPE] message` in the browser console.

pub fn info(scope: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", scope, message).into());
}

pub fn warn(scope: &str, message: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", scope, message).into());
}
