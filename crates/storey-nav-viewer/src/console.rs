//! Browser console logging with a `?debug=1` gate
//!
//! Verbose output stays off unless the page was opened with a debug flag;
//! errors and warnings are always shown. Also installs a `log` facade
//! backend so records from the core crates reach the console.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug mode flag (set from URL parameter ?debug=1)
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Initialize debug mode from URL parameters
/// Call this once at startup
pub fn init_debug_from_url() {
    if let Some(window) = web_sys::window() {
        if let Ok(search) = window.location().search() {
            if search.contains("debug=1") || search.contains("debug=true") {
                DEBUG_MODE.store(true, Ordering::Relaxed);
                // Always log this one
                web_sys::console::log_1(&"[storey-nav] Debug mode enabled via URL".into());
            }
        }
    }
}

/// Log to browser console (only in debug mode)
pub fn log(msg: &str) {
    if is_debug() {
        web_sys::console::log_1(&msg.into());
    }
}

/// Log error to browser console (always shown)
pub fn log_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

/// Log warning to browser console (always shown)
pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Log info that should always be shown (e.g., pick results)
pub fn log_info(msg: &str) {
    web_sys::console::info_1(&msg.into());
}

/// `log` facade backend forwarding to the console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info || is_debug()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from_str(&format!("[storey-nav] {}", record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console backend for the `log` facade
/// Call this once at startup
pub fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}
