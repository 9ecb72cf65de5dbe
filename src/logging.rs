//! Console Logger
//!
//! `log` sink writing to the browser console. The level starts at `Info`
//! and follows the `debug` resource once it is loaded.

use log::{Level, LevelFilter, Log, Metadata, Record};
use site_config::model::DebugConfig;
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Adopt the verbosity configured in the `debug` resource
pub fn apply_debug_config(debug: &DebugConfig) {
    let level = debug.max_level();
    log::set_max_level(level);
    log::info!("console log level set to {}", level);
}
