//! Host configuration: which DOM elements make up the board, and how loud to log.
//!
//! The element ids are fixed by the page markup. The log level comes from the
//! page query string: `?debug=1` enables debug output and `?trace=1` enables
//! per-event tracing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

/// DOM wiring and logging for one board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Id of the `<canvas>` the engine draws into.
    pub board_id: &'static str,
    /// Id of the `<textarea>` read by the text tool.
    pub text_input_id: &'static str,
    /// Id of the element wrapping the text input; hidden unless the text tool is active.
    pub text_panel_id: &'static str,
    /// Id of the button that clears the board.
    pub reset_id: &'static str,
    /// Selector for toolbar buttons. Each carries `data-tool="<tool name>"`.
    pub tool_selector: &'static str,
    pub log_level: Level,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            board_id: "board",
            text_input_id: "text-input",
            text_panel_id: "text-panel",
            reset_id: "reset",
            tool_selector: "[data-tool]",
            log_level: Level::Info,
        }
    }
}

impl HostConfig {
    /// Default element ids with the log level taken from `search` (`location.search`).
    #[must_use]
    pub fn from_query(search: &str) -> Self {
        Self { log_level: log_level_from_query(search), ..Self::default() }
    }

    /// Whether committed shapes should be dumped as JSON.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.log_level >= Level::Debug
    }
}

/// `trace` wins over `debug`; anything else is `Info`.
#[must_use]
pub fn log_level_from_query(search: &str) -> Level {
    if query_flag(search, "trace") {
        Level::Trace
    } else if query_flag(search, "debug") {
        Level::Debug
    } else {
        Level::Info
    }
}

/// True when `key` appears in the query string with value `1` or `true`.
fn query_flag(search: &str, key: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| k == key && matches!(v, "1" | "true"))
}
