use super::*;

#[test]
fn default_ids_match_page_markup() {
    let config = HostConfig::default();
    assert_eq!(config.board_id, "board");
    assert_eq!(config.text_input_id, "text-input");
    assert_eq!(config.text_panel_id, "text-panel");
    assert_eq!(config.reset_id, "reset");
    assert_eq!(config.tool_selector, "[data-tool]");
    assert_eq!(config.log_level, Level::Info);
}

#[test]
fn empty_query_logs_at_info() {
    assert_eq!(log_level_from_query(""), Level::Info);
    assert_eq!(log_level_from_query("?"), Level::Info);
    assert!(!HostConfig::from_query("").debug_enabled());
}

#[test]
fn debug_flag_accepts_one_and_true() {
    assert_eq!(log_level_from_query("?debug=1"), Level::Debug);
    assert_eq!(log_level_from_query("?debug=true"), Level::Debug);
    assert!(HostConfig::from_query("?debug=1").debug_enabled());
}

#[test]
fn trace_wins_over_debug() {
    assert_eq!(log_level_from_query("?debug=1&trace=true"), Level::Trace);
    assert!(HostConfig::from_query("?trace=1").debug_enabled());
}

#[test]
fn other_values_are_ignored() {
    assert_eq!(log_level_from_query("?debug=0"), Level::Info);
    assert_eq!(log_level_from_query("?debug"), Level::Info);
    assert_eq!(log_level_from_query("?nodebug=1"), Level::Info);
    assert_eq!(log_level_from_query("?board=debug=1"), Level::Info);
}

#[test]
fn flag_found_among_other_params() {
    assert_eq!(log_level_from_query("?room=42&debug=true&x=y"), Level::Debug);
}

#[test]
fn from_query_keeps_default_ids() {
    let config = HostConfig::from_query("?trace=1");
    assert_eq!(config.board_id, HostConfig::default().board_id);
    assert_eq!(config.log_level, Level::Trace);
}
