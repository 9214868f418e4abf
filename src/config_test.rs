use super::*;

#[test]
fn defaults_match_widget_timings() {
    let config = WidgetConfig::default();
    assert_eq!(config.endpoint, "/api");
    assert_eq!(config.message_speed_ms, 15);
    assert_eq!(config.summary_speed_ms, 12);
    assert_eq!(config.step_speed_ms, 10);
    assert_eq!(config.answer_speed_ms, 12);
    assert_eq!(config.follow_up_speed_ms, 12);
    assert_eq!(config.open_scroll_delay_ms, 100);
    assert_eq!(config.copy_reset_ms, 1500);
    assert_eq!(config.top_k, None);
}

#[test]
fn from_json_overrides_only_listed_fields() {
    let config = WidgetConfig::from_json(r#"{ "endpoint": "/assist", "top_k": 5 }"#).expect("valid config");
    assert_eq!(config.endpoint, "/assist");
    assert_eq!(config.top_k, Some(5));
    assert_eq!(config.step_speed_ms, 10);
    assert_eq!(config.quick_prompts, WidgetConfig::default().quick_prompts);
}

#[test]
fn from_json_blank_is_default() {
    assert_eq!(WidgetConfig::from_json("  \n").expect("blank ok"), WidgetConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = WidgetConfig::from_json("{ not json").expect_err("should fail");
    assert!(err.to_string().starts_with("invalid widget config:"));
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(WidgetConfig::from_json(r#"{ "step_speed_ms": "fast" }"#).is_err());
}

#[test]
fn load_without_browser_yields_defaults() {
    assert_eq!(load(), WidgetConfig::default());
}
