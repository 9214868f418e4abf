use super::*;

fn parse(raw: &str) -> AskResponse {
    serde_json::from_str(raw).expect("valid response")
}

// =============================================================
// AskRequest
// =============================================================

#[test]
fn request_serializes_question_only_by_default() {
    let req = AskRequest { question: "hello".to_owned(), top_k: None };
    assert_eq!(serde_json::to_value(&req).expect("serialize"), serde_json::json!({ "question": "hello" }));
}

#[test]
fn request_includes_top_k_when_set() {
    let req = AskRequest { question: "q".to_owned(), top_k: Some(5) };
    assert_eq!(
        serde_json::to_value(&req).expect("serialize"),
        serde_json::json!({ "question": "q", "top_k": 5 })
    );
}

// =============================================================
// AskResponse parsing
// =============================================================

#[test]
fn response_parses_full_structured_reply() {
    let resp = parse(
        r#"{"success":true,"short":"S","steps":["a","b"],"answer":"A","follow_up":"F","retrieved":[1,2]}"#,
    );
    assert!(resp.succeeded());
    assert_eq!(resp.summary(), Some("S"));
    assert_eq!(resp.step_list(), Some(&["a".to_owned(), "b".to_owned()][..]));
    assert_eq!(resp.full_answer(), Some("A"));
    assert_eq!(resp.tip(), Some("F"));
}

#[test]
fn response_treats_null_and_missing_fields_as_absent() {
    let resp = parse(r#"{"success":false,"follow_up":null,"steps":null}"#);
    assert!(!resp.succeeded());
    assert_eq!(resp.tip(), None);
    assert_eq!(resp.step_list(), None);
    assert_eq!(resp.summary(), None);
}

#[test]
fn response_without_success_flag_is_not_successful() {
    assert!(!parse("{}").succeeded());
    assert!(!parse(r#"{"success":null}"#).succeeded());
}

#[test]
fn empty_strings_and_lists_count_as_absent() {
    let resp = parse(r#"{"success":true,"short":"","steps":[],"answer":"","follow_up":""}"#);
    assert_eq!(resp.summary(), None);
    assert_eq!(resp.step_list(), None);
    assert_eq!(resp.full_answer(), None);
    assert_eq!(resp.tip(), None);
}

#[test]
fn response_rejects_non_object_body() {
    assert!(serde_json::from_str::<AskResponse>("\"oops\"").is_err());
}

#[test]
fn non_boolean_success_is_not_successful() {
    let resp = parse(r#"{"success":"false","answer":"A"}"#);
    assert!(!resp.succeeded());
    assert_eq!(resp.failure_message(), "A");
    assert!(!parse(r#"{"success":1}"#).succeeded());
}

#[test]
fn non_array_steps_fall_back_to_answer() {
    let resp = parse(r#"{"success":true,"steps":"one step","answer":"A"}"#);
    assert!(resp.succeeded());
    assert_eq!(resp.step_list(), None);
    assert_eq!(resp.full_answer(), Some("A"));
}

#[test]
fn steps_drop_null_and_nested_items_and_stringify_scalars() {
    let resp = parse(r#"{"success":true,"steps":["a",null,2,{"x":1},true]}"#);
    assert_eq!(
        resp.step_list(),
        Some(&["a".to_owned(), "2".to_owned(), "true".to_owned()][..])
    );
}

#[test]
fn steps_with_only_unusable_items_count_as_absent() {
    let resp = parse(r#"{"success":true,"steps":[null,[]],"answer":"A"}"#);
    assert_eq!(resp.step_list(), None);
    assert_eq!(resp.full_answer(), Some("A"));
}

#[test]
fn text_fields_stringify_scalars_and_ignore_structures() {
    let resp = parse(r#"{"success":true,"short":42,"follow_up":{"tip":"x"},"error":["e"]}"#);
    assert_eq!(resp.summary(), Some("42"));
    assert_eq!(resp.tip(), None);
    assert_eq!(resp.error, None);
}

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_prefers_error() {
    let resp = parse(r#"{"success":false,"error":"E","answer":"A"}"#);
    assert_eq!(resp.failure_message(), "E");
}

#[test]
fn failure_message_falls_back_to_answer() {
    let resp = parse(r#"{"success":false,"answer":"A"}"#);
    assert_eq!(resp.failure_message(), "A");
}

#[test]
fn failure_message_falls_back_to_generic_text() {
    assert_eq!(parse(r#"{"success":false}"#).failure_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(parse(r#"{"success":false,"error":""}"#).failure_message(), GENERIC_FAILURE_MESSAGE);
}
