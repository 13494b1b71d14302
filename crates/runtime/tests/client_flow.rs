//! End-to-end flows the way a generated client drives the helpers:
//! drain a response body, assert shapes out of the dynamic value, and
//! render the next request's wire pieces.

use pretty_assertions::assert_eq;
use strato_runtime::{
    RuntimeOptions, get_user_agent, parse_json, read_as_json, to_array, to_form_string,
    to_json_string, validate_model,
};
use strato_value::Value;

#[test]
fn response_body_to_typed_fields() {
    let body = r#"{"requestId": "abc-123", "total": 42, "items": [{"name": "a"}, {"name": "b"}]}"#;
    let decoded = read_as_json(body.as_bytes()).unwrap();
    let map = decoded.try_object().unwrap();

    assert_eq!(map["requestId"].try_string().unwrap(), "abc-123");
    assert_eq!(map["total"].try_integer().unwrap(), 42);

    let items = map["items"].try_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_object().unwrap()["name"], Value::string("a"));
}

#[test]
fn error_payload_reports_received_shape() {
    let decoded = parse_json(r#"["not", "an", "object"]"#);
    let err = decoded.try_object().unwrap_err();
    assert_eq!(err.to_string(), r#"["not","an","object"] is not a object"#);
}

#[test]
fn streamed_body_stringifies_once() {
    let value = Value::stream(r#"{"ok":true}"#.as_bytes());
    assert_eq!(to_json_string(&value).as_deref(), Some(r#"{"ok":true}"#));
    // The stream is consumed; a second render sees an empty body.
    assert_eq!(to_json_string(&value).as_deref(), Some(""));
}

#[test]
fn paged_results_flatten_into_rows() {
    let page = parse_json(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#);
    let rows = to_array(&page).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].get("id"), Some(&Value::integer(3)));
}

#[test]
fn request_assembly() {
    let query = parse_json(r#"{"action": "DescribeInstances", "pageSize": 10}"#);
    let body = to_form_string(query.as_object());

    let mut pairs: Vec<&str> = body.split('&').collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec!["action=DescribeInstances", "pageSize=10"]);

    let agent = get_user_agent(Some("console/1.4"));
    assert!(agent.ends_with(" console/1.4"));

    let opts = RuntimeOptions::new().with_read_timeout(3000).with_autoretry(false);
    assert!(validate_model(Some(&opts)).is_ok());
}
