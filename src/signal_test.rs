use serde_json::json;

use super::*;

const RESET: Option<&str> = Some("app:resetGuess");

#[test]
fn submit_payload_carries_guess() {
    let signal = ClientSignal::Submit { guess: "ABC".into() };
    assert_eq!(signal.payload(), json!({ "guess": "ABC" }));
}

#[test]
fn submit_payload_allows_empty_guess() {
    let signal = ClientSignal::Submit { guess: String::new() };
    assert_eq!(signal.payload(), json!({ "guess": "" }));
}

#[test]
fn decode_reset_uses_configured_name() {
    assert_eq!(ServerSignal::decode("app:resetGuess", json!(null), RESET).unwrap(), ServerSignal::Reset);
    assert_eq!(ServerSignal::decode("reset", json!({}), Some("reset")).unwrap(), ServerSignal::Reset);
}

#[test]
fn decode_reset_rejects_other_name() {
    let err = ServerSignal::decode("reset", json!(null), RESET).unwrap_err();
    assert!(matches!(err, SignalError::UnknownEvent(name) if name == "reset"));
}

#[test]
fn decode_session_store() {
    let signal = ServerSignal::decode("session:store", json!({ "key": "theme", "data": "dark" }), RESET).unwrap();
    assert_eq!(signal, ServerSignal::SessionStore { key: "theme".into(), data: "dark".into() });
}

#[test]
fn decode_session_store_serializes_structured_data() {
    let signal =
        ServerSignal::decode("session:store", json!({ "key": "game", "data": { "row": 2 } }), RESET).unwrap();
    assert_eq!(signal, ServerSignal::SessionStore { key: "game".into(), data: r#"{"row":2}"#.into() });
}

#[test]
fn decode_session_clear() {
    let signal = ServerSignal::decode("session:clear", json!({ "key": "theme" }), RESET).unwrap();
    assert_eq!(signal, ServerSignal::SessionClear { key: "theme".into() });
}

#[test]
fn decode_session_store_without_key_is_payload_error() {
    let err = ServerSignal::decode("session:store", json!({ "data": "x" }), RESET).unwrap_err();
    assert!(matches!(err, SignalError::Payload { ref event, .. } if event == "session:store"));
    assert!(err.to_string().starts_with("invalid payload for session:store"));
}

#[test]
fn decode_unknown_event() {
    let err = ServerSignal::decode("board:join", json!({}), RESET).unwrap_err();
    assert_eq!(err.to_string(), "unknown server event: board:join");
}

#[test]
fn recording_link_keeps_order() {
    let link = RecordingLink::new();
    link.push("submit", &ClientSignal::Submit { guess: "A".into() });
    link.push("submit", &ClientSignal::Submit { guess: "AB".into() });
    let sent = link.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].1, ClientSignal::Submit { guess: "A".into() });
    assert_eq!(sent[1].0, "submit");
}

#[test]
fn decode_without_reset_name_never_resets() {
    let err = ServerSignal::decode("app:resetGuess", json!(null), None).unwrap_err();
    assert!(matches!(err, SignalError::UnknownEvent(_)));
}
