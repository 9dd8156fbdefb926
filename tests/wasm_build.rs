//! WASM API tests
//!
//! Run in a browser: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Reflect, JSON};
use read_aloud_wasm::api::*;
use read_aloud_wasm::models::DocumentSnapshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fragments() -> JsValue {
    JSON::parse(
        r#"[
            { "text": "Hi", "x": 0, "y": 100, "width": 10 },
            { "text": "there", "x": 20, "y": 100, "width": 20 },
            { "text": "Ye", "x": 0, "y": 80, "width": 10 },
            { "text": "s", "x": 11, "y": 80, "width": 5 }
        ]"#,
    )
    .unwrap()
}

/// Bridge whose `speak` pushes `text` onto `spoken`; everything else is a no-op
fn recording_bridge(spoken: &Array) -> ReaderBridge {
    let bridge = Object::new();
    let noop = Function::new_no_args("");
    for name in [
        "cancelSpeech",
        "renderWindow",
        "clearHighlight",
        "highlightLine",
        "scrollToLine",
        "playbackChanged",
        "scheduleTick",
    ] {
        Reflect::set(&bridge, &name.into(), &noop).unwrap();
    }
    let speak = Function::new_with_args("id, text, rate", "this.spoken.push(text);");
    Reflect::set(&bridge, &"speak".into(), &speak).unwrap();
    Reflect::set(&bridge, &"spoken".into(), spoken).unwrap();
    bridge.unchecked_into::<ReaderBridge>()
}

#[wasm_bindgen_test]
fn reconstruct_page_returns_lines() {
    let lines: Vec<String> = serde_wasm_bindgen::from_value(reconstruct_page(fragments()).unwrap()).unwrap();
    assert_eq!(lines, vec!["Hi there", "Yes"]);
}

#[wasm_bindgen_test]
fn upload_type_check_throws_user_message() {
    assert!(check_upload_type_js("application/pdf").is_ok());
    let err = check_upload_type_js("text/plain").unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Invalid file type. Please upload a PDF."));
}

#[wasm_bindgen_test]
fn build_document_aborts_on_failed_page() {
    let pages = JSON::parse(r#"[[], { "error": "broken stream" }]"#).unwrap();
    assert!(build_document_js(pages, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn persisted_document_reopens() {
    let pages = Array::of2(&fragments(), &Array::new());
    let built = build_document_js(pages.into(), JsValue::UNDEFINED).unwrap();
    persist_document(built).unwrap();

    let stored: DocumentSnapshot = serde_wasm_bindgen::from_value(load_stored_document().unwrap()).unwrap();
    assert_eq!(stored.total_pages, 2);
    assert_eq!(stored.pages_of_lines[0], vec!["Hi there", "Yes"]);
    assert!(stored.pages_of_lines[1].is_empty());
}

#[wasm_bindgen_test]
fn reader_speaks_clicked_line() {
    let snapshot = serde_wasm_bindgen::to_value(&DocumentSnapshot::new(vec![vec![
        "one".to_string(),
        "two".to_string(),
    ]]))
    .unwrap();
    let spoken = Array::new();
    let mut reader = Reader::from_snapshot(snapshot, recording_bridge(&spoken), 800, JsValue::UNDEFINED).unwrap();

    reader.seek_to(1).unwrap();
    assert!(reader.is_playing());
    assert_eq!(spoken.get(0).as_string().as_deref(), Some("two"));

    assert!(reader.seek_to(2).is_err());
    reader.stop();
    assert!(!reader.is_playing());
    assert_eq!(reader.rate_options().len(), 7);
}
