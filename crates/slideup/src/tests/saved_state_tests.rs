use super::*;

#[test]
fn empty_blob_reads_nothing() {
    let saved = SavedState::new();
    assert!(saved.is_empty());
    assert!(!saved.is_restored_marker());
    assert_eq!(saved.direction(), None);
    assert_eq!(saved.state(), None);
    assert_eq!(saved.auto_slide_duration(), None);
}

#[test]
fn typed_getters_read_written_values() {
    let mut saved = SavedState::new();
    saved.put(KEY_START_DIRECTION, "UP");
    saved.put(KEY_STATE, "HIDDEN");
    saved.put(KEY_DEBUG, true);
    saved.put(KEY_TOUCHABLE_AREA, 48.0f32);
    saved.put(KEY_AUTO_SLIDE_DURATION, 450u64);
    saved.put(KEY_HIDE_SOFT_INPUT, true);
    saved.put(KEY_STATE_SAVED, true);

    assert_eq!(saved.direction(), Some(SlideDirection::Up));
    assert_eq!(saved.state(), Some(SlideState::Hidden));
    assert_eq!(saved.debug(), Some(true));
    assert_eq!(saved.touchable_area_dp(), Some(48.0));
    assert_eq!(saved.auto_slide_duration(), Some(450));
    assert_eq!(saved.hide_soft_input(), Some(true));
    assert!(saved.is_restored_marker());
    assert_eq!(saved.len(), 7);
}

#[test]
fn malformed_fields_read_as_absent() {
    let saved = SavedState::from_json(
        r#"{
            "slide_start_direction": "SIDEWAYS",
            "slide_state": 3,
            "slide_debug": "yes",
            "slide_touchable_area": "wide",
            "slide_auto_slide_duration": -20,
            "slide_state_saved": "true"
        }"#,
    )
    .expect("valid json object");

    assert_eq!(saved.direction(), None);
    assert_eq!(saved.state(), None);
    assert_eq!(saved.debug(), None);
    assert_eq!(saved.touchable_area_dp(), None);
    assert_eq!(saved.auto_slide_duration(), None);
    assert!(!saved.is_restored_marker());
}

#[test]
fn json_text_keeps_every_entry() {
    let mut saved = SavedState::new();
    saved.put(KEY_STATE, "SHOWN");
    saved.put(KEY_AUTO_SLIDE_DURATION, 120u64);

    let text = saved.to_json().expect("encodes");
    let decoded = SavedState::from_json(&text).expect("decodes");
    assert_eq!(decoded, saved);
    assert!(text.contains("\"slide_state\":\"SHOWN\""));
}

#[test]
fn non_object_json_is_an_error() {
    let err = SavedState::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, SlideError::SavedState(_)));
    assert!(err.to_string().starts_with("saved state:"));
}
