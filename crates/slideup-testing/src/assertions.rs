//! Assertion helpers for slider tests.

use crate::fakes::SlideEvent;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that slide percentages never decrease.
pub fn assert_non_decreasing(percents: &[f32], msg: &str) {
    for pair in percents.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{}: {} followed by {} in {:?}",
            msg,
            pair[0],
            pair[1],
            percents
        );
    }
}

/// Assert that the last recorded event is the given state change.
pub fn assert_ends_with_state(events: &[SlideEvent], expected: slideup::SlideState, msg: &str) {
    match events.last() {
        Some(SlideEvent::State(state)) => {
            assert_eq!(*state, expected, "{}: events {:?}", msg, events)
        }
        other => panic!("{}: expected final state {:?}, got {:?}", msg, expected, other),
    }
}
