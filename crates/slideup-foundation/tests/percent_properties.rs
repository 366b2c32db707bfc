//! Property tests for drag progress reporting.

use proptest::prelude::*;
use slideup_foundation::{percent_for, SlideDirection};

proptest! {
    /// Progress grows strictly with the distance dragged from rest.
    #[test]
    fn percent_grows_with_offset(
        distance in 1.0f32..2000.0,
        near in 0.0f32..1000.0,
        extra in 1.0f32..1000.0,
    ) {
        let far = near + extra;
        prop_assert!(percent_for(far, distance) > percent_for(near, distance));
        prop_assert!(percent_for(-far, distance) > percent_for(-near, distance));
    }

    /// Rest is always 0%, whatever the slide distance.
    #[test]
    fn rest_is_zero_percent(distance in -100.0f32..2000.0) {
        prop_assert_eq!(percent_for(0.0, distance), 0.0);
    }

    /// A down slider only accepts positive offsets, an up slider negative ones.
    #[test]
    fn directions_permit_opposite_sides(offset in -1000.0f32..1000.0) {
        prop_assume!(offset != 0.0);
        prop_assert_ne!(
            SlideDirection::Down.permits(offset),
            SlideDirection::Up.permits(offset)
        );
        prop_assert!(!SlideDirection::Down.permits(0.0));
        prop_assert!(!SlideDirection::Up.permits(0.0));
    }
}
