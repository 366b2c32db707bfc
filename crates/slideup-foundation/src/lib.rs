//! Touch input, element contract and the drag-to-settle state machine.

mod element;
mod geometry;
pub mod gesture;
pub mod gesture_constants;
pub mod input;

pub use element::{SharedElement, SlideDirection, SlideNotifier, SlideState, SliderElement};
pub use geometry::{Point, Rect};
pub use gesture::{percent_for, GesturePhase, GestureSession, TouchConfig, TouchConsumer};
pub use input::{TouchEvent, TouchPhase, TouchResult, TouchSource};

pub mod prelude {
    pub use crate::element::{SlideDirection, SlideNotifier, SlideState, SliderElement};
    pub use crate::geometry::{Point, Rect};
    pub use crate::input::{TouchEvent, TouchPhase, TouchResult, TouchSource};
}
