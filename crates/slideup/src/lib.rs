//! Swipe-to-dismiss slider behavior for a single view.
//!
//! A [`Slider`] is built with [`SlideBuilder`] around a host element. The
//! host forwards touch events to [`Slider::on_touch`] and drains the frame
//! runtime every frame; listeners receive slide progress and state changes.

mod builder;
mod error;
mod listener;
mod saved_state;
mod slider;

pub use builder::{SlideBuilder, SlideConfig, SlideTo};
pub use error::SlideError;
pub use listener::SlideListener;
pub use saved_state::SavedState;
pub use slider::Slider;

pub use slideup_animation::{AnimationSpec, Easing};
pub use slideup_core::{FrameClock, FrameRuntime, RuntimeHandle};
pub use slideup_foundation::{
    GesturePhase, Point, Rect, SharedElement, SlideDirection, SlideState, SliderElement,
    TouchEvent, TouchPhase, TouchResult, TouchSource,
};

pub mod prelude {
    pub use crate::builder::{SlideBuilder, SlideTo};
    pub use crate::listener::SlideListener;
    pub use crate::saved_state::SavedState;
    pub use crate::slider::Slider;
    pub use slideup_animation::Easing;
    pub use slideup_foundation::prelude::*;
}
