//! Robot-style driver for slider tests.
//!
//! [`GestureRobot`] owns the frame runtime and a [`FakeElement`], sends touch
//! sequences to a [`Slider`] and pumps frames at a fixed 60 Hz interval.
//!
//! ```
//! use slideup_testing::{FakeElement, GestureRobot};
//!
//! let mut robot = GestureRobot::new(FakeElement::new(500.0));
//! let mut slider = robot.builder().build().unwrap();
//! robot.swipe(&mut slider, 100.0, 400.0, 10);
//! robot.wait_for_idle();
//! assert_eq!(robot.offset(), 500.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slideup::{
    FrameClock, FrameRuntime, SharedElement, SlideBuilder, Slider, TouchEvent, TouchSource,
};
use slideup_core::FRAME_INTERVAL_NANOS;

use crate::fakes::{as_slider_view, FakeElement};

/// Upper bound on frames pumped by [`GestureRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 10_000;

const POINTER_X: f32 = 10.0;

pub struct GestureRobot {
    runtime: FrameRuntime,
    element: Rc<RefCell<FakeElement>>,
    frame_time_nanos: u64,
    source: TouchSource,
}

impl GestureRobot {
    pub fn new(element: FakeElement) -> Self {
        Self {
            runtime: FrameRuntime::default(),
            element: element.into_shared(),
            frame_time_nanos: 0,
            source: TouchSource::Slider,
        }
    }

    pub fn element(&self) -> Rc<RefCell<FakeElement>> {
        Rc::clone(&self.element)
    }

    pub fn slider_view(&self) -> SharedElement {
        as_slider_view(&self.element)
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    /// Builder already wired to this robot's element and frame clock.
    pub fn builder(&self) -> SlideBuilder {
        SlideBuilder::new(self.frame_clock()).slider_view(self.slider_view())
    }

    pub fn offset(&self) -> f32 {
        self.element.borrow().offset
    }

    pub fn clicks(&self) -> usize {
        self.element.borrow().clicks
    }

    /// Routes later touches as if they came from the given view.
    pub fn set_source(&mut self, source: TouchSource) {
        self.source = source;
    }

    pub fn press(&mut self, slider: &mut Slider, y: f32) -> bool {
        slider.on_touch(self.source, &TouchEvent::press(POINTER_X, y))
    }

    pub fn drag_to(&mut self, slider: &mut Slider, y: f32) -> bool {
        slider.on_touch(self.source, &TouchEvent::drag(POINTER_X, y))
    }

    /// Lifts the pointer, hit testing against the element's current bounds.
    pub fn release(&mut self, slider: &mut Slider, y: f32) -> bool {
        let bounds = self.element.borrow().bounds();
        let event = TouchEvent::release(POINTER_X, y, false).hit_tested(bounds);
        slider.on_touch(self.source, &event)
    }

    pub fn cancel(&mut self, slider: &mut Slider, y: f32) -> bool {
        slider.on_touch(self.source, &TouchEvent::cancel(POINTER_X, y))
    }

    pub fn tap(&mut self, slider: &mut Slider, y: f32) -> bool {
        self.press(slider, y);
        self.release(slider, y)
    }

    /// Press at `from_y`, drag to `to_y` in equal steps, then release there.
    pub fn swipe(&mut self, slider: &mut Slider, from_y: f32, to_y: f32, steps: usize) -> bool {
        self.press(slider, from_y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.drag_to(slider, from_y + (to_y - from_y) * t);
        }
        self.release(slider, to_y)
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Delivers one frame at the next 60 Hz frame time.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    /// Pumps frames until no callbacks remain. Returns the number of frames.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.has_frame_callbacks() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "frame callbacks still pending after {frames} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        log::trace!("idle after {frames} frames");
        frames
    }
}
