//! In-memory stand-ins for the host element and listeners.

use std::cell::RefCell;
use std::rc::Rc;

use slideup::{Rect, SharedElement, SlideListener, SlideState, SliderElement};

/// Element with fixed geometry that records what the slider did to it.
#[derive(Clone, Debug, PartialEq)]
pub struct FakeElement {
    pub offset: f32,
    pub width: f32,
    pub extent: f32,
    pub top: f32,
    pub parent_extent: Option<f32>,
    pub offset_writes: Vec<f32>,
    pub clicks: usize,
    pub soft_input_hides: usize,
}

impl FakeElement {
    pub fn new(extent: f32) -> Self {
        Self {
            offset: 0.0,
            width: 320.0,
            extent,
            top: 0.0,
            parent_extent: None,
            offset_writes: Vec::new(),
            clicks: 0,
            soft_input_hides: 0,
        }
    }

    pub fn with_top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn with_parent(mut self, parent_extent: f32) -> Self {
        self.parent_extent = Some(parent_extent);
        self
    }

    pub fn into_shared(self) -> Rc<RefCell<FakeElement>> {
        Rc::new(RefCell::new(self))
    }

    /// Bounds in parent coordinates, including the current translation.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, self.top + self.offset, self.width, self.extent)
    }
}

/// Upcasts a shared fake to the handle the builder takes.
pub fn as_slider_view(element: &Rc<RefCell<FakeElement>>) -> SharedElement {
    element.clone()
}

impl SliderElement for FakeElement {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.offset_writes.push(offset);
    }

    fn extent(&self) -> f32 {
        self.extent
    }

    fn top_edge(&self) -> f32 {
        self.top
    }

    fn parent_extent(&self) -> Option<f32> {
        self.parent_extent
    }

    fn perform_click(&mut self) {
        self.clicks += 1;
    }

    fn hide_soft_input(&mut self) {
        self.soft_input_hides += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideEvent {
    Slide(f32),
    State(SlideState),
}

/// Listener that keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<SlideEvent>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SlideEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<SlideEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn percents(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SlideEvent::Slide(percent) => Some(*percent),
                SlideEvent::State(_) => None,
            })
            .collect()
    }

    pub fn states(&self) -> Vec<SlideState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SlideEvent::State(state) => Some(*state),
                SlideEvent::Slide(_) => None,
            })
            .collect()
    }
}

impl SlideListener for RecordingListener {
    fn on_slide(&self, percent: f32) {
        self.events.borrow_mut().push(SlideEvent::Slide(percent));
    }

    fn on_state_changed(&self, state: SlideState) {
        self.events.borrow_mut().push(SlideEvent::State(state));
    }
}
