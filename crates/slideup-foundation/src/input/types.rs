use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Press,
    Drag,
    Release,
    Cancel,
}

/// View the touch stream came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchSource {
    #[default]
    Slider,
    /// The optional second view that also drives the slider.
    SecondaryTrigger,
}

/// Single-pointer touch event in absolute (screen) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Point,
    /// For releases, whether the pointer was lifted inside the element.
    pub within_bounds: bool,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, position: Point) -> Self {
        Self {
            phase,
            position,
            within_bounds: false,
        }
    }

    pub fn press(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Press, Point::new(x, y))
    }

    pub fn drag(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Drag, Point::new(x, y))
    }

    pub fn release(x: f32, y: f32, within_bounds: bool) -> Self {
        Self {
            within_bounds,
            ..Self::new(TouchPhase::Release, Point::new(x, y))
        }
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancel, Point::new(x, y))
    }

    /// Sets `within_bounds` by hit testing against the element's rect.
    pub fn hit_tested(mut self, bounds: Rect) -> Self {
        self.within_bounds = bounds.contains_point(self.position);
        self
    }
}

/// Whether a consumer took ownership of a touch event.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchResult {
    Handled,
    /// Left for the host's regular tap handling.
    NotHandled,
}

impl TouchResult {
    pub fn is_handled(self) -> bool {
        matches!(self, TouchResult::Handled)
    }
}
