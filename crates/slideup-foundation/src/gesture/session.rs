use crate::element::SlideDirection;

/// Tracking state for one press-drag-release cycle.
///
/// The snapshot fields are written once at press; only the motion tracking
/// changes while dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    element_extent: f32,
    start_touch_y: f32,
    start_element_offset: f32,
    previous_touch_y: f32,
    moving_toward_origin: bool,
    moving_away_from_origin: bool,
    slide_enabled: bool,
    /// Target of the settle this press stopped, as a distance from rest.
    interrupted_target: Option<f32>,
}

impl GestureSession {
    pub fn begin(element_extent: f32, touch_y: f32, element_offset: f32) -> Self {
        Self {
            element_extent,
            start_touch_y: touch_y,
            start_element_offset: element_offset,
            previous_touch_y: touch_y,
            moving_toward_origin: false,
            moving_away_from_origin: false,
            slide_enabled: true,
            interrupted_target: None,
        }
    }

    /// Marks the session as having stopped a settle heading to `target`.
    pub fn interrupting(mut self, target: Option<f32>) -> Self {
        self.interrupted_target = target;
        self
    }

    /// Offset the element would take with the pointer at `touch_y`.
    pub fn move_to(&self, touch_y: f32) -> f32 {
        self.start_element_offset + (touch_y - self.start_touch_y)
    }

    /// Derives the instantaneous drag direction from the previous position.
    /// No motion clears both flags.
    pub fn track_motion(&mut self, touch_y: f32, direction: SlideDirection) {
        let step = (touch_y - self.previous_touch_y) * direction.sign();
        self.moving_away_from_origin = step > 0.0;
        self.moving_toward_origin = step < 0.0;
    }

    pub fn record_position(&mut self, touch_y: f32) {
        self.previous_touch_y = touch_y;
    }

    pub fn set_slide_enabled(&mut self, enabled: bool) {
        self.slide_enabled = enabled;
    }

    pub fn element_extent(&self) -> f32 {
        self.element_extent
    }

    pub fn start_touch_y(&self) -> f32 {
        self.start_touch_y
    }

    pub fn start_element_offset(&self) -> f32 {
        self.start_element_offset
    }

    pub fn previous_touch_y(&self) -> f32 {
        self.previous_touch_y
    }

    pub fn is_moving_toward_origin(&self) -> bool {
        self.moving_toward_origin
    }

    pub fn is_moving_away_from_origin(&self) -> bool {
        self.moving_away_from_origin
    }

    pub fn is_slide_enabled(&self) -> bool {
        self.slide_enabled
    }

    pub fn interrupted_target(&self) -> Option<f32> {
        self.interrupted_target
    }
}
