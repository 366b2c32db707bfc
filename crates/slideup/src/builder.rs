use std::rc::Rc;

use slideup_animation::{AnimationSpec, Easing};
use slideup_core::FrameClock;
use slideup_foundation::{SharedElement, SlideDirection, SlideState, SliderElement};

use crate::listener::SlideListener;
use crate::saved_state::SavedState;
use crate::{SlideError, Slider};

pub const DEFAULT_AUTO_SLIDE_DURATION: u64 = 300;

/// How far the slider travels for a complete slide.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SlideTo {
    /// The element's own height.
    #[default]
    OwnExtent,
    /// The gap between the element and the parent edge it slides towards.
    Parent,
    Length(f32),
}

impl SlideTo {
    pub fn resolve(self, direction: SlideDirection, element: &dyn SliderElement) -> f32 {
        match self {
            SlideTo::OwnExtent => element.extent(),
            SlideTo::Parent => match element.parent_extent() {
                None => 0.0,
                Some(parent_extent) => match direction {
                    SlideDirection::Up => element.top_edge(),
                    SlideDirection::Down => parent_extent - element.bottom_edge(),
                },
            },
            SlideTo::Length(length) => length,
        }
    }
}

/// Settings shared by the builder and a live [`Slider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideConfig {
    pub direction: SlideDirection,
    pub start_state: SlideState,
    pub slide_to: SlideTo,
    pub auto_slide_duration: u64,
    pub interpolator: Easing,
    pub gestures_enabled: bool,
    pub hide_soft_input: bool,
    pub debug: bool,
    /// Height of the hit region in pixels; 0 means the whole element.
    pub touchable_area: f32,
    /// Pixels per density-independent unit.
    pub density: f32,
    /// Whether touches from the secondary trigger view drive the slider.
    pub slide_from_other_view: bool,
}

impl SlideConfig {
    pub fn animation(&self) -> AnimationSpec {
        AnimationSpec::tween(self.auto_slide_duration, self.interpolator)
    }

    pub fn touchable_area_dp(&self) -> f32 {
        if self.density > 0.0 {
            self.touchable_area / self.density
        } else {
            self.touchable_area
        }
    }
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            direction: SlideDirection::Down,
            start_state: SlideState::Shown,
            slide_to: SlideTo::OwnExtent,
            auto_slide_duration: DEFAULT_AUTO_SLIDE_DURATION,
            interpolator: Easing::Decelerate,
            gestures_enabled: true,
            hide_soft_input: false,
            debug: false,
            touchable_area: 0.0,
            density: 1.0,
            slide_from_other_view: false,
        }
    }
}

/// Fluent construction of a [`Slider`].
///
/// Once a saved state carrying the restored marker has been applied, the
/// direction, start state, logging, duration and soft-input settings keep
/// their restored values for the rest of the chain. Set `density` before
/// `saved_state` so the stored touchable area converts correctly.
pub struct SlideBuilder {
    frame_clock: FrameClock,
    element: Option<SharedElement>,
    listeners: Vec<Rc<dyn SlideListener>>,
    config: SlideConfig,
    state_restored: bool,
}

impl SlideBuilder {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            frame_clock,
            element: None,
            listeners: Vec::new(),
            config: SlideConfig::default(),
            state_restored: false,
        }
    }

    pub fn slider_view(mut self, element: SharedElement) -> Self {
        self.element = Some(element);
        self
    }

    pub fn start_state(mut self, state: SlideState) -> Self {
        if !self.state_restored {
            self.config.start_state = state;
        }
        self
    }

    pub fn slide_direction(mut self, direction: SlideDirection) -> Self {
        if !self.state_restored {
            self.config.direction = direction;
        }
        self
    }

    pub fn listeners(mut self, listeners: impl IntoIterator<Item = Rc<dyn SlideListener>>) -> Self {
        self.listeners.extend(listeners);
        self
    }

    pub fn listener(mut self, listener: Rc<dyn SlideListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn logging_enabled(mut self, enabled: bool) -> Self {
        if !self.state_restored {
            self.config.debug = enabled;
        }
        self
    }

    pub fn auto_slide_duration(mut self, millis: u64) -> Self {
        if !self.state_restored {
            self.config.auto_slide_duration = millis;
        }
        self
    }

    pub fn gestures_enabled(mut self, enabled: bool) -> Self {
        self.config.gestures_enabled = enabled;
        self
    }

    pub fn hide_soft_input_when_displayed(mut self, hide: bool) -> Self {
        if !self.state_restored {
            self.config.hide_soft_input = hide;
        }
        self
    }

    pub fn interpolator(mut self, easing: Easing) -> Self {
        self.config.interpolator = easing;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.config.density = density;
        self
    }

    pub fn touchable_area_px(mut self, px: f32) -> Self {
        self.config.touchable_area = px;
        self
    }

    pub fn touchable_area_dp(mut self, dp: f32) -> Self {
        self.config.touchable_area = dp * self.config.density;
        self
    }

    pub fn slide_from_other_view(mut self, enabled: bool) -> Self {
        self.config.slide_from_other_view = enabled;
        self
    }

    pub fn slide_to_self(mut self) -> Self {
        self.config.slide_to = SlideTo::OwnExtent;
        self
    }

    pub fn slide_to_parent(mut self) -> Self {
        self.config.slide_to = SlideTo::Parent;
        self
    }

    pub fn slide_to(mut self, length: f32) -> Self {
        self.config.slide_to = SlideTo::Length(length);
        self
    }

    /// Applies a previously saved state. `None` leaves the builder unchanged.
    pub fn saved_state(mut self, saved: Option<&SavedState>) -> Self {
        let Some(saved) = saved else {
            return self;
        };
        let restored = saved.is_restored_marker();
        if let Some(state) = saved.state() {
            self.config.start_state = state;
        }
        if let Some(direction) = saved.direction() {
            self.config.direction = direction;
        }
        if let Some(debug) = saved.debug() {
            self.config.debug = debug;
        }
        if let Some(area_dp) = saved.touchable_area_dp() {
            self.config.touchable_area = area_dp * self.config.density;
        }
        if let Some(duration) = saved.auto_slide_duration() {
            self.config.auto_slide_duration = duration;
        }
        if let Some(hide) = saved.hide_soft_input() {
            self.config.hide_soft_input = hide;
        }
        self.state_restored = self.state_restored || restored;
        self
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn build(self) -> Result<Slider, SlideError> {
        let element = self.element.ok_or(SlideError::MissingSliderView)?;
        if let SlideTo::Length(length) = self.config.slide_to {
            if length.is_nan() || length <= 0.0 {
                return Err(SlideError::InvalidSlideDistance { length });
            }
        }
        Ok(Slider::new(
            element,
            self.frame_clock,
            self.config,
            self.listeners,
        ))
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
