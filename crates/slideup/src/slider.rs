use std::rc::Rc;

use slideup_animation::Easing;
use slideup_core::FrameClock;
use slideup_foundation::{
    GesturePhase, SharedElement, SlideDirection, SlideNotifier, SlideState, TouchConfig,
    TouchConsumer, TouchEvent, TouchSource,
};

use crate::builder::SlideConfig;
use crate::listener::{SlideDispatcher, SlideListener};
use crate::saved_state::{self, SavedState};

/// A slider view with drag-to-dismiss behavior.
///
/// The host forwards touch events to [`Slider::on_touch`], calls
/// [`Slider::on_layout`] once the element has been measured, and drains the
/// frame runtime backing the slider's [`FrameClock`] every frame.
pub struct Slider {
    element: SharedElement,
    frame_clock: FrameClock,
    config: SlideConfig,
    dispatcher: Rc<SlideDispatcher>,
    consumer: TouchConsumer,
    slide_distance: f32,
}

impl Slider {
    pub(crate) fn new(
        element: SharedElement,
        frame_clock: FrameClock,
        config: SlideConfig,
        listeners: Vec<Rc<dyn SlideListener>>,
    ) -> Self {
        let dispatcher = Rc::new(SlideDispatcher::new(
            Rc::clone(&element),
            listeners,
            config.start_state,
        ));
        dispatcher.set_debug(config.debug);
        dispatcher.set_hide_soft_input(config.hide_soft_input);

        let slide_distance = config
            .slide_to
            .resolve(config.direction, &*element.borrow());
        let notifier: Rc<dyn SlideNotifier> = dispatcher.clone();
        let consumer = TouchConsumer::new(
            Rc::clone(&element),
            notifier,
            frame_clock.clone(),
            TouchConfig {
                direction: config.direction,
                slide_distance,
                animation: config.animation(),
            },
        );

        let mut slider = Self {
            element,
            frame_clock,
            config,
            dispatcher,
            consumer,
            slide_distance,
        };
        slider.apply_touchable_area_default();
        slider.update_to_current_state();
        slider
    }

    /// Routes a touch event. Returns whether the event was taken; when the
    /// slider does not consume a tap the element receives a click instead.
    pub fn on_touch(&mut self, source: TouchSource, event: &TouchEvent) -> bool {
        if source == TouchSource::SecondaryTrigger && !self.config.slide_from_other_view {
            return false;
        }
        if !self.config.gestures_enabled {
            self.element.borrow_mut().perform_click();
            return true;
        }
        if !self.consumer.on_touch(event).is_handled() {
            self.element.borrow_mut().perform_click();
        }
        true
    }

    /// Re-reads the element geometry after it has been measured.
    pub fn on_layout(&mut self) {
        self.slide_distance = {
            let element = self.element.borrow();
            self.config.slide_to.resolve(self.config.direction, &*element)
        };
        log::debug!(
            "layout, slide distance: {}, direction: {}",
            self.slide_distance,
            self.config.direction
        );
        self.apply_touchable_area_default();
        self.reconfigure_consumer();
        self.update_to_current_state();
    }

    fn apply_touchable_area_default(&mut self) {
        if self.config.touchable_area == 0.0 {
            self.config.touchable_area = self.element.borrow().extent();
        }
    }

    fn reconfigure_consumer(&mut self) {
        self.consumer.reconfigure(TouchConfig {
            direction: self.config.direction,
            slide_distance: self.slide_distance,
            animation: self.config.animation(),
        });
    }

    fn update_to_current_state(&mut self) {
        match self.current_state() {
            SlideState::Shown => self.show_immediately(),
            SlideState::Hidden => self.hide_immediately(),
        }
    }

    pub fn show(&mut self) {
        self.show_with(false);
    }

    pub fn hide(&mut self) {
        self.hide_with(false);
    }

    pub fn show_immediately(&mut self) {
        self.show_with(true);
    }

    pub fn hide_immediately(&mut self) {
        self.hide_with(true);
    }

    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn toggle_immediately(&mut self) {
        if self.is_visible() {
            self.hide_immediately();
        } else {
            self.show_immediately();
        }
    }

    fn show_with(&mut self, immediately: bool) {
        if !self.has_extent() {
            self.set_pending_state(SlideState::Shown);
        } else if immediately {
            self.consumer.snap_to(0.0);
        } else {
            self.consumer.settle_to(0.0);
        }
    }

    fn hide_with(&mut self, immediately: bool) {
        let extent = self.element.borrow().extent();
        if extent <= 0.0 {
            self.set_pending_state(SlideState::Hidden);
            return;
        }
        let target = self.consumer.hidden_distance(extent);
        if immediately {
            self.consumer.snap_to(target);
        } else {
            self.consumer.settle_to(target);
        }
    }

    fn has_extent(&self) -> bool {
        self.element.borrow().extent() > 0.0
    }

    // Before layout there is nothing to move; remember the state for later.
    fn set_pending_state(&mut self, state: SlideState) {
        self.config.start_state = state;
        self.dispatcher.set_current_state(state);
    }

    /// Jumps a running settle to its target and reports the final state.
    pub fn end_animation(&self) {
        self.consumer.finish_settle();
    }

    pub fn is_visible(&self) -> bool {
        self.current_state() == SlideState::Shown
    }

    /// Last state reported to listeners, or the pending start state before
    /// the element has been laid out.
    pub fn current_state(&self) -> SlideState {
        self.dispatcher.current_state()
    }

    pub fn is_animation_running(&self) -> bool {
        self.consumer.is_settling()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.consumer.phase()
    }

    pub fn slide_distance(&self) -> f32 {
        self.slide_distance
    }

    pub fn slide_direction(&self) -> SlideDirection {
        self.config.direction
    }

    /// Changes the direction of later gestures and settles.
    pub fn set_slide_direction(&mut self, direction: SlideDirection) {
        if self.config.direction == direction {
            return;
        }
        self.config.direction = direction;
        self.on_layout();
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn frame_clock(&self) -> &FrameClock {
        &self.frame_clock
    }

    pub fn add_slide_listener(&self, listener: Rc<dyn SlideListener>) {
        self.dispatcher.add(listener);
    }

    /// Returns whether the listener was registered.
    pub fn remove_slide_listener(&self, listener: &Rc<dyn SlideListener>) -> bool {
        self.dispatcher.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.dispatcher.len()
    }

    pub fn auto_slide_duration(&self) -> u64 {
        self.config.auto_slide_duration
    }

    pub fn set_auto_slide_duration(&mut self, millis: u64) {
        self.config.auto_slide_duration = millis;
        self.consumer.set_animation(self.config.animation());
    }

    pub fn interpolator(&self) -> Easing {
        self.config.interpolator
    }

    pub fn set_interpolator(&mut self, easing: Easing) {
        self.config.interpolator = easing;
        self.consumer.set_animation(self.config.animation());
    }

    pub fn is_gestures_enabled(&self) -> bool {
        self.config.gestures_enabled
    }

    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        self.config.gestures_enabled = enabled;
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.dispatcher.debug()
    }

    pub fn set_logging_enabled(&mut self, enabled: bool) {
        self.config.debug = enabled;
        self.dispatcher.set_debug(enabled);
    }

    pub fn is_hide_keyboard_when_displayed(&self) -> bool {
        self.dispatcher.hide_soft_input()
    }

    pub fn set_hide_keyboard_when_displayed(&mut self, hide: bool) {
        self.config.hide_soft_input = hide;
        self.dispatcher.set_hide_soft_input(hide);
    }

    pub fn touchable_area_px(&self) -> f32 {
        self.config.touchable_area
    }

    pub fn set_touchable_area_px(&mut self, px: f32) {
        self.config.touchable_area = px;
    }

    pub fn touchable_area_dp(&self) -> f32 {
        self.config.touchable_area_dp()
    }

    pub fn set_touchable_area_dp(&mut self, dp: f32) {
        self.config.touchable_area = dp * self.config.density;
    }

    /// Captures the settings that survive a host restart.
    pub fn save_state(&self) -> SavedState {
        let mut saved = SavedState::new();
        saved.put(saved_state::KEY_STATE_SAVED, true);
        saved.put(saved_state::KEY_START_DIRECTION, self.config.direction.as_str());
        saved.put(saved_state::KEY_DEBUG, self.config.debug);
        saved.put(saved_state::KEY_TOUCHABLE_AREA, self.config.touchable_area_dp());
        saved.put(saved_state::KEY_STATE, self.current_state().as_str());
        saved.put(
            saved_state::KEY_AUTO_SLIDE_DURATION,
            self.config.auto_slide_duration,
        );
        saved.put(saved_state::KEY_HIDE_SOFT_INPUT, self.config.hide_soft_input);
        saved
    }
}

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod tests;
