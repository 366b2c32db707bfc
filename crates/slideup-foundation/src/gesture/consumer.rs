use std::rc::Rc;

use slideup_animation::{AnimationSpec, SettleAnimation};
use slideup_core::FrameClock;

use super::{percent_for, GestureSession};
use crate::element::{SharedElement, SlideDirection, SlideNotifier, SlideState};
use crate::gesture_constants::HIDE_THRESHOLD_FRACTION;
use crate::input::{TouchEvent, TouchPhase, TouchResult};

/// Parameters the consumer reads from the slider configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    pub direction: SlideDirection,
    /// Travel that counts as 100% progress.
    pub slide_distance: f32,
    pub animation: AnimationSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Settling,
}

/// Turns a touch stream into live offset writes and a settle animation.
///
/// Both directions share one state machine: hiding moves the offset along
/// `direction.sign()`, and drags are only applied on that side of rest.
pub struct TouchConsumer {
    element: SharedElement,
    notifier: Rc<dyn SlideNotifier>,
    settle: SettleAnimation,
    config: TouchConfig,
    session: Option<GestureSession>,
}

impl TouchConsumer {
    pub fn new(
        element: SharedElement,
        notifier: Rc<dyn SlideNotifier>,
        frame_clock: FrameClock,
        config: TouchConfig,
    ) -> Self {
        Self {
            element,
            notifier,
            settle: SettleAnimation::new(frame_clock),
            config,
            session: None,
        }
    }

    pub fn on_touch(&mut self, event: &TouchEvent) -> TouchResult {
        let result = match event.phase {
            TouchPhase::Press => self.on_press(event),
            TouchPhase::Drag => self.on_drag(event),
            TouchPhase::Release => self.on_release(event),
            TouchPhase::Cancel => TouchResult::Handled,
        };
        if let Some(session) = self.session.as_mut() {
            session.record_position(event.position.y);
        }
        result
    }

    fn on_press(&mut self, event: &TouchEvent) -> TouchResult {
        let interrupted_target = self.settle.target();
        if interrupted_target.is_some() {
            self.settle.cancel();
        }
        let session = {
            let element = self.element.borrow();
            GestureSession::begin(element.extent(), event.position.y, element.offset())
                .interrupting(interrupted_target)
        };
        log::debug!(
            "press, extent: {}, start offset: {}, interrupted target: {:?}",
            session.element_extent(),
            session.start_element_offset(),
            interrupted_target
        );
        self.session = Some(session);
        TouchResult::Handled
    }

    fn on_drag(&mut self, event: &TouchEvent) -> TouchResult {
        let Some(session) = self.session.as_mut() else {
            return TouchResult::Handled;
        };
        let touch_y = event.position.y;
        let move_to = session.move_to(touch_y);
        let percent = percent_for(move_to, self.config.slide_distance);
        session.track_motion(touch_y, self.config.direction);

        log::trace!(
            "drag, move to: {move_to}, slide distance: {}, percent: {percent}",
            self.config.slide_distance
        );
        if self.config.direction.permits(move_to) && session.is_slide_enabled() {
            self.element.borrow_mut().set_offset(move_to);
            self.notifier.on_percent_changed(percent);
        }
        TouchResult::Handled
    }

    fn on_release(&mut self, event: &TouchEvent) -> TouchResult {
        let Some(session) = self.session.take() else {
            return TouchResult::Handled;
        };
        let offset = self.element.borrow().offset();
        if offset == session.start_element_offset() {
            // The element was caught mid-settle and let go in place.
            if let Some(target) = session.interrupted_target() {
                log::debug!("release without motion, resuming settle to {target}");
                self.animate_between(offset * self.config.direction.sign(), target);
                return TouchResult::Handled;
            }
            // A tap at rest; let the host see it when it landed on the element.
            return if event.within_bounds {
                TouchResult::NotHandled
            } else {
                TouchResult::Handled
            };
        }

        let from = offset * self.config.direction.sign();
        let crossed_threshold = from > session.element_extent() * HIDE_THRESHOLD_FRACTION;
        let target = if crossed_threshold && session.is_moving_away_from_origin() {
            self.hidden_distance(session.element_extent())
        } else {
            0.0
        };
        log::debug!(
            "release, from: {from}, crossed threshold: {crossed_threshold}, moving away: {}, target: {target}",
            session.is_moving_away_from_origin()
        );
        self.animate_between(from, target);
        TouchResult::Handled
    }

    /// Distance from rest at which the element is fully off-screen.
    pub fn hidden_distance(&self, extent: f32) -> f32 {
        match self.config.direction {
            SlideDirection::Down => extent,
            SlideDirection::Up => extent + self.element.borrow().top_edge(),
        }
    }

    /// Settles from the current offset to `target`, a distance from rest.
    pub fn settle_to(&mut self, target: f32) {
        self.session = None;
        let from = self.element.borrow().offset() * self.config.direction.sign();
        self.animate_between(from, target);
    }

    /// Places the element `target` away from rest without animating.
    pub fn snap_to(&mut self, target: f32) {
        self.session = None;
        self.settle.cancel();
        let sign = self.config.direction.sign();
        self.element.borrow_mut().set_offset(target * sign);
        self.notifier
            .on_percent_changed(percent_for(target, self.config.slide_distance));
        self.notifier.on_state_changed(SlideState::for_offset(target));
    }

    fn animate_between(&self, from: f32, to: f32) {
        let sign = self.config.direction.sign();
        let slide_distance = self.config.slide_distance;

        let on_value = {
            let element = Rc::clone(&self.element);
            let notifier = Rc::clone(&self.notifier);
            move |value: f32| {
                element.borrow_mut().set_offset(value * sign);
                notifier.on_percent_changed(percent_for(value, slide_distance));
            }
        };
        let on_end = {
            let element = Rc::clone(&self.element);
            let notifier = Rc::clone(&self.notifier);
            move |value: f32| {
                element.borrow_mut().set_offset(value * sign);
                notifier.on_state_changed(SlideState::for_offset(value));
            }
        };
        self.settle
            .start(from, to, self.config.animation, on_value, on_end);
    }

    /// Ends the running settle at its target, firing its state change.
    pub fn finish_settle(&self) {
        self.settle.finish_now();
    }

    pub fn phase(&self) -> GesturePhase {
        if self.session.is_some() {
            GesturePhase::Dragging
        } else if self.settle.is_running() {
            GesturePhase::Settling
        } else {
            GesturePhase::Idle
        }
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_running()
    }

    /// Target of the running settle, as a distance from rest.
    pub fn settle_target(&self) -> Option<f32> {
        self.settle.target()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Gates live offset writes for the rest of the current gesture.
    pub fn set_slide_enabled(&mut self, enabled: bool) {
        if let Some(session) = self.session.as_mut() {
            session.set_slide_enabled(enabled);
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Applies a new duration or curve to subsequent settles.
    pub fn set_animation(&mut self, animation: AnimationSpec) {
        self.config.animation = animation;
    }

    /// Replaces the configuration. A settle already in flight keeps the
    /// direction and distance it started with.
    pub fn reconfigure(&mut self, config: TouchConfig) {
        self.config = config;
    }
}

impl Drop for TouchConsumer {
    fn drop(&mut self) {
        self.settle.cancel();
    }
}

#[cfg(test)]
#[path = "../tests/consumer_tests.rs"]
mod tests;
