use super::*;
use crate::SlideBuilder;
use slideup_core::{FrameRuntime, FRAME_INTERVAL_NANOS};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct Panel {
    offset: f32,
    extent: f32,
    top: f32,
    clicks: usize,
    keyboard_hides: usize,
}

impl slideup_foundation::SliderElement for Panel {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn extent(&self) -> f32 {
        self.extent
    }

    fn top_edge(&self) -> f32 {
        self.top
    }

    fn parent_extent(&self) -> Option<f32> {
        Some(1200.0)
    }

    fn perform_click(&mut self) {
        self.clicks += 1;
    }

    fn hide_soft_input(&mut self) {
        self.keyboard_hides += 1;
    }
}

#[derive(Default)]
struct Recorder {
    percents: RefCell<Vec<f32>>,
    states: RefCell<Vec<SlideState>>,
}

impl SlideListener for Recorder {
    fn on_slide(&self, percent: f32) {
        self.percents.borrow_mut().push(percent);
    }

    fn on_state_changed(&self, state: SlideState) {
        self.states.borrow_mut().push(state);
    }
}

struct Fixture {
    runtime: FrameRuntime,
    panel: Rc<RefCell<Panel>>,
    recorder: Rc<Recorder>,
    frame_time: Cell<u64>,
}

impl Fixture {
    fn new(extent: f32) -> Self {
        Self {
            runtime: FrameRuntime::default(),
            panel: Rc::new(RefCell::new(Panel {
                extent,
                top: 100.0,
                ..Panel::default()
            })),
            recorder: Rc::new(Recorder::default()),
            frame_time: Cell::new(0),
        }
    }

    fn builder(&self) -> SlideBuilder {
        let view: SharedElement = self.panel.clone();
        let listener: Rc<dyn SlideListener> = self.recorder.clone();
        SlideBuilder::new(self.runtime.frame_clock())
            .slider_view(view)
            .listener(listener)
    }

    fn settle(&self) {
        while self.runtime.has_frame_callbacks() {
            self.frame_time.set(self.frame_time.get() + FRAME_INTERVAL_NANOS);
            self.runtime.drain_frame_callbacks(self.frame_time.get());
        }
    }

    fn offset(&self) -> f32 {
        self.panel.borrow().offset
    }
}

#[test]
fn hidden_start_state_is_applied_at_build() {
    let fixture = Fixture::new(400.0);
    let slider = fixture
        .builder()
        .start_state(SlideState::Hidden)
        .build()
        .unwrap();

    assert_eq!(fixture.offset(), 400.0);
    assert_eq!(slider.current_state(), SlideState::Hidden);
    assert!(!slider.is_visible());
    assert_eq!(*fixture.recorder.percents.borrow(), vec![100.0]);
    assert_eq!(*fixture.recorder.states.borrow(), vec![SlideState::Hidden]);
}

#[test]
fn immediate_hide_before_layout_is_deferred() {
    let fixture = Fixture::new(0.0);
    let mut slider = fixture.builder().build().unwrap();
    fixture.recorder.states.borrow_mut().clear();

    slider.hide_immediately();
    assert_eq!(fixture.offset(), 0.0);
    assert_eq!(slider.current_state(), SlideState::Hidden);
    assert!(fixture.recorder.states.borrow().is_empty());

    fixture.panel.borrow_mut().extent = 300.0;
    slider.on_layout();
    assert_eq!(fixture.offset(), 300.0);
    assert_eq!(slider.slide_distance(), 300.0);
    assert_eq!(slider.touchable_area_px(), 300.0);
    assert_eq!(*fixture.recorder.states.borrow(), vec![SlideState::Hidden]);
}

#[test]
fn animated_hide_before_layout_is_deferred() {
    let fixture = Fixture::new(0.0);
    let mut slider = fixture.builder().build().unwrap();
    fixture.recorder.states.borrow_mut().clear();

    slider.hide();
    assert!(!slider.is_animation_running());
    assert_eq!(slider.current_state(), SlideState::Hidden);
    assert!(fixture.recorder.states.borrow().is_empty());

    fixture.panel.borrow_mut().extent = 250.0;
    slider.on_layout();
    assert_eq!(fixture.offset(), 250.0);
    assert_eq!(*fixture.recorder.states.borrow(), vec![SlideState::Hidden]);

    slider.show();
    fixture.settle();
    assert_eq!(slider.current_state(), SlideState::Shown);
}

#[test]
fn upward_hide_reports_clamped_percent() {
    let fixture = Fixture::new(500.0);
    let mut slider = fixture
        .builder()
        .slide_direction(SlideDirection::Up)
        .build()
        .unwrap();

    slider.hide_immediately();
    // Hidden distance includes the top edge: 600 of a 500 slide.
    assert_eq!(fixture.offset(), -600.0);
    assert_eq!(fixture.recorder.percents.borrow().last(), Some(&100.0));
}

#[test]
fn animated_show_reaches_rest() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture
        .builder()
        .start_state(SlideState::Hidden)
        .build()
        .unwrap();

    slider.show();
    assert!(slider.is_animation_running());
    assert_eq!(slider.gesture_phase(), GesturePhase::Settling);
    fixture.settle();

    assert_eq!(fixture.offset(), 0.0);
    assert!(slider.is_visible());
    assert!(!slider.is_animation_running());
    assert_eq!(
        *fixture.recorder.states.borrow(),
        vec![SlideState::Hidden, SlideState::Shown]
    );
}

#[test]
fn toggle_flips_visibility() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().build().unwrap();

    slider.toggle_immediately();
    assert_eq!(slider.current_state(), SlideState::Hidden);
    slider.toggle();
    fixture.settle();
    assert_eq!(slider.current_state(), SlideState::Shown);
    assert_eq!(fixture.offset(), 0.0);
}

#[test]
fn end_animation_jumps_to_target() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().build().unwrap();

    slider.hide();
    slider.end_animation();
    assert_eq!(fixture.offset(), 200.0);
    assert_eq!(slider.current_state(), SlideState::Hidden);
    assert!(!slider.is_animation_running());
}

#[test]
fn keyboard_is_hidden_when_shown() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture
        .builder()
        .hide_soft_input_when_displayed(true)
        .build()
        .unwrap();
    assert_eq!(fixture.panel.borrow().keyboard_hides, 1);

    slider.hide_immediately();
    assert_eq!(fixture.panel.borrow().keyboard_hides, 1);
    slider.show_immediately();
    assert_eq!(fixture.panel.borrow().keyboard_hides, 2);
}

#[test]
fn disabled_gestures_turn_touches_into_clicks() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().gestures_enabled(false).build().unwrap();

    assert!(slider.on_touch(TouchSource::Slider, &TouchEvent::press(0.0, 10.0)));
    assert!(slider.on_touch(TouchSource::Slider, &TouchEvent::drag(0.0, 150.0)));
    assert_eq!(fixture.offset(), 0.0);
    assert_eq!(fixture.panel.borrow().clicks, 2);
}

#[test]
fn secondary_trigger_needs_opt_in() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().build().unwrap();
    assert!(!slider.on_touch(TouchSource::SecondaryTrigger, &TouchEvent::press(0.0, 10.0)));

    slider = fixture.builder().slide_from_other_view(true).build().unwrap();
    assert!(slider.on_touch(TouchSource::SecondaryTrigger, &TouchEvent::press(0.0, 10.0)));
    assert!(slider.on_touch(TouchSource::SecondaryTrigger, &TouchEvent::drag(0.0, 90.0)));
    assert_eq!(fixture.offset(), 80.0);
}

#[test]
fn removed_listener_hears_nothing() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().build().unwrap();
    let listener: Rc<dyn SlideListener> = fixture.recorder.clone();
    assert_eq!(slider.listener_count(), 1);

    assert!(slider.remove_slide_listener(&listener));
    assert!(!slider.remove_slide_listener(&listener));
    fixture.recorder.states.borrow_mut().clear();
    slider.hide_immediately();
    assert!(fixture.recorder.states.borrow().is_empty());

    slider.add_slide_listener(listener);
    slider.show_immediately();
    assert_eq!(*fixture.recorder.states.borrow(), vec![SlideState::Shown]);
}

#[test]
fn runtime_setters_update_config() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().density(2.0).build().unwrap();

    slider.set_auto_slide_duration(0);
    slider.set_interpolator(Easing::Linear);
    slider.set_logging_enabled(true);
    slider.set_hide_keyboard_when_displayed(true);
    slider.set_touchable_area_dp(30.0);

    assert_eq!(slider.auto_slide_duration(), 0);
    assert_eq!(slider.interpolator(), Easing::Linear);
    assert!(slider.is_logging_enabled());
    assert!(slider.is_hide_keyboard_when_displayed());
    assert_eq!(slider.touchable_area_px(), 60.0);
    assert_eq!(slider.touchable_area_dp(), 30.0);

    // Zero duration settles without frames.
    slider.hide();
    assert!(!slider.is_animation_running());
    assert_eq!(fixture.offset(), 200.0);
}

#[test]
fn direction_change_recomputes_geometry() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture.builder().slide_to_parent().build().unwrap();
    assert_eq!(slider.slide_distance(), 900.0);

    slider.set_slide_direction(SlideDirection::Up);
    assert_eq!(slider.slide_direction(), SlideDirection::Up);
    assert_eq!(slider.slide_distance(), 100.0);
}

#[test]
fn save_state_captures_settings() {
    let fixture = Fixture::new(200.0);
    let mut slider = fixture
        .builder()
        .density(2.0)
        .touchable_area_px(64.0)
        .auto_slide_duration(150)
        .logging_enabled(true)
        .build()
        .unwrap();
    slider.hide_immediately();

    let saved = slider.save_state();
    assert!(saved.is_restored_marker());
    assert_eq!(saved.direction(), Some(SlideDirection::Down));
    assert_eq!(saved.state(), Some(SlideState::Hidden));
    assert_eq!(saved.debug(), Some(true));
    assert_eq!(saved.touchable_area_dp(), Some(32.0));
    assert_eq!(saved.auto_slide_duration(), Some(150));
    assert_eq!(saved.hide_soft_input(), Some(false));
}
