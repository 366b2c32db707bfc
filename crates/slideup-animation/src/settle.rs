//! Settle animation driver.
//!
//! Drives a tween between two offsets using the runtime's frame callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slideup_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};

use crate::AnimationSpec;

type SettleSlot = Rc<RefCell<Option<SettleRun>>>;

/// State of the transition currently in flight.
struct SettleRun {
    /// Distinguishes this run from later ones started on the same animation.
    id: u64,
    from: f32,
    to: f32,
    spec: AnimationSpec,
    /// Frame time of the first tick; elapsed time is measured from here.
    start_frame_time_nanos: Option<u64>,
    last_value: f32,
    on_value: Rc<dyn Fn(f32)>,
    on_end: Option<Box<dyn FnOnce(f32)>>,
    registration: Option<FrameCallbackRegistration>,
}

fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

fn schedule_next_frame(slot: &SettleSlot, frame_clock: &FrameClock, run_id: u64) {
    let weak = Rc::downgrade(slot);
    let clock = frame_clock.clone();
    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        if let Some(slot) = weak.upgrade() {
            on_frame(&slot, &clock, run_id, frame_time_nanos);
        }
    });

    let mut guard = slot.borrow_mut();
    match guard.as_mut() {
        Some(run) if run.id == run_id => run.registration = Some(registration),
        // Run was replaced while scheduling; the registration drops and cancels.
        _ => {}
    }
}

fn on_frame(slot: &SettleSlot, frame_clock: &FrameClock, run_id: u64, frame_time_nanos: u64) {
    let (value, finished, on_value) = {
        let mut guard = slot.borrow_mut();
        let Some(run) = guard.as_mut() else {
            return;
        };
        if run.id != run_id {
            return;
        }
        if let Some(registration) = run.registration.take() {
            registration.release();
        }

        let start_time = *run.start_frame_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = (run.spec.duration_millis * NANOS_PER_MILLI).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let finished = linear_progress >= 1.0;
        let value = if finished {
            run.to
        } else {
            lerp(run.from, run.to, run.spec.easing.transform(linear_progress))
        };
        run.last_value = value;
        (value, finished, Rc::clone(&run.on_value))
    };

    on_value(value);

    if finished {
        let on_end = {
            let mut guard = slot.borrow_mut();
            let current = guard.as_ref().is_some_and(|run| run.id == run_id);
            if current {
                guard.take().and_then(|mut run| run.on_end.take())
            } else {
                None
            }
        };
        if let Some(on_end) = on_end {
            log::debug!("settle finished at {value}");
            on_end(value);
        }
    } else {
        // `on_value` may have cancelled or restarted the animation.
        let current = slot.borrow().as_ref().is_some_and(|run| run.id == run_id);
        if current {
            schedule_next_frame(slot, frame_clock, run_id);
        }
    }
}

/// Animates an offset from one value to another over frames.
///
/// Only one transition runs at a time: starting a new one cancels the
/// previous run, which then receives no further ticks and no end callback.
pub struct SettleAnimation {
    state: SettleSlot,
    frame_clock: FrameClock,
    next_run_id: Rc<Cell<u64>>,
}

impl SettleAnimation {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
            next_run_id: Rc::new(Cell::new(1)),
        }
    }

    /// Starts a transition from `from` to `to`.
    ///
    /// * `on_value` - invoked every tick with the interpolated value
    /// * `on_end` - invoked once with the final value on natural completion
    ///
    /// A zero-duration spec calls `on_end(to)` synchronously without ticking.
    pub fn start<F, G>(&self, from: f32, to: f32, spec: AnimationSpec, on_value: F, on_end: G)
    where
        F: Fn(f32) + 'static,
        G: FnOnce(f32) + 'static,
    {
        self.cancel();
        log::debug!(
            "settle start, from: {from}, to: {to}, duration: {}ms",
            spec.duration_millis
        );

        if spec.is_immediate() {
            on_end(to);
            return;
        }

        let run_id = self.next_run_id.get();
        self.next_run_id.set(run_id + 1);
        *self.state.borrow_mut() = Some(SettleRun {
            id: run_id,
            from,
            to,
            spec,
            start_frame_time_nanos: None,
            last_value: from,
            on_value: Rc::new(on_value),
            on_end: Some(Box::new(on_end)),
            registration: None,
        });

        schedule_next_frame(&self.state, &self.frame_clock, run_id);
    }

    /// Stops the running transition where it is. No end callback fires.
    pub fn cancel(&self) {
        let run = self.state.borrow_mut().take();
        if let Some(run) = run {
            log::debug!("settle cancelled at {}", run.last_value);
            // Dropping the run drops its registration, unscheduling the tick.
            drop(run);
        }
    }

    /// Jumps the running transition to its target and fires its end callback.
    pub fn finish_now(&self) {
        let run = self.state.borrow_mut().take();
        if let Some(mut run) = run {
            let to = run.to;
            let on_value = Rc::clone(&run.on_value);
            let on_end = run.on_end.take();
            drop(run);
            on_value(to);
            if let Some(on_end) = on_end {
                on_end(to);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Target of the running transition.
    pub fn target(&self) -> Option<f32> {
        self.state.borrow().as_ref().map(|run| run.to)
    }

    /// Most recent value produced by the running transition.
    pub fn last_value(&self) -> Option<f32> {
        self.state.borrow().as_ref().map(|run| run.last_value)
    }
}

#[cfg(test)]
#[path = "tests/settle_tests.rs"]
mod tests;
