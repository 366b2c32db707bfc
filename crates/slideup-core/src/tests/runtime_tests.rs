use super::*;
use crate::{DefaultScheduler, FrameCallbackRegistration};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct CountingScheduler {
    requests: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn drained_callback_receives_frame_time() {
    let runtime = FrameRuntime::new(Rc::new(DefaultScheduler));
    let seen = Rc::new(Cell::new(None));
    let seen_in_callback = Rc::clone(&seen);

    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |time| seen_in_callback.set(Some(time)));
    assert!(registration.is_active());
    assert!(runtime.has_frame_callbacks());

    runtime.drain_frame_callbacks(42);
    registration.release();

    assert_eq!(seen.get(), Some(42));
    assert!(!runtime.has_frame_callbacks());
    assert_eq!(runtime.handle().last_frame_time_nanos(), Some(42));
}

#[test]
fn cancelled_callback_never_runs() {
    let runtime = FrameRuntime::default();
    let ran = Rc::new(Cell::new(false));
    let ran_in_callback = Rc::clone(&ran);

    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| ran_in_callback.set(true));
    registration.cancel();
    runtime.drain_frame_callbacks(16);

    assert!(!ran.get());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = FrameRuntime::default();
    let ran = Rc::new(Cell::new(false));
    let ran_in_callback = Rc::clone(&ran);

    drop(
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| ran_in_callback.set(true)),
    );
    runtime.drain_frame_callbacks(16);

    assert!(!ran.get());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = FrameRuntime::default();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let clock = runtime.frame_clock();
    let slot: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    {
        let frames = Rc::clone(&frames);
        let clock_inner = clock.clone();
        let slot_inner = Rc::clone(&slot);
        let registration = clock.with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            let next = clock_inner.with_frame_nanos(move |time| frames.borrow_mut().push(time));
            slot_inner.borrow_mut().replace(next);
        });
        registration.release();
    }

    runtime.drain_frame_callbacks(1);
    assert_eq!(frames.borrow().as_slice(), &[1]);

    runtime.drain_frame_callbacks(2);
    assert_eq!(frames.borrow().as_slice(), &[1, 2]);
}

#[test]
fn registering_requests_a_frame_from_scheduler() {
    let scheduler = Rc::new(CountingScheduler {
        requests: Cell::new(0),
    });
    let runtime = FrameRuntime::new(scheduler.clone());

    let _first = runtime.frame_clock().with_frame_nanos(|_| {});
    let _second = runtime.frame_clock().with_frame_millis(|_| {});

    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = FrameRuntime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
}
