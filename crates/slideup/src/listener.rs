use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

use slideup_foundation::gesture_constants::{HIDDEN_PERCENT, SHOWN_PERCENT};
use slideup_foundation::{SharedElement, SlideNotifier, SlideState};

/// Observer of a slider's progress.
pub trait SlideListener {
    /// `percent` of the slide distance travelled, 0 when shown and 100 when
    /// hidden.
    fn on_slide(&self, _percent: f32) {}

    /// Called when a settle finishes or the slider is placed immediately.
    fn on_state_changed(&self, _state: SlideState) {}
}

type ListenerList = SmallVec<[Rc<dyn SlideListener>; 4]>;

/// Fans consumer notifications out to the registered listeners.
pub(crate) struct SlideDispatcher {
    listeners: RefCell<ListenerList>,
    element: SharedElement,
    current_state: Cell<SlideState>,
    debug: Cell<bool>,
    hide_soft_input: Cell<bool>,
}

impl SlideDispatcher {
    pub(crate) fn new(
        element: SharedElement,
        listeners: impl IntoIterator<Item = Rc<dyn SlideListener>>,
        start_state: SlideState,
    ) -> Self {
        Self {
            listeners: RefCell::new(listeners.into_iter().collect()),
            element,
            current_state: Cell::new(start_state),
            debug: Cell::new(false),
            hide_soft_input: Cell::new(false),
        }
    }

    pub(crate) fn add(&self, listener: Rc<dyn SlideListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn remove(&self, listener: &Rc<dyn SlideListener>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|existing| !Rc::ptr_eq(existing, listener));
        listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub(crate) fn current_state(&self) -> SlideState {
        self.current_state.get()
    }

    /// Records `state` without notifying anyone.
    pub(crate) fn set_current_state(&self, state: SlideState) {
        self.current_state.set(state);
    }

    pub(crate) fn debug(&self) -> bool {
        self.debug.get()
    }

    pub(crate) fn set_debug(&self, debug: bool) {
        self.debug.set(debug);
    }

    pub(crate) fn hide_soft_input(&self) -> bool {
        self.hide_soft_input.get()
    }

    pub(crate) fn set_hide_soft_input(&self, hide: bool) {
        self.hide_soft_input.set(hide);
    }

    // Listeners may register or remove others while being notified.
    fn snapshot(&self) -> ListenerList {
        self.listeners.borrow().clone()
    }
}

impl SlideNotifier for SlideDispatcher {
    fn on_percent_changed(&self, percent: f32) {
        let percent = percent.clamp(SHOWN_PERCENT, HIDDEN_PERCENT);
        for (index, listener) in self.snapshot().iter().enumerate() {
            listener.on_slide(percent);
            if self.debug.get() {
                log::debug!("Listener({index}) on_slide value = {percent}");
            }
        }
    }

    fn on_state_changed(&self, state: SlideState) {
        self.current_state.set(state);
        if state == SlideState::Shown && self.hide_soft_input.get() {
            self.element.borrow_mut().hide_soft_input();
        }
        for (index, listener) in self.snapshot().iter().enumerate() {
            listener.on_state_changed(state);
            if self.debug.get() {
                log::debug!("Listener({index}) on_state_changed value = {state}");
            }
        }
    }
}
