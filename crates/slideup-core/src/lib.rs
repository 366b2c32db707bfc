//! Frame runtime for SlideUp
//!
//! Everything in the slider runs on the host's single UI thread. Animation
//! ticks are one-shot frame callbacks registered on a [`FrameRuntime`] and
//! delivered when the host drains them with the current frame time.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{DefaultScheduler, RuntimeScheduler};
pub use runtime::{FrameRuntime, RuntimeHandle};

pub(crate) type FrameCallbackId = u64;

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Frame interval of a 60 Hz display, in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
