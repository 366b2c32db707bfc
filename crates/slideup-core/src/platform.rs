//! Host hooks for frame scheduling.

/// Asks the host toolkit for another frame.
///
/// The runtime calls this whenever a frame callback is registered so hosts
/// with an on-demand render loop know there is animation work pending.
pub trait RuntimeScheduler {
    fn schedule_frame(&self);
}

/// Scheduler for hosts that render continuously.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
