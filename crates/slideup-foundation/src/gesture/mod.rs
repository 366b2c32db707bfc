//! Drag-to-settle gesture handling.

mod consumer;
mod session;

pub use consumer::{GesturePhase, TouchConfig, TouchConsumer};
pub use session::GestureSession;

/// Progress of `offset` along `slide_distance`, in percent.
///
/// A non-positive slide distance reports 0 instead of dividing by zero.
/// Values are not clamped to `[0, 100]`.
pub fn percent_for(offset: f32, slide_distance: f32) -> f32 {
    if slide_distance <= 0.0 {
        return 0.0;
    }
    offset.abs() * 100.0 / slide_distance
}
