//! Animation system for SlideUp
//!
//! Provides easing curves, tween specs and the frame-driven animation that
//! settles a slider at rest or off-screen after a gesture.

mod easing;
mod settle;

pub use easing::{AnimationSpec, Easing};
pub use settle::SettleAnimation;
