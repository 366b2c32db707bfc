//! Testing utilities and harness for SlideUp

pub mod assertions;
pub mod fakes;
pub mod robot;

pub use assertions::assert_approx_eq;
pub use fakes::{FakeElement, RecordingListener, SlideEvent};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fakes::*;
    pub use crate::robot::*;
}
