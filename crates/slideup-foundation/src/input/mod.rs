mod types;

pub use types::{TouchEvent, TouchPhase, TouchResult, TouchSource};
