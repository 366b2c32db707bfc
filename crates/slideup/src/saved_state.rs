//! Persisted slider configuration.
//!
//! The blob is a flat JSON object so hosts can store it wherever they keep
//! per-screen state. Readers never fail on individual fields: an absent or
//! mistyped value reads as `None` and the builder keeps its default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use slideup_foundation::{SlideDirection, SlideState};

use crate::SlideError;

pub const KEY_START_DIRECTION: &str = "slide_start_direction";
pub const KEY_STATE: &str = "slide_state";
pub const KEY_DEBUG: &str = "slide_debug";
pub const KEY_TOUCHABLE_AREA: &str = "slide_touchable_area";
pub const KEY_AUTO_SLIDE_DURATION: &str = "slide_auto_slide_duration";
pub const KEY_HIDE_SOFT_INPUT: &str = "slide_hide_soft_input";
pub const KEY_STATE_SAVED: &str = "slide_state_saved";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState {
    entries: Map<String, Value>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, SlideError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SlideError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key)?.as_bool()
    }

    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.entries.get(key)?.as_f64().map(|value| value as f32)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.entries.get(key)?.as_u64()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.as_str()
    }

    /// True when the blob was written by [`crate::Slider::save_state`].
    pub fn is_restored_marker(&self) -> bool {
        self.get_bool(KEY_STATE_SAVED).unwrap_or(false)
    }

    pub fn direction(&self) -> Option<SlideDirection> {
        self.get_str(KEY_START_DIRECTION)?.parse().ok()
    }

    pub fn state(&self) -> Option<SlideState> {
        self.get_str(KEY_STATE)?.parse().ok()
    }

    pub fn debug(&self) -> Option<bool> {
        self.get_bool(KEY_DEBUG)
    }

    /// Touchable area in density-independent units.
    pub fn touchable_area_dp(&self) -> Option<f32> {
        self.get_f32(KEY_TOUCHABLE_AREA)
    }

    pub fn auto_slide_duration(&self) -> Option<u64> {
        self.get_u64(KEY_AUTO_SLIDE_DURATION)
    }

    pub fn hide_soft_input(&self) -> Option<bool> {
        self.get_bool(KEY_HIDE_SOFT_INPUT)
    }
}

#[cfg(test)]
#[path = "tests/saved_state_tests.rs"]
mod tests;
