//! Gesture scripts: a JSON array of steps replayed in order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Press { y: f32 },
    Drag { y: f32 },
    Release { y: f32 },
    Cancel { y: f32 },
    /// Deliver a fixed number of frames.
    Frames { count: usize },
    /// Deliver frames until no animation is pending.
    Idle,
    Show,
    Hide,
    Toggle,
}

pub fn load(path: &Path) -> Result<Vec<Step>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<Step>> {
    Ok(serde_json::from_str(text)?)
}

/// Press, drag past the hide threshold, release and wait.
pub fn default_swipe(extent: f32) -> Vec<Step> {
    let start = extent * 0.1;
    let mut steps = vec![Step::Press { y: start }];
    for quarter in 1..=4 {
        steps.push(Step::Drag {
            y: start + extent * 0.15 * quarter as f32,
        });
    }
    steps.push(Step::Release {
        y: start + extent * 0.6,
    });
    steps.push(Step::Idle);
    steps
}
