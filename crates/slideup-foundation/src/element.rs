use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Positioning primitive and static geometry of the slider view, supplied by
/// the host toolkit. Offsets are translations along the vertical axis.
pub trait SliderElement {
    /// Current translation from the rest position.
    fn offset(&self) -> f32;

    fn set_offset(&mut self, offset: f32);

    /// Height of the element.
    fn extent(&self) -> f32;

    /// Position of the element's top edge inside its parent.
    fn top_edge(&self) -> f32;

    fn bottom_edge(&self) -> f32 {
        self.top_edge() + self.extent()
    }

    /// Height of the parent, `None` while detached.
    fn parent_extent(&self) -> Option<f32>;

    /// Delivers a tap the slider did not consume.
    fn perform_click(&mut self) {}

    fn hide_soft_input(&mut self) {}
}

pub type SharedElement = Rc<RefCell<dyn SliderElement>>;

/// Which way the slider leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SlideDirection {
    Up,
    #[default]
    Down,
}

impl SlideDirection {
    /// +1 when hiding moves the element towards larger offsets.
    pub fn sign(self) -> f32 {
        match self {
            SlideDirection::Up => -1.0,
            SlideDirection::Down => 1.0,
        }
    }

    /// Whether the element may be dragged to `offset` in this direction.
    pub fn permits(self, offset: f32) -> bool {
        offset * self.sign() > 0.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Up => "UP",
            SlideDirection::Down => "DOWN",
        }
    }
}

impl fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideDirection {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "UP" => Ok(SlideDirection::Up),
            "DOWN" => Ok(SlideDirection::Down),
            _ => Err(()),
        }
    }
}

/// Resting state of the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SlideState {
    #[default]
    Shown,
    Hidden,
}

impl SlideState {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideState::Shown => "SHOWN",
            SlideState::Hidden => "HIDDEN",
        }
    }

    /// State reached when settling ends at `offset`.
    pub fn for_offset(offset: f32) -> Self {
        if offset == 0.0 {
            SlideState::Shown
        } else {
            SlideState::Hidden
        }
    }
}

impl fmt::Display for SlideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideState {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SHOWN" => Ok(SlideState::Shown),
            "HIDDEN" => Ok(SlideState::Hidden),
            _ => Err(()),
        }
    }
}

/// Receives progress and state changes from drags and settle animations.
///
/// Percent values are not clamped; overshoot past the slide distance yields
/// values above 100.
pub trait SlideNotifier {
    fn on_percent_changed(&self, percent: f32);

    fn on_state_changed(&self, state: SlideState);
}
