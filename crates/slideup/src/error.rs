use std::fmt;

#[derive(Debug)]
pub enum SlideError {
    /// `build` was called without a slider view.
    MissingSliderView,
    /// An explicit slide distance must be positive.
    InvalidSlideDistance { length: f32 },
    /// Persisted state could not be encoded or decoded.
    SavedState(serde_json::Error),
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideError::MissingSliderView => write!(f, "slider view is required"),
            SlideError::InvalidSlideDistance { length } => {
                write!(f, "slide distance must be positive, got {length}")
            }
            SlideError::SavedState(err) => write!(f, "saved state: {err}"),
        }
    }
}

impl std::error::Error for SlideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlideError::SavedState(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SlideError {
    fn from(err: serde_json::Error) -> Self {
        SlideError::SavedState(err)
    }
}
