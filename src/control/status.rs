use crate::ui::view::Tone;
use std::fmt;

pub const COPY_SUCCESS_MESSAGE: &str = "Code copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy code to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,   // never activated, or reset
    Copied, // last write succeeded
    Failed, // last write was rejected
}

impl CopyStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Copied => COPY_SUCCESS_MESSAGE,
            Self::Failed => COPY_FAILED_MESSAGE,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Idle => Tone::Normal,
            Self::Copied => Tone::Success,
            Self::Failed => Tone::Failure,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
