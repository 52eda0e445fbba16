use pali_core::script::ScriptError;
use pali_core::search::{Boundaries, Cursor, ResultSet, SearchError};
use pali_core::settings::Settings;

pub const MESSAGE_NOT_FOUND: &str = "Not found";
pub const MESSAGE_INVALID_PATTERN: &str = "Invalid input pattern";

/// Element classes marking paragraph numbers; clicks on them select nothing.
pub(crate) const NUMBER_MARKER_CLASSES: [&str; 2] = ["paranum", "hangnum"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewerError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Session-wide knobs that the host API does not pass per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    pub native_period: bool,
    pub boundaries: Boundaries,
}

impl ViewerConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            native_period: settings.conversion.native_period,
            boundaries: settings.search.boundaries(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ActiveSearch {
    pub results: ResultSet,
    pub cursor: Cursor,
}
