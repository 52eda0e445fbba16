use pali_core::document::SpanAddress;
use pali_core::script::ScriptError;
use pali_core::search::{Direction, SearchError, Selection};
use pali_session::ViewerError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PaliError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("unsupported script: {name}")]
    UnsupportedScript { name: String },
    #[error("invalid search pattern: {msg}")]
    InvalidPattern { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<ViewerError> for PaliError {
    fn from(e: ViewerError) -> Self {
        match e {
            ViewerError::Script(ScriptError::UnsupportedScript(name)) => {
                PaliError::UnsupportedScript { name }
            }
            ViewerError::Search(SearchError::InvalidPattern(msg)) => {
                PaliError::InvalidPattern { msg }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct PaliSpanAddress {
    pub block: u32,
    pub child: u32,
    pub nested: Option<u32>,
}

/// Current search match: `start..end` byte range in the span's text.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct PaliSelection {
    pub span: PaliSpanAddress,
    pub start: u32,
    pub end: u32,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PaliDirection {
    Forward,
    Backward,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<SpanAddress> for PaliSpanAddress {
    fn from(addr: SpanAddress) -> Self {
        Self {
            block: to_u32(addr.block),
            child: to_u32(addr.child),
            nested: addr.nested.map(to_u32),
        }
    }
}

impl From<&PaliSpanAddress> for SpanAddress {
    fn from(addr: &PaliSpanAddress) -> Self {
        Self {
            block: addr.block as usize,
            child: addr.child as usize,
            nested: addr.nested.map(|k| k as usize),
        }
    }
}

impl From<&Selection> for PaliSelection {
    fn from(sel: &Selection) -> Self {
        Self {
            span: sel.span.into(),
            start: to_u32(sel.range.start),
            end: to_u32(sel.range.end),
        }
    }
}

impl From<PaliDirection> for Direction {
    fn from(d: PaliDirection) -> Self {
        match d {
            PaliDirection::Forward => Direction::Forward,
            PaliDirection::Backward => Direction::Backward,
        }
    }
}
