//! Reading viewer documents from disk.
//!
//! A file is either a JSON document (as written by `Document::to_json`) or
//! plain text with one paragraph per line.

use std::fs;
use std::path::Path;

use pali_core::document::{Document, DocumentError};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    PlainText,
}

pub fn read_text(path: &str) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_string(),
        source,
    })
}

/// Load `path` as a document. `.json` files must parse; anything else is
/// taken as plain text.
pub fn read_document(path: &str) -> Result<(Document, InputFormat), InputError> {
    let content = read_text(path)?;
    let (doc, format) = parse_document(&content, is_json_path(path))?;
    tracing::debug!(path, ?format, blocks = doc.blocks.len(), "document loaded");
    Ok((doc, format))
}

pub fn parse_document(content: &str, json: bool) -> Result<(Document, InputFormat), InputError> {
    if json {
        Ok((Document::from_json(content)?, InputFormat::Json))
    } else {
        Ok((Document::from_plain_text(content), InputFormat::PlainText))
    }
}

fn is_json_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
