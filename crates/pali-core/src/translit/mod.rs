//! Roman-to-Brahmic transliteration.
//!
//! `convert` is a pure function over one string; `convert_document` applies
//! it to every indexed span of a canonical document, producing a fresh
//! working copy and leaving the canonical tree untouched.

mod convert;
#[cfg(test)]
mod tests;

pub use convert::{convert, convert_document, ConvertOptions};
