//! UniFFI export layer: type-safe foreign bindings for the viewer.
//!
//! Each public type here maps to a generated foreign class, struct, or enum.

mod host;
mod types;
mod viewer;

pub use host::PaliHost;
pub use types::{PaliDirection, PaliError, PaliSelection, PaliSpanAddress};
pub use viewer::PaliViewer;

use std::path::Path;

use pali_core::script::{Script, ScriptError};
use pali_core::translit::{convert, ConvertOptions};
use pali_core::unicode::{normalize_niggahita, Niggahita};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted by `convert`, `ROMAN` first.
#[uniffi::export]
fn script_names() -> Vec<String> {
    Script::ALL.iter().map(|s| s.name().to_string()).collect()
}

/// Convert one romanized string without a viewer.
#[uniffi::export]
fn convert_text(
    text: String,
    script: String,
    localize_numbers: bool,
    use_alternate_glyphs: bool,
) -> Result<String, PaliError> {
    let script: Script = script
        .parse()
        .map_err(|ScriptError::UnsupportedScript(name)| PaliError::UnsupportedScript { name })?;
    let Some(profile) = script.profile() else {
        return Ok(text);
    };
    let options = ConvertOptions {
        localize_numbers,
        alternate_glyphs: use_alternate_glyphs,
        native_period: pali_core::settings::settings().conversion.native_period,
    };
    Ok(convert(&text, profile, options))
}

/// Script name of `text`, or `None` when no script has a clear majority.
#[uniffi::export]
fn detect_script(text: String) -> Option<String> {
    let sample = pali_core::settings::settings().detect.sample_chars;
    pali_core::unicode::detect_script(&text, sample).map(|s| s.name().to_string())
}

/// Rewrite niggahita letters: `old_style` gives ŋ, otherwise ṃ.
#[uniffi::export]
fn niggahita_normalize(text: String, old_style: bool) -> String {
    let to = if old_style {
        Niggahita::Old
    } else {
        Niggahita::New
    };
    normalize_niggahita(&text, to)
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), PaliError> {
    let content = std::fs::read_to_string(&path).map_err(|e| PaliError::Io {
        msg: format!("{path}: {e}"),
    })?;
    pali_core::settings::init_custom(content)
        .map_err(|e| PaliError::InvalidData { msg: e.to_string() })?;
    tracing::debug!(path, "custom settings installed");
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    pali_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
