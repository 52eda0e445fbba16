//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::search::Boundaries;
use crate::translit::ConvertOptions;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub conversion: ConvertOptions,
    pub search: SearchSettings,
    pub detect: DetectSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub leading_boundary: String,
    pub trailing_boundary: String,
}

impl SearchSettings {
    pub fn boundaries(&self) -> Boundaries {
        Boundaries {
            leading: self.leading_boundary.clone(),
            trailing: self.trailing_boundary.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectSettings {
    pub sample_chars: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_non_empty!(search.leading_boundary);
    check_non_empty!(search.trailing_boundary);
    for (field, chars) in [
        ("search.leading_boundary", &s.search.leading_boundary),
        ("search.trailing_boundary", &s.search.trailing_boundary),
    ] {
        if chars.chars().any(char::is_alphanumeric) {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: "boundary characters must not be letters or digits".to_string(),
            });
        }
    }

    check_positive_usize!(detect.sample_chars);

    Ok(())
}
