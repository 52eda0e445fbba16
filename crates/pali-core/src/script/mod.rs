//! Script profiles for the five Brahmic target scripts.
//!
//! Every profile is indexed by the same romanized inventory (see [`roman`]),
//! so the transliteration engine can stay script-agnostic and look glyphs up
//! by vowel index or consonant slot.

mod profile;
pub mod roman;
mod tables;

use std::fmt;
use std::str::FromStr;

pub use profile::{ScriptProfile, VowelStyle};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unsupported script: {0}")]
    UnsupportedScript(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Roman,
    Thai,
    Khmer,
    Myanmar,
    Sinhala,
    Devanagari,
}

impl Script {
    pub const ALL: [Script; 6] = [
        Script::Roman,
        Script::Thai,
        Script::Khmer,
        Script::Myanmar,
        Script::Sinhala,
        Script::Devanagari,
    ];

    /// Scripts that have a conversion profile.
    pub const TARGETS: [Script; 5] = [
        Script::Thai,
        Script::Khmer,
        Script::Myanmar,
        Script::Sinhala,
        Script::Devanagari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Script::Roman => "ROMAN",
            Script::Thai => "THAI",
            Script::Khmer => "KHMER",
            Script::Myanmar => "MYANMAR",
            Script::Sinhala => "SINHALA",
            Script::Devanagari => "DEVANAGARI",
        }
    }

    /// Conversion profile, or `None` for Roman (the canonical form).
    pub fn profile(self) -> Option<&'static ScriptProfile> {
        match self {
            Script::Roman => None,
            Script::Thai => Some(&tables::THAI),
            Script::Khmer => Some(&tables::KHMER),
            Script::Myanmar => Some(&tables::MYANMAR),
            Script::Sinhala => Some(&tables::SINHALA),
            Script::Devanagari => Some(&tables::DEVANAGARI),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    /// Parses a script name case-insensitively (`"thai"`, `"THAI"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Script::ALL
            .into_iter()
            .find(|script| script.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ScriptError::UnsupportedScript(name.to_string()))
    }
}

impl ScriptProfile {
    /// Look up a target profile by script name.
    pub fn by_name(name: &str) -> Result<&'static ScriptProfile, ScriptError> {
        let script: Script = name.parse()?;
        script
            .profile()
            .ok_or_else(|| ScriptError::UnsupportedScript(script.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("thai".parse::<Script>(), Ok(Script::Thai));
        assert_eq!("DEVANAGARI".parse::<Script>(), Ok(Script::Devanagari));
        assert_eq!(" Myanmar ".parse::<Script>(), Ok(Script::Myanmar));
        assert_eq!("roman".parse::<Script>(), Ok(Script::Roman));
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "tibetan".parse::<Script>().unwrap_err();
        assert_eq!(err, ScriptError::UnsupportedScript("tibetan".into()));
        assert!(err.to_string().contains("tibetan"));
    }

    #[test]
    fn roman_has_no_profile() {
        assert!(Script::Roman.profile().is_none());
        assert!(matches!(
            ScriptProfile::by_name("ROMAN"),
            Err(ScriptError::UnsupportedScript(_))
        ));
    }

    #[test]
    fn every_target_has_matching_profile() {
        for script in Script::TARGETS {
            let profile = script.profile().unwrap();
            assert_eq!(profile.script, script);
            assert_eq!(ScriptProfile::by_name(script.name()).unwrap().script, script);
        }
    }

    #[test]
    fn sinhala_defines_no_numerals() {
        assert!(Script::Sinhala.profile().unwrap().numerals.is_none());
        for script in [Script::Thai, Script::Khmer, Script::Myanmar, Script::Devanagari] {
            assert!(script.profile().unwrap().numerals.is_some(), "{script}");
        }
    }

    #[test]
    fn conjunct_markers_are_distinct_from_tables() {
        for script in Script::TARGETS {
            let p = script.profile().unwrap();
            assert!(!p.consonants.contains(&p.conjunct_marker), "{script}");
            assert!(!p.vowels_independent.contains(&p.conjunct_marker), "{script}");
            assert!(!p.vowels_dependent.contains(&p.conjunct_marker), "{script}");
        }
    }
}
