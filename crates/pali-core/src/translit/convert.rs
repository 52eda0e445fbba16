use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::document::{Document, TextIndex};
use crate::script::roman::{
    aspirated_slot, consonant_slot, is_cluster_consonant, vowel_index, RESERVED_FILLER, VOWEL_A,
    VOWEL_AA, VOWEL_E, VOWEL_O,
};
use crate::script::{ScriptProfile, VowelStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConvertOptions {
    /// Replace ASCII digits with native numerals. Ignored by scripts without numerals.
    #[serde(default)]
    pub localize_numbers: bool,
    /// Use the profile's alternate consonant glyphs (Thai only).
    #[serde(default)]
    pub alternate_glyphs: bool,
    /// Replace `.` with the native period glyph where one is defined.
    #[serde(default)]
    pub native_period: bool,
}

/// Convert romanized Pali `text` into the script described by `profile`.
///
/// The input is lowercased first. Characters outside the romanization scheme
/// are copied through unchanged.
pub fn convert(text: &str, profile: &ScriptProfile, options: ConvertOptions) -> String {
    let input: Vec<char> = text.to_lowercase().chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < input.len() {
        let ch = input[i];
        let prev = i.checked_sub(1).map(|p| input[p]);
        i += 1;

        match ch {
            '0'..='9' => {
                let glyph = ch
                    .to_digit(10)
                    .and_then(|d| profile.numeral(d))
                    .filter(|_| options.localize_numbers);
                out.push(glyph.unwrap_or(ch));
            }
            '.' => out.push(profile.period_glyph(options.native_period)),
            RESERVED_FILLER => out.push(ch),
            _ => {
                if let Some(v) = vowel_index(ch) {
                    if !out.is_empty() && prev.is_some_and(is_cluster_consonant) {
                        push_dependent(&mut out, profile, v);
                    } else {
                        push_independent(&mut out, profile, v);
                    }
                } else if let Some(slot) = consonant_slot(ch) {
                    let slot = match aspirated_slot(slot) {
                        Some(aspirated) if input.get(i) == Some(&'h') => {
                            i += 1;
                            aspirated
                        }
                        _ => slot,
                    };
                    out.push(profile.consonant(slot, options.alternate_glyphs));
                    if is_cluster_consonant(ch)
                        && input.get(i).is_some_and(|&c| is_cluster_consonant(c))
                    {
                        out.push(profile.conjunct_marker);
                    }
                } else {
                    out.push(ch);
                }
            }
        }
    }

    out
}

fn push_independent(out: &mut String, profile: &ScriptProfile, v: usize) {
    let glyph = profile.vowels_independent[v];
    let carrier = profile.vowels_independent[VOWEL_A];
    match profile.vowel_style {
        VowelStyle::Thai => match v {
            VOWEL_A => out.push(glyph),
            VOWEL_E | VOWEL_O => {
                out.push(glyph);
                out.push(carrier);
            }
            _ => {
                out.push(carrier);
                out.push(glyph);
            }
        },
        VowelStyle::Khmer | VowelStyle::Myanmar if v == VOWEL_AA => {
            out.push(carrier);
            out.push(glyph);
        }
        _ => out.push(glyph),
    }
}

fn push_dependent(out: &mut String, profile: &ScriptProfile, v: usize) {
    // inherent vowel
    if v == VOWEL_A {
        return;
    }
    let glyph = profile.vowels_dependent[v];
    match profile.vowel_style {
        VowelStyle::Thai if v == VOWEL_E || v == VOWEL_O => {
            // Written before the consonant it follows in speech.
            let at = out.char_indices().next_back().map_or(0, |(at, _)| at);
            out.insert(at, glyph);
        }
        VowelStyle::Myanmar if v == VOWEL_O => {
            out.push(glyph);
            out.push(profile.vowels_dependent[VOWEL_AA]);
        }
        _ => out.push(glyph),
    }
}

/// Derive a converted working copy of `canonical`: every span in `index` is
/// replaced by its conversion, everything else is cloned as-is.
pub fn convert_document(
    canonical: &Document,
    index: &TextIndex,
    profile: &ScriptProfile,
    options: ConvertOptions,
) -> Document {
    let _span =
        debug_span!("convert_document", script = %profile.script, spans = index.len()).entered();
    let mut working = canonical.clone();
    let mut converted = 0usize;
    for addr in index.iter() {
        if let Some(text) = working.span_text_mut(addr) {
            let rendered = convert(text.as_str(), profile, options);
            *text = rendered;
            converted += 1;
        }
    }
    debug!(converted);
    working
}
