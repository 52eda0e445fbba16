use super::roman::CONSONANT_SLOTS;
use super::Script;

/// How a script realizes vowels beyond the plain independent/dependent split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelStyle {
    /// Independent and dependent forms used as-is (Sinhala, Devanagari).
    Indic,
    /// One vowel table; independent vowels ride on the carrier อ and `e`/`o`
    /// are written before their consonant.
    Thai,
    /// Independent `ā` is the `a` letter followed by the `ā` sign.
    Khmer,
    /// Independent `ā` as in Khmer; dependent `o` takes two signs.
    Myanmar,
}

#[derive(Debug)]
pub struct ScriptProfile {
    pub script: Script,
    pub vowels_independent: [char; 8],
    pub vowels_dependent: [char; 8],
    pub consonants: [char; CONSONANT_SLOTS],
    pub numerals: Option<[char; 10]>,
    /// Mark placed between two consonants with no vowel between them.
    pub conjunct_marker: char,
    pub period: char,
    pub native_period: Option<char>,
    /// `(slot, glyph)` overrides applied when the alternate glyph set is requested.
    pub alternate_consonants: &'static [(usize, char)],
    pub vowel_style: VowelStyle,
}

impl ScriptProfile {
    pub fn consonant(&self, slot: usize, alternate: bool) -> char {
        if alternate {
            if let Some(&(_, glyph)) = self.alternate_consonants.iter().find(|(s, _)| *s == slot) {
                return glyph;
            }
        }
        self.consonants[slot]
    }

    pub fn numeral(&self, digit: u32) -> Option<char> {
        self.numerals
            .as_ref()
            .and_then(|table| table.get(digit as usize).copied())
    }

    pub fn period_glyph(&self, native: bool) -> char {
        match self.native_period {
            Some(glyph) if native => glyph,
            _ => self.period,
        }
    }
}
