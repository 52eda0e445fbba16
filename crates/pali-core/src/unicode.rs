//! Character-level helpers: script detection, niggahita spelling, NFC.

use unicode_normalization::UnicodeNormalization;

use crate::script::Script;

/// ASCII `0`..`z` plus the Latin Extended-A and Latin Extended Additional
/// blocks, which hold the romanized Pali diacritics (ā ī ū ṅ ñ ṭ ḍ ṇ ḷ ṃ).
pub fn is_roman(c: char) -> bool {
    ('0'..='z').contains(&c)
        || ('\u{0100}'..='\u{017F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

fn block_of(c: char) -> Option<Script> {
    match c {
        '\u{0900}'..='\u{097F}' => Some(Script::Devanagari),
        '\u{0D80}'..='\u{0DFF}' => Some(Script::Sinhala),
        '\u{0E00}'..='\u{0E7F}' => Some(Script::Thai),
        '\u{1000}'..='\u{109F}' => Some(Script::Myanmar),
        '\u{1780}'..='\u{17FF}' => Some(Script::Khmer),
        _ if is_roman(c) => Some(Script::Roman),
        _ => None,
    }
}

/// Guess which script `text` is written in from its first `sample` characters.
///
/// Whitespace and punctuation count toward the sample length but toward no
/// script, so the winner needs more than half of the whole sample. Returns
/// `None` when no script gets there. Empty (or all-whitespace) text is Roman.
pub fn detect_script(text: &str, sample: usize) -> Option<Script> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Script::Roman);
    }
    let mut counts = Script::ALL.map(|_| 0usize);
    let mut total = 0;
    for c in text.chars().take(sample) {
        total += 1;
        if let Some(script) = block_of(c) {
            if let Some(i) = Script::ALL.iter().position(|&s| s == script) {
                counts[i] += 1;
            }
        }
    }
    // first script in `Script::ALL` order wins a tie
    let (best, &count) = counts
        .iter()
        .enumerate()
        .fold((0, &0), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
    (count * 2 > total).then_some(Script::ALL[best])
}

/// The two spellings of the niggahita in romanized Pali.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Niggahita {
    /// `ŋ` / `Ŋ`
    Old,
    /// `ṃ` / `Ṃ`
    New,
}

/// Rewrite every niggahita in `text` to the `to` spelling.
pub fn normalize_niggahita(text: &str, to: Niggahita) -> String {
    text.chars()
        .map(|c| match (to, c) {
            (Niggahita::New, 'ŋ') => 'ṃ',
            (Niggahita::New, 'Ŋ') => 'Ṃ',
            (Niggahita::Old, 'ṃ') => 'ŋ',
            (Niggahita::Old, 'Ṃ') => 'Ŋ',
            _ => c,
        })
        .collect()
}

/// Canonical composition, so `a` + combining macron matches `ā`.
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}
