//! The romanized Pali letter inventory.
//!
//! Consonants live in 33 slots: five stop series of five
//! (unaspirated, aspirated, voiced, voiced aspirated, nasal), then
//! `y r l v s h ḷ` and the niggahita `ṃ`. Aspirated slots have no letter of
//! their own; they are spelled as the preceding slot's letter plus `h`.

/// Vowels in canonical order.
pub const VOWELS: [char; 8] = ['a', 'ā', 'i', 'ī', 'u', 'ū', 'e', 'o'];

pub const VOWEL_A: usize = 0;
pub const VOWEL_AA: usize = 1;
pub const VOWEL_E: usize = 6;
pub const VOWEL_O: usize = 7;

pub const CONSONANT_SLOTS: usize = 33;

/// Filler letter callers use to force a visual break; never converted.
pub const RESERVED_FILLER: char = 'x';

pub const NIGGAHITA: char = 'ṃ';

const STOP_SLOTS: usize = 25;

#[rustfmt::skip]
const SLOT_LETTERS: [Option<char>; CONSONANT_SLOTS] = [
    Some('k'), None, Some('g'), None, Some('ṅ'),
    Some('c'), None, Some('j'), None, Some('ñ'),
    Some('ṭ'), None, Some('ḍ'), None, Some('ṇ'),
    Some('t'), None, Some('d'), None, Some('n'),
    Some('p'), None, Some('b'), None, Some('m'),
    Some('y'), Some('r'), Some('l'), Some('v'), Some('s'), Some('h'), Some('ḷ'), Some('ṃ'),
];

/// Romanized spelling of every slot, aspirates included.
#[rustfmt::skip]
pub const SLOT_SPELLINGS: [&str; CONSONANT_SLOTS] = [
    "k", "kh", "g", "gh", "ṅ",
    "c", "ch", "j", "jh", "ñ",
    "ṭ", "ṭh", "ḍ", "ḍh", "ṇ",
    "t", "th", "d", "dh", "n",
    "p", "ph", "b", "bh", "m",
    "y", "r", "l", "v", "s", "h", "ḷ", "ṃ",
];

pub fn vowel_index(c: char) -> Option<usize> {
    VOWELS.iter().position(|&v| v == c)
}

/// Slot of a base (unaspirated) consonant letter.
pub fn consonant_slot(c: char) -> Option<usize> {
    SLOT_LETTERS.iter().position(|&letter| letter == Some(c))
}

/// Aspirated partner of a slot: defined for `k g c j ṭ ḍ t d p b`.
pub fn aspirated_slot(slot: usize) -> Option<usize> {
    let in_series = slot % 5;
    (slot < STOP_SLOTS && (in_series == 0 || in_series == 2)).then_some(slot + 1)
}

/// Letters that count as consonants for vowel placement and clustering.
///
/// Includes the Sanskrit letters `ś ṣ ṛ ṝ ḹ`, which have no glyph of their
/// own and pass through conversion unchanged. The niggahita is excluded.
pub fn is_cluster_consonant(c: char) -> bool {
    matches!(
        c,
        'k' | 'g'
            | 'ṅ'
            | 'c'
            | 'j'
            | 'ñ'
            | 'ṭ'
            | 'ḍ'
            | 'ṇ'
            | 't'
            | 'd'
            | 'n'
            | 'p'
            | 'b'
            | 'm'
            | 'y'
            | 'r'
            | 'l'
            | 'v'
            | 's'
            | 'h'
            | 'ḷ'
            | 'ś'
            | 'ṣ'
            | 'ṛ'
            | 'ṝ'
            | 'ḹ'
    )
}
