use proptest::prelude::*;

use super::*;
use crate::document::{Block, Document, Node, SpanAddress, TextIndex};
use crate::script::roman::{aspirated_slot, SLOT_SPELLINGS, VOWELS};
use crate::script::{Script, ScriptProfile};

fn profile(script: Script) -> &'static ScriptProfile {
    script.profile().unwrap()
}

fn to(script: Script, text: &str) -> String {
    convert(text, profile(script), ConvertOptions::default())
}

// --- Devanagari ---

#[test]
fn test_deva_dhammapada() {
    assert_eq!(
        to(Script::Devanagari, "dhammapada"),
        "\u{0927}\u{092E}\u{094D}\u{092E}\u{092A}\u{0926}"
    );
}

#[test]
fn test_deva_buddho() {
    assert_eq!(
        to(Script::Devanagari, "buddho"),
        "\u{092C}\u{0941}\u{0926}\u{094D}\u{0927}\u{094B}"
    );
}

#[test]
fn test_deva_initial_long_vowel() {
    assert_eq!(
        to(Script::Devanagari, "ānanda"),
        "\u{0906}\u{0928}\u{0928}\u{094D}\u{0926}"
    );
}

#[test]
fn test_deva_niggahita_takes_no_virama() {
    assert_eq!(to(Script::Devanagari, "saṃgha"), "\u{0938}\u{0902}\u{0918}");
    // vowel after niggahita is independent
    assert_eq!(to(Script::Devanagari, "ṃa"), "\u{0902}\u{0905}");
}

#[test]
fn test_uppercase_is_lowered() {
    assert_eq!(to(Script::Devanagari, "Buddho"), to(Script::Devanagari, "buddho"));
    assert_eq!(to(Script::Thai, "EVAṂ"), to(Script::Thai, "evaṃ"));
}

#[test]
fn test_trailing_aspirate_collapses() {
    assert_eq!(to(Script::Devanagari, "kh"), "\u{0916}");
    assert_eq!(to(Script::Devanagari, "ph"), "\u{092B}");
}

// --- Thai ---

#[test]
fn test_thai_buddho_reorders_o() {
    assert_eq!(
        to(Script::Thai, "buddho"),
        "\u{0E1E}\u{0E38}\u{0E17}\u{0E3A}\u{0E42}\u{0E18}"
    );
}

#[test]
fn test_thai_independent_vowels() {
    // e/o: glyph then carrier
    assert_eq!(to(Script::Thai, "eva"), "\u{0E40}\u{0E2D}\u{0E27}");
    // others: carrier then glyph
    assert_eq!(to(Script::Thai, "iti"), "\u{0E2D}\u{0E34}\u{0E15}\u{0E34}");
    assert_eq!(to(Script::Thai, "a"), "\u{0E2D}");
}

#[test]
fn test_thai_numerals() {
    let opts = ConvertOptions {
        localize_numbers: true,
        ..Default::default()
    };
    assert_eq!(
        convert("2500", profile(Script::Thai), opts),
        "\u{0E52}\u{0E55}\u{0E50}\u{0E50}"
    );
    assert_eq!(to(Script::Thai, "2500"), "2500");
}

#[test]
fn test_thai_alternate_glyphs() {
    let alt = ConvertOptions {
        alternate_glyphs: true,
        ..Default::default()
    };
    assert_eq!(
        convert("ñāṇa", profile(Script::Thai), alt),
        "\u{F70F}\u{0E32}\u{0E13}"
    );
    assert_eq!(to(Script::Thai, "ñāṇa"), "\u{0E0D}\u{0E32}\u{0E13}");
    assert_eq!(convert("ṭha", profile(Script::Thai), alt), "\u{F700}");
    // no alternates outside Thai
    assert_eq!(
        convert("ñāṇa", profile(Script::Devanagari), alt),
        to(Script::Devanagari, "ñāṇa")
    );
}

#[test]
fn test_thai_period_stays_ascii() {
    assert_eq!(to(Script::Thai, "iti."), "\u{0E2D}\u{0E34}\u{0E15}\u{0E34}.");
}

// --- Khmer / Myanmar / Sinhala ---

#[test]
fn test_khmer_initial_aa_uses_two_glyphs() {
    assert_eq!(
        to(Script::Khmer, "ānanda"),
        "\u{17A2}\u{17B6}\u{1793}\u{1793}\u{17D2}\u{1791}"
    );
}

#[test]
fn test_khmer_numerals_and_native_period() {
    let opts = ConvertOptions {
        localize_numbers: true,
        native_period: true,
        ..Default::default()
    };
    assert_eq!(convert("1.", profile(Script::Khmer), opts), "\u{17E1}\u{17D4}");
    assert_eq!(to(Script::Khmer, "1."), "1.");
}

#[test]
fn test_myanmar_vowels() {
    assert_eq!(to(Script::Myanmar, "ā"), "\u{1021}\u{102C}");
    assert_eq!(to(Script::Myanmar, "bho"), "\u{1018}\u{1031}\u{102B}");
    assert_eq!(to(Script::Myanmar, "ko"), "\u{1000}\u{1031}\u{102B}");
}

#[test]
fn test_sinhala_buddha() {
    assert_eq!(
        to(Script::Sinhala, "buddha"),
        "\u{0DB6}\u{0DD4}\u{0DAF}\u{0DCA}\u{0DB0}"
    );
}

#[test]
fn test_sinhala_ignores_number_and_period_options() {
    let opts = ConvertOptions {
        localize_numbers: true,
        native_period: true,
        alternate_glyphs: false,
    };
    assert_eq!(convert("12.", profile(Script::Sinhala), opts), "12.");
}

// --- pass-through ---

#[test]
fn test_out_of_scheme_passes_through() {
    assert_eq!(to(Script::Devanagari, "fw?"), "fw?");
    // not a consonant, so the vowel stays independent
    assert_eq!(to(Script::Devanagari, "qa"), "q\u{0905}");
    assert_eq!(to(Script::Devanagari, ""), "");
}

#[test]
fn test_reserved_filler_breaks_cluster() {
    assert_eq!(to(Script::Devanagari, "kxa"), "\u{0915}x\u{0905}");
}

// --- per-profile properties ---

#[test]
fn test_initial_a_is_independent_everywhere() {
    for script in Script::TARGETS {
        let p = profile(script);
        assert_eq!(to(script, "a"), p.vowels_independent[0].to_string(), "{script}");
    }
}

#[test]
fn test_inherent_a_emits_nothing() {
    for script in Script::TARGETS {
        let p = profile(script);
        for (slot, spelling) in SLOT_SPELLINGS.iter().enumerate().take(32) {
            let expected = p.consonants[slot].to_string();
            assert_eq!(to(script, &format!("{spelling}a")), expected, "{script} {spelling}");
        }
    }
}

#[test]
fn test_aspirates_collapse_everywhere() {
    for script in Script::TARGETS {
        let p = profile(script);
        for slot in 0..25 {
            let Some(aspirated) = aspirated_slot(slot) else {
                continue;
            };
            let out = to(script, SLOT_SPELLINGS[aspirated]);
            assert_eq!(out, p.consonants[aspirated].to_string(), "{script} slot {slot}");
        }
    }
}

#[test]
fn test_convert_document_leaves_canonical_untouched() {
    let canonical = Document::new(vec![Block::new(vec![
        Node::text("buddho"),
        Node::link("P1", vec![Node::text("dhamma")]),
        Node::element("b", vec![Node::text("saṅgho")]),
    ])]);
    let index = TextIndex::build(&canonical);
    let working = convert_document(
        &canonical,
        &index,
        profile(Script::Devanagari),
        ConvertOptions::default(),
    );
    assert_eq!(canonical.span_text(&SpanAddress::child(0, 0)), Some("buddho"));
    assert_eq!(
        working.span_text(&SpanAddress::child(0, 0)),
        Some(to(Script::Devanagari, "buddho").as_str())
    );
    // hyperlink text is not converted
    assert_eq!(working.blocks[0].children[1], canonical.blocks[0].children[1]);
    assert_eq!(
        working.span_text(&SpanAddress::nested(0, 2, 0)),
        Some(to(Script::Devanagari, "saṅgho").as_str())
    );
}

// --- cluster invariant ---

/// Romanized tokens: single consonants (no bare `h`, no niggahita) or vowels.
#[derive(Debug, Clone)]
enum Token {
    Consonant(&'static str),
    Vowel(char),
}

fn arb_token() -> impl Strategy<Value = Token> {
    let consonants: Vec<&'static str> = SLOT_SPELLINGS
        .iter()
        .copied()
        .filter(|s| *s != "h" && *s != "ṃ")
        .collect();
    prop_oneof![
        2 => prop::sample::select(consonants).prop_map(Token::Consonant),
        1 => prop::sample::select(VOWELS.to_vec()).prop_map(Token::Vowel),
    ]
}

proptest! {
    #[test]
    fn one_marker_per_consonant_pair(tokens in prop::collection::vec(arb_token(), 0..24)) {
        let text: String = tokens
            .iter()
            .map(|t| match t {
                Token::Consonant(s) => s.to_string(),
                Token::Vowel(v) => v.to_string(),
            })
            .collect();
        let pairs = tokens
            .windows(2)
            .filter(|w| matches!(w, [Token::Consonant(_), Token::Consonant(_)]))
            .count();
        for script in Script::TARGETS {
            let p = profile(script);
            let out = to(script, &text);
            let markers = out.chars().filter(|&c| c == p.conjunct_marker).count();
            prop_assert_eq!(markers, pairs, "{} {}", script, text);
        }
    }
}
