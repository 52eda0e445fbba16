use super::profile::{ScriptProfile, VowelStyle};
use super::Script;

#[rustfmt::skip]
pub(super) static THAI: ScriptProfile = ScriptProfile {
    script: Script::Thai,
    vowels_independent: ['\u{0E2D}', '\u{0E32}', '\u{0E34}', '\u{0E35}', '\u{0E38}', '\u{0E39}', '\u{0E40}', '\u{0E42}'],
    vowels_dependent: ['\u{0E2D}', '\u{0E32}', '\u{0E34}', '\u{0E35}', '\u{0E38}', '\u{0E39}', '\u{0E40}', '\u{0E42}'],
    consonants: [
        '\u{0E01}', '\u{0E02}', '\u{0E04}', '\u{0E06}', '\u{0E07}',
        '\u{0E08}', '\u{0E09}', '\u{0E0A}', '\u{0E0C}', '\u{0E0D}',
        '\u{0E0F}', '\u{0E10}', '\u{0E11}', '\u{0E12}', '\u{0E13}',
        '\u{0E15}', '\u{0E16}', '\u{0E17}', '\u{0E18}', '\u{0E19}',
        '\u{0E1B}', '\u{0E1C}', '\u{0E1E}', '\u{0E20}', '\u{0E21}',
        '\u{0E22}', '\u{0E23}', '\u{0E25}', '\u{0E27}', '\u{0E2A}', '\u{0E2B}', '\u{0E2C}', '\u{0E4D}',
    ],
    numerals: Some(['\u{0E50}', '\u{0E51}', '\u{0E52}', '\u{0E53}', '\u{0E54}', '\u{0E55}', '\u{0E56}', '\u{0E57}', '\u{0E58}', '\u{0E59}']),
    conjunct_marker: '\u{0E3A}',
    // ฯ reads like a letter in running text, so the ASCII dot stays the default.
    period: '.',
    native_period: Some('\u{0E2F}'),
    // Yo ying and tho than without their lower serifs (private-use Pali fonts).
    alternate_consonants: &[(9, '\u{F70F}'), (11, '\u{F700}')],
    vowel_style: VowelStyle::Thai,
};

#[rustfmt::skip]
pub(super) static KHMER: ScriptProfile = ScriptProfile {
    script: Script::Khmer,
    vowels_independent: ['\u{17A2}', '\u{17B6}', '\u{17A5}', '\u{17A6}', '\u{17A7}', '\u{17A9}', '\u{17AF}', '\u{17B1}'],
    vowels_dependent: ['\u{17A2}', '\u{17B6}', '\u{17B7}', '\u{17B8}', '\u{17BB}', '\u{17BC}', '\u{17C1}', '\u{17C4}'],
    consonants: [
        '\u{1780}', '\u{1781}', '\u{1782}', '\u{1783}', '\u{1784}',
        '\u{1785}', '\u{1786}', '\u{1787}', '\u{1788}', '\u{1789}',
        '\u{178A}', '\u{178B}', '\u{178C}', '\u{178D}', '\u{178E}',
        '\u{178F}', '\u{1790}', '\u{1791}', '\u{1792}', '\u{1793}',
        '\u{1794}', '\u{1795}', '\u{1796}', '\u{1797}', '\u{1798}',
        '\u{1799}', '\u{179A}', '\u{179B}', '\u{179C}', '\u{179F}', '\u{17A0}', '\u{17A1}', '\u{17C6}',
    ],
    numerals: Some(['\u{17E0}', '\u{17E1}', '\u{17E2}', '\u{17E3}', '\u{17E4}', '\u{17E5}', '\u{17E6}', '\u{17E7}', '\u{17E8}', '\u{17E9}']),
    conjunct_marker: '\u{17D2}',
    period: '.',
    native_period: Some('\u{17D4}'),
    alternate_consonants: &[],
    vowel_style: VowelStyle::Khmer,
};

#[rustfmt::skip]
pub(super) static MYANMAR: ScriptProfile = ScriptProfile {
    script: Script::Myanmar,
    vowels_independent: ['\u{1021}', '\u{102C}', '\u{1023}', '\u{1024}', '\u{1025}', '\u{1026}', '\u{1027}', '\u{1029}'],
    vowels_dependent: ['\u{1021}', '\u{102B}', '\u{102D}', '\u{102E}', '\u{102F}', '\u{1030}', '\u{1031}', '\u{1031}'],
    consonants: [
        '\u{1000}', '\u{1001}', '\u{1002}', '\u{1003}', '\u{1004}',
        '\u{1005}', '\u{1006}', '\u{1007}', '\u{1008}', '\u{100A}',
        '\u{100B}', '\u{100C}', '\u{100D}', '\u{100E}', '\u{100F}',
        '\u{1010}', '\u{1011}', '\u{1012}', '\u{1013}', '\u{1014}',
        '\u{1015}', '\u{1016}', '\u{1017}', '\u{1018}', '\u{1019}',
        '\u{101A}', '\u{101B}', '\u{101C}', '\u{101D}', '\u{101E}', '\u{101F}', '\u{1020}', '\u{1036}',
    ],
    numerals: Some(['\u{1040}', '\u{1041}', '\u{1042}', '\u{1043}', '\u{1044}', '\u{1045}', '\u{1046}', '\u{1047}', '\u{1048}', '\u{1049}']),
    conjunct_marker: '\u{1039}',
    period: '.',
    native_period: Some('\u{104B}'),
    alternate_consonants: &[],
    vowel_style: VowelStyle::Myanmar,
};

#[rustfmt::skip]
pub(super) static SINHALA: ScriptProfile = ScriptProfile {
    script: Script::Sinhala,
    vowels_independent: ['\u{0D85}', '\u{0D86}', '\u{0D89}', '\u{0D8A}', '\u{0D8B}', '\u{0D8C}', '\u{0D91}', '\u{0D94}'],
    vowels_dependent: ['\u{0D85}', '\u{0DCF}', '\u{0DD2}', '\u{0DD3}', '\u{0DD4}', '\u{0DD6}', '\u{0DD9}', '\u{0DDC}'],
    consonants: [
        '\u{0D9A}', '\u{0D9B}', '\u{0D9C}', '\u{0D9D}', '\u{0D9E}',
        '\u{0DA0}', '\u{0DA1}', '\u{0DA2}', '\u{0DA3}', '\u{0DA4}',
        '\u{0DA7}', '\u{0DA8}', '\u{0DA9}', '\u{0DAA}', '\u{0DAB}',
        '\u{0DAD}', '\u{0DAE}', '\u{0DAF}', '\u{0DB0}', '\u{0DB1}',
        '\u{0DB4}', '\u{0DB5}', '\u{0DB6}', '\u{0DB7}', '\u{0DB8}',
        '\u{0DBA}', '\u{0DBB}', '\u{0DBD}', '\u{0DC0}', '\u{0DC3}', '\u{0DC4}', '\u{0DC5}', '\u{0D82}',
    ],
    // Digits stay Western in Sinhala Pali texts.
    numerals: None,
    conjunct_marker: '\u{0DCA}',
    period: '.',
    native_period: None,
    alternate_consonants: &[],
    vowel_style: VowelStyle::Indic,
};

#[rustfmt::skip]
pub(super) static DEVANAGARI: ScriptProfile = ScriptProfile {
    script: Script::Devanagari,
    vowels_independent: ['\u{0905}', '\u{0906}', '\u{0907}', '\u{0908}', '\u{0909}', '\u{090A}', '\u{090F}', '\u{0913}'],
    vowels_dependent: ['\u{0905}', '\u{093E}', '\u{093F}', '\u{0940}', '\u{0941}', '\u{0942}', '\u{0947}', '\u{094B}'],
    consonants: [
        '\u{0915}', '\u{0916}', '\u{0917}', '\u{0918}', '\u{0919}',
        '\u{091A}', '\u{091B}', '\u{091C}', '\u{091D}', '\u{091E}',
        '\u{091F}', '\u{0920}', '\u{0921}', '\u{0922}', '\u{0923}',
        '\u{0924}', '\u{0925}', '\u{0926}', '\u{0927}', '\u{0928}',
        '\u{092A}', '\u{092B}', '\u{092C}', '\u{092D}', '\u{092E}',
        '\u{092F}', '\u{0930}', '\u{0932}', '\u{0935}', '\u{0938}', '\u{0939}', '\u{0933}', '\u{0902}',
    ],
    numerals: Some(['\u{0966}', '\u{0967}', '\u{0968}', '\u{0969}', '\u{096A}', '\u{096B}', '\u{096C}', '\u{096D}', '\u{096E}', '\u{096F}']),
    conjunct_marker: '\u{094D}',
    period: '.',
    native_period: Some('\u{0964}'),
    alternate_consonants: &[],
    vowel_style: VowelStyle::Indic,
};
