//! Table-driven encoder and decoder checks

use rstest::rstest;

use morse_core::{LookupPolicy, MorseError, Script, TranslatorConfig};

use crate::{translator, translator_with};

#[rstest]
#[case::sos("sos", "... --- ... ")]
#[case::upper_case("SOS", "... --- ... ")]
#[case::empty("", "")]
#[case::word_space("e e", ".  . ")]
#[case::ideographic_space("e\u{3000}e", ".  . ")]
#[case::digits("73", "--... ...-- ")]
#[case::full_width_digits("７３", "--... ...-- ")]
#[case::latin_punctuation("?", "..--.. ")]
#[case::hiragana("あ", "--.-- ")]
#[case::katakana("ア", "--.-- ")]
#[case::half_width("ｱ", "--.-- ")]
#[case::voiced("ば", "-... .. ")]
#[case::semi_voiced("ぱ", "-... ..--. ")]
#[case::half_width_voiced("ﾊﾞ", "-... .. ")]
#[case::combining_mark("は\u{3099}", "-... .. ")]
#[case::small_kana("っ", ".--. ")]
#[case::prolonged_sound("ー", ".--.- ")]
#[case::ideographic_comma("、", ".-.-.- ")]
#[case::mixed("cq ほ", "-.-. --.-  -.. ")]
fn encode_cases(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(translator().encode(text).unwrap(), expected);
}

#[rstest]
#[case::sos_terminated("... --- ... ", Script::En, "sos")]
#[case::sos_bare("... --- ...", Script::En, "sos")]
#[case::same_token_latin(".-", Script::En, "a")]
#[case::same_token_kana(".-", Script::Ja, "い")]
#[case::question_latin("..--..", Script::En, "?")]
#[case::question_kana("..--..", Script::Ja, "？")]
#[case::voiced_not_recomposed("-... .. ", Script::Ja, "は゛")]
#[case::semi_voiced_not_recomposed("-... ..--. ", Script::Ja, "は゜")]
#[case::base_selector(".---- ", Script::Base, "1")]
#[case::empty_token(".-  -...", Script::En, "a b")]
#[case::unknown_token("... ....... ...", Script::En, "s s")]
#[case::garbage("xyz", Script::Ja, " ")]
#[case::empty("", Script::En, "")]
fn decode_cases(#[case] morse: &str, #[case] script: Script, #[case] expected: &str) {
    assert_eq!(translator().decode(morse, script), expected);
}

#[rstest]
#[case::ja("ja", Script::Ja)]
#[case::upper("JA", Script::Ja)]
#[case::en("en", Script::En)]
#[case::unknown("de", Script::En)]
#[case::empty("", Script::En)]
fn selector_cases(#[case] selector: &str, #[case] expected: Script) {
    assert_eq!(Script::from_selector(selector), expected);
}

#[rstest]
#[case('!')]
#[case('€')]
#[case('漢')]
#[case('ゐ')]
fn strict_lookup_failure(#[case] ch: char) {
    let text = format!("a{}b", ch);
    assert_eq!(
        translator().encode(&text),
        Err(MorseError::LookupFailure { ch })
    );
}

#[test]
fn skip_policy_drops_only_the_unknown_character() {
    let t = translator_with(TranslatorConfig::default().with_lookup_policy(LookupPolicy::Skip));
    assert_eq!(t.encode("a!b").unwrap(), ".- -... ");
    assert_eq!(t.encode("漢字").unwrap(), "");
}

#[test]
fn small_kana_folding_can_be_disabled() {
    let config = TranslatorConfig {
        fold_small_kana: false,
        ..TranslatorConfig::default()
    };
    assert_eq!(
        translator_with(config).encode("っ"),
        Err(MorseError::LookupFailure { ch: 'っ' })
    );
}

#[test]
fn every_book_entry_decodes_to_itself() {
    let t = translator();
    for script in [Script::Ja, Script::En] {
        let book = t.table().book(script);
        for (grapheme, pattern) in book.iter() {
            assert_eq!(book.reverse_lookup(&pattern), Some(grapheme));
        }
    }
}

#[test]
fn sos_demo_round_trip() {
    let t = translator();
    let morse = t.encode("sos").unwrap();
    assert_eq!(morse, "... --- ... ");
    assert_eq!(t.decode(&morse, Script::En), "sos");
}

#[test]
fn fixed_capacity_buffers() {
    let t = translator();
    let mut morse: heapless::String<64> = heapless::String::new();
    assert_eq!(t.encode_to("cq ほ", &mut morse).unwrap(), 4);
    assert_eq!(morse.as_str(), "-.-. --.-  -.. ");

    let mut short: heapless::String<8> = heapless::String::new();
    assert_eq!(t.encode_to("cq ほ", &mut short), Err(MorseError::BufferFull));

    let mut text: heapless::String<2> = heapless::String::new();
    assert_eq!(
        t.decode_to("... --- ...", Script::En, &mut text),
        Err(MorseError::BufferFull)
    );
}
