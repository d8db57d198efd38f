//! Grapheme normalization: maps one input character to its dictionary key
//!
//! Kana in any form (hiragana, full-width or half-width katakana) become base
//! hiragana. Voiced and semi-voiced kana are split into the base kana and a
//! trailing voicing-mark sentinel, which the encoder emits as its own token.

use crate::types::{Grapheme, Script};

/// Half-width katakana U+FF66..=U+FF9D, as hiragana
const HALF_WIDTH_KANA: &str =
    "をぁぃぅぇぉゃゅょっーあいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわん";

/// Canonical form of one input character
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Normalized {
    /// Dictionary key for the character itself
    pub grapheme: Grapheme,
    /// Voicing mark split off a composite kana
    pub diacritic: Option<Grapheme>,
    /// Script the grapheme is expected to live in
    pub script: Script,
}

impl Normalized {
    const fn new(grapheme: Grapheme, script: Script) -> Self {
        Self {
            grapheme,
            diacritic: None,
            script,
        }
    }

    /// Number of Morse tokens this character expands to
    pub fn token_count(&self) -> usize {
        1 + self.diacritic.is_some() as usize
    }

    /// Graphemes in emission order: base, then the diacritic if any
    pub fn graphemes(&self) -> impl Iterator<Item = Grapheme> {
        core::iter::once(self.grapheme).chain(self.diacritic)
    }
}

/// Normalize one character. Never fails; characters without a dictionary
/// entry come back unchanged (lower-cased) and are rejected by the encoder.
pub fn normalize(c: char, fold_small_kana: bool) -> Normalized {
    match c {
        ' ' | '\u{3000}' => Normalized::new(Grapheme::Space, Script::Base),
        // spacing, combining and half-width dakuten
        '\u{309B}' | '\u{3099}' | '\u{FF9E}' => Normalized::new(Grapheme::Voiced, Script::Ja),
        // spacing, combining and half-width handakuten
        '\u{309C}' | '\u{309A}' | '\u{FF9F}' => Normalized::new(Grapheme::SemiVoiced, Script::Ja),
        '\u{3041}'..='\u{3096}' => kana(c, fold_small_kana),
        '\u{30A1}'..='\u{30FA}' => katakana(c, fold_small_kana),
        '\u{FF66}'..='\u{FF9D}' => {
            let index = (c as u32 - 0xFF66) as usize;
            let hiragana = HALF_WIDTH_KANA.chars().nth(index).unwrap_or(c);
            kana(hiragana, fold_small_kana)
        }
        _ => other(c),
    }
}

/// Normalize a whole string, pairing each normalized form with its source
pub fn normalize_str(
    text: &str,
    fold_small_kana: bool,
) -> impl Iterator<Item = (char, Normalized)> + '_ {
    text.chars().map(move |c| (c, normalize(c, fold_small_kana)))
}

fn katakana(c: char, fold_small_kana: bool) -> Normalized {
    // ヷヸヹヺ have no hiragana counterpart in the shifted block
    let voiced_base = match c {
        '\u{30F7}' => Some('わ'),
        '\u{30F8}' => Some('ゐ'),
        '\u{30F9}' => Some('ゑ'),
        '\u{30FA}' => Some('を'),
        _ => None,
    };
    if let Some(base) = voiced_base {
        return Normalized {
            grapheme: Grapheme::Char(base),
            diacritic: Some(Grapheme::Voiced),
            script: Script::Ja,
        };
    }
    let hiragana = char::from_u32(c as u32 - 0x60).unwrap_or(c);
    kana(hiragana, fold_small_kana)
}

fn kana(c: char, fold_small_kana: bool) -> Normalized {
    let (base, diacritic) = decompose(c);
    let base = if fold_small_kana { fold_small(base) } else { base };
    Normalized {
        grapheme: Grapheme::Char(base),
        diacritic,
        script: Script::Ja,
    }
}

/// Split a voiced or semi-voiced hiragana into base and mark
fn decompose(c: char) -> (char, Option<Grapheme>) {
    let cp = c as u32;
    let (base, mark) = match cp {
        // が..ぢ: voiced forms sit one above their base
        0x304C..=0x3062 if (cp - 0x304B) % 2 == 1 => (cp - 1, Grapheme::Voiced),
        // づ で ど
        0x3065 | 0x3067 | 0x3069 => (cp - 1, Grapheme::Voiced),
        // は..ぽ: base, voiced, semi-voiced triples
        0x3070..=0x307D => match (cp - 0x306F) % 3 {
            1 => (cp - 1, Grapheme::Voiced),
            2 => (cp - 2, Grapheme::SemiVoiced),
            _ => return (c, None),
        },
        // ゔ
        0x3094 => (0x3046, Grapheme::Voiced),
        _ => return (c, None),
    };
    match char::from_u32(base) {
        Some(base) => (base, Some(mark)),
        None => (c, None),
    }
}

fn fold_small(c: char) -> char {
    match c {
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'っ' => 'つ',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'ゎ' => 'わ',
        'ゕ' => 'か',
        'ゖ' => 'け',
        _ => c,
    }
}

fn other(c: char) -> Normalized {
    // full-width letters and digits fold to ASCII
    let c = match c {
        '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    };
    let script = match c {
        '\u{3000}'..='\u{30FF}' | '\u{FF00}'..='\u{FFEF}' => Script::Ja,
        _ => Script::En,
    };
    Normalized::new(Grapheme::Char(lowercase(c)), script)
}

/// Lower-case only when the mapping is one character long
fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
