//! Static code tables and the per-script dictionaries built from them

use heapless::FnvIndexMap;

use crate::error::MorseError;
use crate::logging::morse_debug;
use crate::types::{Grapheme, MorsePattern, Script};

/// Capacity of one effective dictionary (base plus one script)
pub const BOOK_CAPACITY: usize = 64;

/// Digits and word space, shared by every script
pub static BASE_TABLE: &[(Grapheme, &str)] = &[
    (Grapheme::Char('1'), ".----"),
    (Grapheme::Char('2'), "..---"),
    (Grapheme::Char('3'), "...--"),
    (Grapheme::Char('4'), "....-"),
    (Grapheme::Char('5'), "....."),
    (Grapheme::Char('6'), "-...."),
    (Grapheme::Char('7'), "--..."),
    (Grapheme::Char('8'), "---.."),
    (Grapheme::Char('9'), "----."),
    (Grapheme::Char('0'), "-----"),
    (Grapheme::Space, ""),
];

/// Wabun kana, voicing marks and Japanese punctuation
pub static JA_TABLE: &[(Grapheme, &str)] = &[
    (Grapheme::Char('あ'), "--.--"),
    (Grapheme::Char('い'), ".-"),
    (Grapheme::Char('う'), "..-"),
    (Grapheme::Char('え'), "-.---"),
    (Grapheme::Char('お'), ".-..."),
    (Grapheme::Char('か'), ".-.."),
    (Grapheme::Char('き'), "-.-.."),
    (Grapheme::Char('く'), "...-"),
    (Grapheme::Char('け'), "-.--"),
    (Grapheme::Char('こ'), "----"),
    (Grapheme::Char('さ'), "-.-.-"),
    (Grapheme::Char('し'), "--.-."),
    (Grapheme::Char('す'), "---.-"),
    (Grapheme::Char('せ'), ".---."),
    (Grapheme::Char('そ'), "---."),
    (Grapheme::Char('た'), "-."),
    (Grapheme::Char('ち'), "..-."),
    (Grapheme::Char('つ'), ".--."),
    (Grapheme::Char('て'), ".-.--"),
    (Grapheme::Char('と'), "..-.."),
    (Grapheme::Char('な'), ".-."),
    (Grapheme::Char('に'), "-.-."),
    (Grapheme::Char('ぬ'), "...."),
    (Grapheme::Char('ね'), "--.-"),
    (Grapheme::Char('の'), "..--"),
    (Grapheme::Char('は'), "-..."),
    (Grapheme::Char('ひ'), "--..-"),
    (Grapheme::Char('ふ'), "--.."),
    (Grapheme::Char('へ'), "."),
    (Grapheme::Char('ほ'), "-.."),
    (Grapheme::Char('ま'), "-..-"),
    (Grapheme::Char('み'), "..-.-"),
    (Grapheme::Char('む'), "-"),
    (Grapheme::Char('め'), "-...-"),
    (Grapheme::Char('も'), "-..-."),
    (Grapheme::Char('や'), ".--"),
    (Grapheme::Char('ゆ'), "-..--"),
    (Grapheme::Char('よ'), "--"),
    (Grapheme::Char('ら'), "..."),
    (Grapheme::Char('り'), "--."),
    (Grapheme::Char('る'), "-.--."),
    (Grapheme::Char('れ'), "---"),
    (Grapheme::Char('ろ'), ".-.-"),
    (Grapheme::Char('わ'), "-.-"),
    (Grapheme::Char('を'), ".---"),
    (Grapheme::Char('ん'), ".-.-."),
    (Grapheme::Char('、'), ".-.-.-"),
    (Grapheme::Voiced, ".."),
    (Grapheme::SemiVoiced, "..--."),
    (Grapheme::Char('ー'), ".--.-"),
    (Grapheme::Char('？'), "..--.."),
];

/// Latin letters and punctuation
pub static EN_TABLE: &[(Grapheme, &str)] = &[
    (Grapheme::Char('a'), ".-"),
    (Grapheme::Char('b'), "-..."),
    (Grapheme::Char('c'), "-.-."),
    (Grapheme::Char('d'), "-.."),
    (Grapheme::Char('e'), "."),
    (Grapheme::Char('f'), "..-."),
    (Grapheme::Char('g'), "--."),
    (Grapheme::Char('h'), "...."),
    (Grapheme::Char('i'), ".."),
    (Grapheme::Char('j'), ".---"),
    (Grapheme::Char('k'), "-.-"),
    (Grapheme::Char('l'), ".-.."),
    (Grapheme::Char('m'), "--"),
    (Grapheme::Char('n'), "-."),
    (Grapheme::Char('o'), "---"),
    (Grapheme::Char('p'), ".--."),
    (Grapheme::Char('q'), "--.-"),
    (Grapheme::Char('r'), ".-."),
    (Grapheme::Char('s'), "..."),
    (Grapheme::Char('t'), "-"),
    (Grapheme::Char('u'), "..-"),
    (Grapheme::Char('v'), "...-"),
    (Grapheme::Char('w'), ".--"),
    (Grapheme::Char('x'), "-..-"),
    (Grapheme::Char('y'), "-.--"),
    (Grapheme::Char('z'), "--.."),
    (Grapheme::Char('.'), ".-.-."),
    (Grapheme::Char('\''), ".----."),
    (Grapheme::Char(','), "--..--"),
    (Grapheme::Char('?'), "..--.."),
];

/// Raw entries of one script's own table (without `Base` unless asked for)
pub fn entries(script: Script) -> &'static [(Grapheme, &'static str)] {
    match script {
        Script::Base => BASE_TABLE,
        Script::Ja => JA_TABLE,
        Script::En => EN_TABLE,
    }
}

/// One effective dictionary: `Base` merged with exactly one script,
/// indexed in both directions
pub struct CodeBook {
    script: Script,
    forward: FnvIndexMap<Grapheme, MorsePattern, BOOK_CAPACITY>,
    reverse: FnvIndexMap<MorsePattern, Grapheme, BOOK_CAPACITY>,
}

impl CodeBook {
    /// Build and validate the dictionary for `script` (`Base` selects `En`).
    /// Fails if any pattern is malformed or if two graphemes share a pattern.
    pub fn build(script: Script) -> Result<Self, MorseError> {
        let script = script.effective();
        let mut book = Self {
            script,
            forward: FnvIndexMap::new(),
            reverse: FnvIndexMap::new(),
        };
        for &(grapheme, token) in BASE_TABLE.iter().chain(entries(script)) {
            book.insert(grapheme, token)?;
        }
        morse_debug!("built {} dictionary with {} entries", script.as_str(), book.len());
        Ok(book)
    }

    fn insert(&mut self, grapheme: Grapheme, token: &str) -> Result<(), MorseError> {
        let script = self.script;
        let pattern =
            MorsePattern::parse(token).ok_or(MorseError::InvalidPattern { script, grapheme })?;

        if self.forward.contains_key(&grapheme) {
            return Err(MorseError::DuplicateGrapheme { script, grapheme });
        }
        if self.reverse.contains_key(&pattern) {
            return Err(MorseError::DuplicatePattern { script, pattern });
        }
        self.forward
            .insert(grapheme, pattern)
            .map_err(|_| MorseError::TableFull { script })?;
        self.reverse
            .insert(pattern, grapheme)
            .map_err(|_| MorseError::TableFull { script })?;
        Ok(())
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Pattern for a grapheme
    pub fn lookup(&self, grapheme: &Grapheme) -> Option<MorsePattern> {
        self.forward.get(grapheme).copied()
    }

    /// Grapheme whose pattern is exactly `pattern`
    pub fn reverse_lookup(&self, pattern: &MorsePattern) -> Option<Grapheme> {
        self.reverse.get(pattern).copied()
    }

    /// Entries in table order (base first)
    pub fn iter(&self) -> impl Iterator<Item = (Grapheme, MorsePattern)> + '_ {
        self.forward.iter().map(|(g, p)| (*g, *p))
    }
}

/// Both effective dictionaries, built once and never mutated
pub struct CodeTable {
    ja: CodeBook,
    en: CodeBook,
}

impl CodeTable {
    pub fn new() -> Result<Self, MorseError> {
        Ok(Self {
            ja: CodeBook::build(Script::Ja)?,
            en: CodeBook::build(Script::En)?,
        })
    }

    /// Effective dictionary for a script selector
    pub fn book(&self, script: Script) -> &CodeBook {
        match script.effective() {
            Script::Ja => &self.ja,
            _ => &self.en,
        }
    }
}
