//! Host-side test suite for morse-core
//!
//! Shared fixtures live here; the test modules below exercise the library
//! through its public API only.

use morse_core::{Translator, TranslatorConfig};

/// Kana with a wabun entry of their own (no voicing, no folding)
pub const PLAIN_KANA: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'め', 'も', 'や', 'ゆ', 'よ', 'ら', 'り', 'る', 'れ', 'ろ', 'わ', 'を',
    'ん',
];

/// Latin letters and digits with an entry in the Latin dictionary
pub const PLAIN_LATIN: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Translator with default configuration
pub fn translator() -> Translator {
    translator_with(TranslatorConfig::default())
}

pub fn translator_with(config: TranslatorConfig) -> Translator {
    match Translator::new(config) {
        Ok(t) => t,
        Err(e) => panic!("built-in tables rejected: {}", e),
    }
}

#[cfg(test)]
mod codec_tests;


#[cfg(test)]
mod pin_tests;

#[cfg(test)]
mod realtime_tests;
