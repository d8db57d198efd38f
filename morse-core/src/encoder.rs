//! Text to Morse string encoding

use alloc::string::String;
use core::fmt::Write;

use heapless::Vec;

use crate::error::MorseError;
use crate::logging::morse_warn;
use crate::normalize::{normalize, Normalized};
use crate::table::CodeTable;
use crate::types::{LookupPolicy, MorsePattern, Script, TranslatorConfig};

/// Which dictionaries a lookup may use
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Scope {
    /// Kana against `base ∪ ja`, everything else against `base ∪ en`,
    /// falling back to the other script
    Auto,
    /// Only `base ∪ script`
    Only(Script),
}

/// Encode `text` into `out`, one token per grapheme, each followed by a
/// single separating space. Returns the number of tokens written.
pub fn encode_to<W: Write>(
    table: &CodeTable,
    text: &str,
    scope: Scope,
    config: &TranslatorConfig,
    out: &mut W,
) -> Result<usize, MorseError> {
    let mut tokens = 0;
    for c in text.chars() {
        let normalized = normalize(c, config.fold_small_kana);
        let patterns = match resolve_char(table, &normalized, scope) {
            Some(patterns) => patterns,
            None => match config.lookup_policy {
                LookupPolicy::Strict => return Err(MorseError::LookupFailure { ch: c }),
                LookupPolicy::Skip => {
                    morse_warn!("no pattern for code point {}, skipped", c as u32);
                    continue;
                }
            },
        };
        for pattern in &patterns {
            write!(out, "{} ", pattern).map_err(|_| MorseError::BufferFull)?;
            tokens += 1;
        }
    }
    Ok(tokens)
}

/// Encode `text` into a new string
pub fn encode(
    table: &CodeTable,
    text: &str,
    scope: Scope,
    config: &TranslatorConfig,
) -> Result<String, MorseError> {
    let mut out = String::with_capacity(text.len() * 4);
    encode_to(table, text, scope, config, &mut out)?;
    Ok(out)
}

/// Patterns for every token of one character; `None` if any is missing,
/// so a composite kana is emitted whole or not at all
fn resolve_char(
    table: &CodeTable,
    normalized: &Normalized,
    scope: Scope,
) -> Option<Vec<MorsePattern, 2>> {
    let mut patterns = Vec::new();
    for grapheme in normalized.graphemes() {
        let pattern = match scope {
            Scope::Only(script) => table.book(script).lookup(&grapheme),
            Scope::Auto => {
                let (preferred, fallback) = match normalized.script {
                    Script::Ja => (Script::Ja, Script::En),
                    Script::Base | Script::En => (Script::En, Script::Ja),
                };
                table
                    .book(preferred)
                    .lookup(&grapheme)
                    .or_else(|| table.book(fallback).lookup(&grapheme))
            }
        }?;
        patterns.push(pattern).ok()?;
    }
    Some(patterns)
}
