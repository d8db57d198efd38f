//! Morse string to text decoding
//!
//! Decoding never fails on content: a token with no entry in the effective
//! dictionary degrades to a space and is counted as a miss.

use alloc::string::String;
use core::fmt::Write;

use crate::error::MorseError;
use crate::logging::morse_debug;
use crate::table::CodeTable;
use crate::types::{MorsePattern, Script};

/// Outcome of one decode call
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DecodeSummary {
    /// Characters written
    pub chars: usize,
    /// Tokens that matched nothing and were replaced by a space
    pub misses: usize,
}

/// Split a Morse string into tokens. A single trailing separator ends the
/// last token rather than opening a blank one; an empty string has no tokens.
pub fn tokens(morse: &str) -> impl Iterator<Item = &str> {
    let body = (!morse.is_empty()).then(|| morse.strip_suffix(' ').unwrap_or(morse));
    body.into_iter().flat_map(|body| body.split(' '))
}

/// Resolve each token to a character; `None` marks a token with no entry
fn resolve<'a>(
    table: &'a CodeTable,
    morse: &'a str,
    script: Script,
) -> impl Iterator<Item = Option<char>> + 'a {
    let book = table.book(script);
    tokens(morse).map(move |token| {
        if token.is_empty() {
            return Some(' ');
        }
        let found = MorsePattern::parse(token)
            .and_then(|p| book.reverse_lookup(&p))
            .map(|grapheme| grapheme.to_char());
        if found.is_none() {
            morse_debug!("no {} entry for token {}", book.script().as_str(), token);
        }
        found
    })
}

/// Decode into `out`. Only fails if the writer rejects a character.
pub fn decode_to<W: Write>(
    table: &CodeTable,
    morse: &str,
    script: Script,
    out: &mut W,
) -> Result<DecodeSummary, MorseError> {
    let mut summary = DecodeSummary::default();

    for found in resolve(table, morse, script) {
        if found.is_none() {
            summary.misses += 1;
        }
        out.write_char(found.unwrap_or(' '))
            .map_err(|_| MorseError::BufferFull)?;
        summary.chars += 1;
    }
    Ok(summary)
}

/// Decode into a new string
pub fn decode(table: &CodeTable, morse: &str, script: Script) -> String {
    resolve(table, morse, script)
        .map(|found| found.unwrap_or(' '))
        .collect()
}
