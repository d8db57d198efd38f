//! Translator: dictionaries plus configuration behind one handle

use alloc::string::String;
use core::fmt::Write;

use crate::decoder::{self, DecodeSummary};
use crate::encoder::{self, Scope};
use crate::error::MorseError;
use crate::table::CodeTable;
use crate::types::{Script, TranslatorConfig};

/// Bidirectional text/Morse translator.
///
/// Holds both effective dictionaries, built and validated once. The tables
/// are read-only after construction, so a shared reference can be used from
/// any number of threads.
pub struct Translator {
    table: CodeTable,
    config: TranslatorConfig,
}

impl Translator {
    /// Build the dictionaries and validate `config`
    pub fn new(config: TranslatorConfig) -> Result<Self, MorseError> {
        config.validate()?;
        Ok(Self {
            table: CodeTable::new()?,
            config,
        })
    }

    /// Encode with automatic script selection per character
    pub fn encode(&self, text: &str) -> Result<String, MorseError> {
        encoder::encode(&self.table, text, Scope::Auto, &self.config)
    }

    /// Encode using only `base ∪ script`
    pub fn encode_in(&self, text: &str, script: Script) -> Result<String, MorseError> {
        encoder::encode(&self.table, text, Scope::Only(script), &self.config)
    }

    /// Encode into a caller-provided writer, returning the token count
    pub fn encode_to<W: Write>(&self, text: &str, out: &mut W) -> Result<usize, MorseError> {
        encoder::encode_to(&self.table, text, Scope::Auto, &self.config, out)
    }

    /// Decode against the dictionary selected by `script`
    pub fn decode(&self, morse: &str, script: Script) -> String {
        decoder::decode(&self.table, morse, script)
    }

    /// Decode into a caller-provided writer
    pub fn decode_to<W: Write>(
        &self,
        morse: &str,
        script: Script,
        out: &mut W,
    ) -> Result<DecodeSummary, MorseError> {
        decoder::decode_to(&self.table, morse, script, out)
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }
}
