#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Japanese kana (wabun) and Latin Morse transcoder with a timed pulse
//! transmitter for a single digital output line.
//! Runs on `no_std` + `alloc`; host conveniences live behind `std`.

extern crate alloc;

mod logging;

pub mod types;
pub mod error;
pub mod hal;
pub mod table;
pub mod normalize;
pub mod encoder;
pub mod decoder;
pub mod translator;
pub mod transmitter;


pub use types::*;
pub use error::MorseError;
pub use hal::*;
pub use table::{CodeBook, CodeTable};
pub use encoder::Scope;
pub use decoder::DecodeSummary;
pub use translator::Translator;
pub use transmitter::{CancelToken, NeverCancel, TransmitReport, Transmitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 30 ms unit, strict lookups, small kana folded
pub fn default_config() -> TranslatorConfig {
    TranslatorConfig {
        tempo: core::time::Duration::from_millis(30),
        lookup_policy: LookupPolicy::Strict,
        fold_small_kana: true,
        poll_interval: core::time::Duration::from_millis(5),
        timeout: None,
    }
}
