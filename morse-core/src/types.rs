//! Core data types for the Morse transcoder

use core::fmt;
use core::time::Duration;

use crate::error::MorseError;

/// Morse code elements as they appear in a serialized Morse string
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Element {
    /// Dot (short element)
    Dot,
    /// Dash (long element)
    Dash,
    /// Token separator or any other non-keyed character
    Gap,
}

impl Element {
    /// Classify one character of a serialized Morse string
    pub const fn from_char(c: char) -> Element {
        match c {
            '.' => Element::Dot,
            '-' => Element::Dash,
            _ => Element::Gap,
        }
    }

    /// Serialized character for keyed elements
    pub const fn as_char(&self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
            Element::Gap => ' ',
        }
    }

    /// Returns the keyed (high) duration of this element in units
    pub const fn on_units(&self) -> u32 {
        match self {
            Element::Dot => 1,
            Element::Dash => 3,
            Element::Gap => 0,
        }
    }

    /// Returns the trailing low duration of this element in units
    pub const fn off_units(&self) -> u32 {
        match self {
            Element::Dot | Element::Dash => 1,
            Element::Gap => 2,
        }
    }

    /// Returns the total duration of this element in units
    pub const fn duration_units(&self) -> u32 {
        self.on_units() + self.off_units()
    }

    /// Returns true if this element produces key output
    pub const fn is_keyed(&self) -> bool {
        match self {
            Element::Dot | Element::Dash => true,
            Element::Gap => false,
        }
    }
}

/// Script selector for the language-specific half of a dictionary
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Script {
    /// Digits and the space symbol, shared by every dictionary
    Base,
    /// Japanese kana (wabun)
    Ja,
    /// Latin letters and punctuation
    En,
}

impl Script {
    /// Parse a script selector. `"ja"` selects kana, anything else Latin.
    pub fn from_selector(selector: &str) -> Script {
        if selector.eq_ignore_ascii_case("ja") {
            Script::Ja
        } else {
            Script::En
        }
    }

    /// The script whose table is merged with `Base` for this selector
    pub const fn effective(&self) -> Script {
        match self {
            Script::Ja => Script::Ja,
            Script::Base | Script::En => Script::En,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Script::Base => "base",
            Script::Ja => "ja",
            Script::En => "en",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical unit of writing used as a dictionary key
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Grapheme {
    /// Word space, encoded as an empty token
    Space,
    /// Voiced mark (dakuten) sentinel
    Voiced,
    /// Semi-voiced mark (handakuten) sentinel
    SemiVoiced,
    /// Letter, digit, punctuation mark or base kana
    Char(char),
}

impl Grapheme {
    /// Character emitted by the decoder for this grapheme
    pub const fn to_char(&self) -> char {
        match self {
            Grapheme::Space => ' ',
            Grapheme::Voiced => '\u{309B}',
            Grapheme::SemiVoiced => '\u{309C}',
            Grapheme::Char(c) => *c,
        }
    }

    /// Dictionary label, as shown in table dumps
    pub fn label(&self) -> Label {
        match self {
            Grapheme::Space => Label::Name("space"),
            Grapheme::Voiced => Label::Name("濁点"),
            Grapheme::SemiVoiced => Label::Name("半濁点"),
            Grapheme::Char(c) => Label::Char(*c),
        }
    }

    /// Returns true for the voicing-mark sentinels
    pub const fn is_diacritic(&self) -> bool {
        matches!(self, Grapheme::Voiced | Grapheme::SemiVoiced)
    }
}

/// Printable dictionary label of a grapheme
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Label {
    Name(&'static str),
    Char(char),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Name(name) => f.write_str(name),
            Label::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Ordered sequence of dots and dashes, packed LSB-first (1 = dash)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MorsePattern {
    len: u8,
    bits: u16,
}

impl MorsePattern {
    /// Longest pattern representable
    pub const MAX_LEN: usize = 16;

    /// The empty pattern (word space)
    pub const EMPTY: MorsePattern = MorsePattern { len: 0, bits: 0 };

    /// Parse a serialized token. Returns `None` if the token contains
    /// anything other than `.`/`-` or is longer than [`Self::MAX_LEN`].
    pub fn parse(token: &str) -> Option<Self> {
        let mut pattern = Self::EMPTY;
        for c in token.chars() {
            let element = match c {
                '.' => Element::Dot,
                '-' => Element::Dash,
                _ => return None,
            };
            pattern = pattern.push(element)?;
        }
        Some(pattern)
    }

    /// Append one keyed element
    pub fn push(self, element: Element) -> Option<Self> {
        if self.len as usize >= Self::MAX_LEN || !element.is_keyed() {
            return None;
        }
        let bit = if element == Element::Dash { 1u16 << self.len } else { 0 };
        Some(Self {
            len: self.len + 1,
            bits: self.bits | bit,
        })
    }

    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the elements in transmission order
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.len).map(move |i| {
            if self.bits & (1 << i) != 0 {
                Element::Dash
            } else {
                Element::Dot
            }
        })
    }
}

impl fmt::Display for MorsePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.elements() {
            write!(f, "{}", element.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for MorsePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MorsePattern(\"{}\")", self)
    }
}

/// Output line level
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Level {
    High,
    Low,
}

/// One timed output event: drive the line to `level`, then hold for `units`
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pulse {
    pub level: Level,
    pub units: u32,
}

impl Pulse {
    pub const fn high(units: u32) -> Self {
        Self { level: Level::High, units }
    }

    pub const fn low(units: u32) -> Self {
        Self { level: Level::Low, units }
    }

    /// Hold duration for the given tempo unit
    pub fn duration(&self, tempo: Duration) -> Duration {
        tempo * self.units
    }
}

/// What the encoder does with a grapheme that has no dictionary entry
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LookupPolicy {
    /// Fail with [`MorseError::LookupFailure`]
    Strict,
    /// Drop the character and keep encoding
    Skip,
}

/// Translator and transmitter configuration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TranslatorConfig {
    /// Basic timing unit (dot duration)
    pub tempo: Duration,
    /// Handling of characters missing from the dictionary
    pub lookup_policy: LookupPolicy,
    /// Fold small kana (っ, ゃ, ...) to their full-size forms
    pub fold_small_kana: bool,
    /// Slice length used while holding a level, bounds cancellation latency
    pub poll_interval: Duration,
    /// Upper bound on the scheduled length of one transmission
    pub timeout: Option<Duration>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            tempo: Duration::from_millis(30),
            lookup_policy: LookupPolicy::Strict,
            fold_small_kana: true,
            poll_interval: Duration::from_millis(5),
            timeout: None,
        }
    }
}

impl TranslatorConfig {
    /// Create a new configuration with validation
    pub fn new(tempo: Duration, lookup_policy: LookupPolicy) -> Result<Self, MorseError> {
        let config = Self {
            tempo,
            lookup_policy,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with the tempo derived from words per minute
    /// (PARIS standard: 50 units per word)
    pub fn from_wpm(wpm: u32) -> Result<Self, MorseError> {
        if wpm == 0 || wpm > 100 {
            return Err(MorseError::InvalidConfig("WPM must be between 1 and 100"));
        }
        Self::new(Duration::from_millis(1200 / wpm as u64), LookupPolicy::Strict)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), MorseError> {
        if self.tempo < Duration::from_millis(1) {
            return Err(MorseError::InvalidConfig("Tempo must be at least 1ms"));
        }
        if self.tempo > Duration::from_secs(10) {
            return Err(MorseError::InvalidConfig("Tempo must be <= 10s"));
        }
        if self.poll_interval < Duration::from_millis(1) {
            return Err(MorseError::InvalidConfig("Poll interval must be at least 1ms"));
        }
        if self.poll_interval > Duration::from_secs(1) {
            return Err(MorseError::InvalidConfig("Poll interval must be <= 1s"));
        }
        if matches!(self.timeout, Some(t) if t.is_zero()) {
            return Err(MorseError::InvalidConfig("Timeout must be non-zero"));
        }
        Ok(())
    }

    /// Get Words Per Minute from current tempo
    pub fn wpm(&self) -> u32 {
        (1200 / self.tempo.as_millis().max(1) as u32).max(1)
    }

    /// Gap between elements of one token
    pub fn inter_element_space(&self) -> Duration {
        self.tempo
    }

    /// Gap between tokens (element gap plus separator hold)
    pub fn char_space_duration(&self) -> Duration {
        self.tempo * 3
    }

    pub fn with_lookup_policy(mut self, policy: LookupPolicy) -> Self {
        self.lookup_policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
