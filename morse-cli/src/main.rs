//! Morse CLI
//!
//! Encode, decode and key Japanese kana / Latin Morse code from a terminal.

mod console;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use morse_core::{
    transmitter, LookupPolicy, Script, StdDelay, TransmitReport, Translator, TranslatorConfig,
    Transmitter,
};

use console::ConsoleLine;

#[derive(Parser)]
#[command(name = "morse")]
#[command(about = "Kana/Latin Morse transcoder and keying simulator")]
#[command(version)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text as a Morse string
    Encode {
        /// Text to encode
        text: String,

        /// Restrict lookups to one script (ja or en)
        #[arg(short, long)]
        script: Option<String>,

        /// Drop characters with no pattern instead of failing
        #[arg(long)]
        skip_unknown: bool,

        /// Decode the result back and print it too
        #[arg(long)]
        verify: bool,
    },

    /// Decode a Morse string
    Decode {
        /// Space-separated tokens of dots and dashes
        morse: String,

        /// Dictionary to decode against ("ja" selects kana, anything else Latin)
        #[arg(short, long, default_value = "ja")]
        script: String,
    },

    /// Encode text and key it with real timing
    Send {
        /// Text to send
        text: String,

        /// Restrict lookups to one script (ja or en)
        #[arg(short, long)]
        script: Option<String>,

        /// Tempo unit in milliseconds
        #[arg(long, conflicts_with = "wpm")]
        tempo_ms: Option<u64>,

        /// Speed in words per minute (PARIS)
        #[arg(long)]
        wpm: Option<u32>,

        /// Refuse transmissions longer than this
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Run the full timing without keying the line
        #[arg(long)]
        dry_run: bool,
    },

    /// Print one script's effective dictionary
    Table {
        /// "ja" for kana, anything else for Latin
        #[arg(short, long, default_value = "ja")]
        script: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Encode {
            text,
            script,
            skip_unknown,
            verify,
        } => {
            let policy = if skip_unknown {
                LookupPolicy::Skip
            } else {
                LookupPolicy::Strict
            };
            let translator =
                Translator::new(morse_core::default_config().with_lookup_policy(policy))?;
            let morse = encode(&translator, &text, script.as_deref())?;
            println!("{}", morse);

            if verify {
                let script = script
                    .as_deref()
                    .map(Script::from_selector)
                    .unwrap_or_else(|| guess_script(&text));
                println!("{}", translator.decode(&morse, script));
            }
        }

        Commands::Decode { morse, script } => {
            let translator = Translator::new(morse_core::default_config())?;
            println!("{}", translator.decode(&morse, Script::from_selector(&script)));
        }

        Commands::Send {
            text,
            script,
            tempo_ms,
            wpm,
            timeout_ms,
            dry_run,
        } => {
            let config = send_config(tempo_ms, wpm, timeout_ms)?;
            let translator = Translator::new(config)?;
            let morse = encode(&translator, &flatten_lines(&text), script.as_deref())?;
            println!("{}", morse);

            info!(
                "{} units at {} ms/unit ({} WPM), {} ms scheduled",
                transmitter::total_units(&morse),
                config.tempo.as_millis(),
                config.wpm(),
                transmitter::duration(&morse, config.tempo).as_millis()
            );

            let (report, edges) = send(&morse, config, dry_run)?;
            if dry_run {
                println!(
                    "dry run: {} pulses, {} ms at {} ms/unit",
                    report.pulses,
                    report.elapsed.as_millis(),
                    config.tempo.as_millis()
                );
            } else {
                println!(
                    "sent {} pulses, {} key edges, {} ms",
                    report.pulses,
                    edges,
                    report.elapsed.as_millis()
                );
            }
        }

        Commands::Table { script } => {
            let translator = Translator::new(morse_core::default_config())?;
            let book = translator.table().book(Script::from_selector(&script));
            println!("{} dictionary, {} entries", book.script(), book.len());
            for (grapheme, pattern) in book.iter() {
                println!("{:<8} {}", grapheme.label().to_string(), pattern);
            }
        }
    }

    Ok(())
}

fn encode(translator: &Translator, text: &str, script: Option<&str>) -> Result<String> {
    let morse = match script {
        Some(selector) => translator.encode_in(text, Script::from_selector(selector)),
        None => translator.encode(text),
    };
    morse.with_context(|| format!("cannot encode {:?}", text))
}

/// Key `morse` in real time, returning the report and the number of key
/// edges. A dry run keeps the full timing but drives no line.
fn send(morse: &str, config: TranslatorConfig, dry_run: bool) -> Result<(TransmitReport, usize)> {
    let mut tx = Transmitter::new(StdDelay::new(), config)?;
    if dry_run {
        let report = tx.dry_run(morse).context("dry run failed")?;
        return Ok((report, 0));
    }

    let mut line = ConsoleLine::new();
    let report = tx
        .transmit(morse, Some(&mut line))
        .context("transmission failed")?;
    Ok((report, line.edges()))
}

fn send_config(
    tempo_ms: Option<u64>,
    wpm: Option<u32>,
    timeout_ms: Option<u64>,
) -> Result<TranslatorConfig> {
    let config = match (tempo_ms, wpm) {
        (_, Some(wpm)) => TranslatorConfig::from_wpm(wpm)?,
        (Some(ms), None) => TranslatorConfig::new(Duration::from_millis(ms), LookupPolicy::Strict)?,
        (None, None) => morse_core::default_config(),
    };
    let config = config.with_timeout(timeout_ms.map(Duration::from_millis));
    config.validate()?;
    Ok(config)
}

/// Join a multi-line message into one line for keying. A literal
/// backslash-n typed on the command line counts as a line break.
fn flatten_lines(text: &str) -> String {
    text.replace("\\n", "\n")
        .lines()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Kana anywhere in the text selects the kana dictionary for verification
fn guess_script(text: &str) -> Script {
    let has_kana = text
        .chars()
        .any(|c| morse_core::normalize::normalize(c, true).script == Script::Ja);
    if has_kana {
        Script::Ja
    } else {
        Script::En
    }
}
