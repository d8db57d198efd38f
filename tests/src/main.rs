// Smoke run of the transcoder and transmitter against mock hardware

use morse_core::mock::{PulseLog, RecordingDelay, RecordingLine};
use morse_core::{Script, TranslatorConfig, Transmitter};

use morse_tests::translator;

fn main() {
    println!("🧪 Morse Smoke Tests");

    // Test 1: Encode and decode round trip
    test_round_trip();

    // Test 2: Kana handling
    test_kana();

    // Test 3: Transmission timing on mock hardware
    test_mock_transmission();

    println!("✅ All smoke tests passed!");
    println!();
    println!("📝 Run the full suite with: cargo test");
}

/// Encode "sos" and decode it back
fn test_round_trip() {
    println!("🔁 Testing Round Trip...");

    let t = translator();
    let morse = t.encode("sos").unwrap();
    assert_eq!(morse, "... --- ... ");
    assert_eq!(t.decode(&morse, Script::En), "sos");

    println!("  ✅ sos -> {:?} -> sos", morse);
}

/// Voiced kana split into base and mark
fn test_kana() {
    println!("🈂️ Testing Kana...");

    let t = translator();
    for (text, expected) in [("ば", "は゛"), ("パ", "は゜"), ("ｶﾞ", "か゛")] {
        let morse = t.encode(text).unwrap();
        assert_eq!(t.decode(&morse, Script::Ja), expected);
        println!("  ✅ {} -> {:?} -> {}", text, morse, expected);
    }
}

/// Pulse log of a short transmission
fn test_mock_transmission() {
    println!("📡 Testing Mock Transmission...");

    let log = PulseLog::new();
    let config = TranslatorConfig::default();
    let mut tx = Transmitter::new(RecordingDelay::new(log.clone()), config).unwrap();
    let mut line = RecordingLine::new(log.clone());

    let report = tx.transmit(".- ", Some(&mut line)).unwrap();
    assert_eq!(report.elapsed, config.tempo * 8);
    assert_eq!(log.total_held(), report.elapsed);
    assert!(!line.is_active());

    for (level, held) in log.segments() {
        println!("  {:?} for {:?}", level, held);
    }
    println!("  ✅ {} pulses, {:?}", report.pulses, report.elapsed);
}
