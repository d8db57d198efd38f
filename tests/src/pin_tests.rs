//! Transmitter against embedded-hal-mock pins

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::pin::{Mock as PinMock, State, Transaction as PinTransaction};

use morse_core::{EmbeddedHalOutputLine, TranslatorConfig, Transmitter};

fn edges(states: &[State]) -> Vec<PinTransaction> {
    states.iter().map(|s| PinTransaction::set(s.clone())).collect()
}

#[test]
fn letter_a_drives_expected_edges() {
    use State::{High, Low};

    // ".-" plus separator, then the final release
    let expectations = edges(&[High, Low, High, Low, Low, Low]);
    let pin = PinMock::new(&expectations);
    let mut line = EmbeddedHalOutputLine::new(pin, false);

    let mut tx = Transmitter::new(NoopDelay::new(), TranslatorConfig::default()).unwrap();
    let report = tx.transmit(".- ", Some(&mut line)).unwrap();
    assert_eq!(report.pulses, 5);

    let mut pin = line.release();
    pin.done();
}

#[test]
fn inverted_line_keys_active_low() {
    use State::{High, Low};

    let expectations = edges(&[Low, High, High]);
    let pin = PinMock::new(&expectations);
    let mut line = EmbeddedHalOutputLine::new(pin, true);

    let mut tx = Transmitter::new(NoopDelay::new(), TranslatorConfig::default()).unwrap();
    tx.transmit("-", Some(&mut line)).unwrap();

    let mut pin = line.release();
    pin.done();
}

#[test]
fn refused_transmission_only_releases_the_line() {
    let expectations = edges(&[State::Low]);
    let pin = PinMock::new(&expectations);
    let mut line = EmbeddedHalOutputLine::new(pin, false);

    let config = TranslatorConfig::default().with_timeout(Some(std::time::Duration::from_millis(50)));
    let mut tx = Transmitter::new(NoopDelay::new(), config).unwrap();
    assert!(tx.transmit("... --- ...", Some(&mut line)).is_err());

    let mut pin = line.release();
    pin.done();
}

#[test]
fn encoded_text_keys_every_element() {
    let translator = crate::translator();
    let morse = translator.encode("ぱ").unwrap();

    // は: - . . .  then 半濁点: . . - - .
    let keyed = morse.chars().filter(|c| matches!(c, '.' | '-')).count();
    let mut states = Vec::new();
    for c in morse.chars() {
        if matches!(c, '.' | '-') {
            states.push(State::High);
        }
        states.push(State::Low);
    }
    states.push(State::Low);
    assert_eq!(keyed, 9);

    let pin = PinMock::new(&edges(&states));
    let mut line = EmbeddedHalOutputLine::new(pin, false);
    let mut tx = Transmitter::new(NoopDelay::new(), TranslatorConfig::default()).unwrap();
    tx.transmit(&morse, Some(&mut line)).unwrap();

    let mut pin = line.release();
    pin.done();
}
