//! Wall-clock transmissions: cancellation from another task

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use morse_core::mock::{PulseLog, RecordingLine};
use morse_core::{
    DelayNs, Level, LookupPolicy, MorseError, StdDelay, TranslatorConfig, Transmitter,
};

fn fast_config() -> TranslatorConfig {
    match TranslatorConfig::new(Duration::from_millis(10), LookupPolicy::Strict) {
        Ok(config) => config,
        Err(e) => panic!("{}", e),
    }
}

#[tokio::test]
async fn cancel_from_another_task() {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    // 20 dashes at 10 ms/unit is 800 ms scheduled
    let handle = tokio::task::spawn_blocking(move || {
        let log = PulseLog::new();
        let mut line = RecordingLine::new(log);
        let mut tx = Transmitter::new(StdDelay::new(), fast_config()).unwrap();

        let started = Instant::now();
        let result = tx.transmit_with(&"-".repeat(20), Some(&mut line), &*flag);
        (result, line.level(), started.elapsed())
    });

    tokio::time::sleep(Duration::from_millis(60)).await;
    cancel.store(true, Ordering::Release);

    let (result, level, elapsed) = handle.await.unwrap();
    assert_eq!(result, Err(MorseError::Cancelled));
    assert_eq!(level, Level::Low);
    assert!(elapsed < Duration::from_millis(600), "took {:?}", elapsed);
}

#[tokio::test]
async fn short_transmission_completes_on_time() {
    let handle = tokio::task::spawn_blocking(|| {
        let mut line = RecordingLine::new(PulseLog::new());
        let mut tx = Transmitter::new(StdDelay::new(), fast_config()).unwrap();

        let started = Instant::now();
        let report = tx.transmit(".-", Some(&mut line));
        (report, started.elapsed())
    });

    let (report, elapsed) = handle.await.unwrap();
    let report = report.unwrap();
    assert_eq!(report.elapsed, Duration::from_millis(60));
    assert!(elapsed >= Duration::from_millis(60));
}

#[test]
fn transmitter_runs_inside_block_on() {
    let report = tokio_test::block_on(async {
        let mut tx = Transmitter::new(StdDelay::new(), fast_config()).unwrap();
        tx.dry_run(". ")
    });
    assert_eq!(report.unwrap().pulses, 3);
}

#[test]
fn sliced_holds_do_not_accumulate_overshoot() {
    let mut delay = StdDelay::new();

    // 200 back-to-back 500 us slices
    let started = Instant::now();
    for _ in 0..200 {
        delay.delay_us(500);
    }
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_millis(100), "took {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(110), "took {:?}", elapsed);
}

#[test]
fn late_call_starts_a_fresh_schedule() {
    let mut delay = StdDelay::new();
    delay.delay_ms(1);
    std::thread::sleep(StdDelay::RESYNC * 2);

    // must wait its full length, not count the idle gap as credit
    let started = Instant::now();
    delay.delay_ms(5);
    assert!(started.elapsed() >= Duration::from_millis(5));
}
