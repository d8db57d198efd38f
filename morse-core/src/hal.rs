//! Hardware Abstraction Layer for the signal transmitter

use core::fmt;

pub use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::types::Level;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Single-bit digital output driven by the transmitter
pub trait OutputLine {
    type Error: Into<HalError>;

    /// Drive the line high (key down)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Drive the line low (key up)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Drive the line to the given level
    fn set_level(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    type Error = T::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        (**self).set_high()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        (**self).set_low()
    }
}

/// Generic implementation for embedded-hal compatible output pins
pub struct EmbeddedHalOutputLine<P> {
    pin: P,
    inverted: bool,
}

impl<P> EmbeddedHalOutputLine<P>
where
    P: OutputPin,
{
    /// Wrap a pin. `inverted` selects active-low keying.
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Give the pin back to the hardware layer
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputLine for EmbeddedHalOutputLine<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let result = if self.inverted {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
        result.map_err(|_| HalError::GpioError)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let result = if self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| HalError::GpioError)
    }
}

/// Line with no physical output, for dry runs
#[derive(Copy, Clone, Debug, Default)]
pub struct NullLine;

impl OutputLine for NullLine {
    type Error = HalError;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Blocking delay backed by `std::thread::sleep`.
///
/// Back-to-back delays are measured from the previous deadline rather than
/// from the moment of the call, so sleep overshoot does not accumulate across
/// the slices of one transmission. A call arriving more than
/// [`StdDelay::RESYNC`] after the last deadline starts a fresh schedule.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct StdDelay {
    deadline: Option<std::time::Instant>,
}

#[cfg(feature = "std")]
impl StdDelay {
    /// Lateness beyond which the running schedule is dropped
    pub const RESYNC: std::time::Duration = std::time::Duration::from_millis(10);

    pub fn new() -> Self {
        Self::default()
    }

    fn sleep(&mut self, length: std::time::Duration) {
        let now = std::time::Instant::now();
        let start = match self.deadline {
            Some(deadline) if now.saturating_duration_since(deadline) <= Self::RESYNC => deadline,
            _ => now,
        };
        let deadline = start + length;
        self.deadline = Some(deadline);
        if let Some(remaining) = deadline.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleep(std::time::Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.sleep(std::time::Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleep(std::time::Duration::from_millis(ms as u64));
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::time::Duration;

    use crate::transmitter::CancelToken;

    /// Something that happened on the mock hardware
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Event {
        /// Line driven to a level
        Drive(Level),
        /// Delay provider asked to wait
        Hold(Duration),
    }

    /// Shared, ordered record of line edges and holds
    #[derive(Clone, Default)]
    pub struct PulseLog {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl PulseLog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        /// Sum of every hold, with or without a line attached
        pub fn total_held(&self) -> Duration {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Hold(d) => Some(*d),
                    Event::Drive(_) => None,
                })
                .sum()
        }

        /// Collapse the log into (level, held-for) segments. Each drive
        /// starts a new segment, consecutive holds accumulate into it and
        /// segments with no hold are dropped.
        pub fn segments(&self) -> Vec<(Level, Duration)> {
            let mut segments: Vec<(Level, Duration)> = Vec::new();
            let mut current: Option<(Level, Duration)> = None;
            for event in self.events.borrow().iter() {
                match *event {
                    Event::Drive(level) => {
                        if let Some(seg) = current.take() {
                            segments.push(seg);
                        }
                        current = Some((level, Duration::ZERO));
                    }
                    Event::Hold(d) => {
                        if let Some((_, held)) = current.as_mut() {
                            *held += d;
                        }
                    }
                }
            }
            segments.extend(current);
            segments.retain(|(_, held)| !held.is_zero());
            segments
        }
    }

    /// Output line that records every drive
    pub struct RecordingLine {
        log: PulseLog,
        level: Cell<Level>,
        fail_after: Option<usize>,
        drives: Cell<usize>,
    }

    impl RecordingLine {
        pub fn new(log: PulseLog) -> Self {
            Self {
                log,
                level: Cell::new(Level::Low),
                fail_after: None,
                drives: Cell::new(0),
            }
        }

        /// Line that reports a GPIO fault on every drive after the first `n`
        /// (the level is still recorded, the fault is only reported)
        pub fn failing_after(log: PulseLog, n: usize) -> Self {
            Self {
                fail_after: Some(n),
                ..Self::new(log)
            }
        }

        pub fn level(&self) -> Level {
            self.level.get()
        }

        pub fn is_active(&self) -> bool {
            self.level.get() == Level::High
        }

        fn drive(&mut self, level: Level) -> Result<(), HalError> {
            self.level.set(level);
            self.log.push(Event::Drive(level));
            let n = self.drives.get() + 1;
            self.drives.set(n);
            match self.fail_after {
                Some(limit) if n > limit => Err(HalError::GpioError),
                _ => Ok(()),
            }
        }
    }

    impl OutputLine for RecordingLine {
        type Error = HalError;

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.drive(Level::High)
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.drive(Level::Low)
        }
    }

    /// Delay provider that returns immediately and records the request
    pub struct RecordingDelay {
        log: PulseLog,
    }

    impl RecordingDelay {
        pub fn new(log: PulseLog) -> Self {
            Self { log }
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.push(Event::Hold(Duration::from_nanos(ns as u64)));
        }
    }

    /// Cancellation token that fires after being polled `n` times
    pub struct CancelAfter {
        remaining: Cell<u32>,
    }

    impl CancelAfter {
        pub fn new(polls: u32) -> Self {
            Self {
                remaining: Cell::new(polls),
            }
        }
    }

    impl CancelToken for CancelAfter {
        fn is_cancelled(&self) -> bool {
            match self.remaining.get() {
                0 => true,
                n => {
                    self.remaining.set(n - 1);
                    false
                }
            }
        }
    }
}
