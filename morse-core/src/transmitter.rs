//! Signal transmitter: renders a serialized Morse string as timed pulses

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use crate::error::MorseError;
use crate::hal::{DelayNs, HalError, NullLine, OutputLine};
use crate::logging::{morse_debug, morse_info, morse_warn};
use crate::types::{Element, Level, Pulse, TranslatorConfig};

/// Lets a caller abort a running transmission
pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

impl CancelToken for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancelToken + ?Sized> CancelToken for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Token that never fires
#[derive(Copy, Clone, Debug, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Pulse sequence for a serialized Morse string, one character at a time:
/// `-` is high 3 / low 1, `.` is high 1 / low 1, anything else is low 2
pub fn pulses(morse: &str) -> impl Iterator<Item = Pulse> + '_ {
    morse.chars().flat_map(|c| {
        let element = Element::from_char(c);
        let on = element
            .is_keyed()
            .then(|| Pulse::high(element.on_units()));
        on.into_iter().chain(core::iter::once(Pulse::low(element.off_units())))
    })
}

/// Scheduled length of a Morse string in tempo units
pub fn total_units(morse: &str) -> u64 {
    morse
        .chars()
        .map(|c| Element::from_char(c).duration_units() as u64)
        .sum()
}

/// Scheduled length of a Morse string for the given tempo unit
pub fn duration(morse: &str, tempo: Duration) -> Duration {
    let units = total_units(morse);
    Duration::from_nanos((tempo.as_nanos() as u64).saturating_mul(units))
}

/// Summary of a completed transmission
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransmitReport {
    /// Pulses rendered
    pub pulses: usize,
    /// Scheduled time spent holding levels
    pub elapsed: Duration,
}

/// Forces the line low when dropped, so no exit path leaves it keyed
struct LowGuard<'a, L: OutputLine> {
    line: &'a mut L,
    armed: bool,
}

impl<'a, L: OutputLine> LowGuard<'a, L> {
    fn new(line: &'a mut L) -> Self {
        Self { line, armed: true }
    }

    fn drive(&mut self, level: Level) -> Result<(), HalError> {
        self.line.set_level(level).map_err(Into::into)
    }

    /// Drive low and disarm, reporting the result
    fn release(mut self) -> Result<(), HalError> {
        self.armed = false;
        self.line.set_low().map_err(Into::into)
    }
}

impl<L: OutputLine> Drop for LowGuard<'_, L> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.line.set_low();
        }
    }
}

/// Blocking transmitter driving an [`OutputLine`] through a delay provider
pub struct Transmitter<D> {
    delay: D,
    config: TranslatorConfig,
}

impl<D: DelayNs> Transmitter<D> {
    /// Create a transmitter, rejecting configurations that fail validation
    pub fn new(delay: D, config: TranslatorConfig) -> Result<Self, MorseError> {
        config.validate()?;
        Ok(Self { delay, config })
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Replace the configuration; the old one stays in place on error
    pub fn set_config(&mut self, config: TranslatorConfig) -> Result<(), MorseError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Give the delay provider back
    pub fn release(self) -> D {
        self.delay
    }

    /// Transmit without cancellation. With `line` absent the full timing
    /// sequence still runs, without any output.
    pub fn transmit<L: OutputLine>(
        &mut self,
        morse: &str,
        line: Option<&mut L>,
    ) -> Result<TransmitReport, MorseError> {
        self.transmit_with(morse, line, &NeverCancel)
    }

    /// Run the timing sequence with no output line
    pub fn dry_run(&mut self, morse: &str) -> Result<TransmitReport, MorseError> {
        self.transmit::<NullLine>(morse, None)
    }

    /// Transmit, polling `cancel` between hold slices.
    ///
    /// The line is low on every return. An output fault does not stop the
    /// timing loop; it is reported once the sequence has finished. A
    /// cancellation is reported in preference to a fault.
    pub fn transmit_with<L, C>(
        &mut self,
        morse: &str,
        line: Option<&mut L>,
        cancel: &C,
    ) -> Result<TransmitReport, MorseError>
    where
        L: OutputLine,
        C: CancelToken + ?Sized,
    {
        let mut guard = line.map(LowGuard::new);

        if let Some(limit) = self.config.timeout {
            if duration(morse, self.config.tempo) > limit {
                let limit_ms = limit.as_millis() as u64;
                morse_warn!("transmission refused, exceeds {} ms", limit_ms);
                if let Some(guard) = guard {
                    let _ = guard.release();
                }
                return Err(MorseError::TimedOut { limit_ms });
            }
        }

        morse_debug!(
            "transmitting {} units at {} ms/unit",
            total_units(morse),
            self.config.tempo.as_millis() as u64
        );

        let mut fault: Option<HalError> = None;
        let outcome = self.run(morse, guard.as_mut(), cancel, &mut fault);
        let released = match guard {
            Some(guard) => guard.release(),
            None => Ok(()),
        };

        let report = outcome?;
        if let Some(e) = fault.or(released.err()) {
            morse_warn!("output line fault during transmission");
            return Err(MorseError::OutputFault(e));
        }
        morse_debug!("transmission complete, {} pulses", report.pulses);
        Ok(report)
    }

    fn run<L, C>(
        &mut self,
        morse: &str,
        mut guard: Option<&mut LowGuard<'_, L>>,
        cancel: &C,
        fault: &mut Option<HalError>,
    ) -> Result<TransmitReport, MorseError>
    where
        L: OutputLine,
        C: CancelToken + ?Sized,
    {
        let tempo = self.config.tempo;
        let mut report = TransmitReport {
            pulses: 0,
            elapsed: Duration::ZERO,
        };

        for pulse in pulses(morse) {
            if let Some(guard) = guard.as_mut() {
                if let Err(e) = guard.drive(pulse.level) {
                    if fault.is_none() {
                        morse_warn!("output line fault at pulse {}", report.pulses);
                    }
                    fault.get_or_insert(e);
                }
            }
            let hold = pulse.duration(tempo);
            self.hold(hold, cancel)?;
            report.elapsed += hold;
            report.pulses += 1;
        }
        Ok(report)
    }

    /// Hold the current level, in slices no longer than the poll interval
    fn hold<C: CancelToken + ?Sized>(
        &mut self,
        duration: Duration,
        cancel: &C,
    ) -> Result<(), MorseError> {
        let mut remaining = duration;
        while !remaining.is_zero() {
            if cancel.is_cancelled() {
                morse_info!("transmission cancelled");
                return Err(MorseError::Cancelled);
            }
            let slice = remaining.min(self.config.poll_interval);
            self.delay.delay_us(slice.as_micros() as u32);
            remaining -= slice;
        }
        Ok(())
    }
}
