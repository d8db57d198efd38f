//! Output line that reports key edges to the log instead of a GPIO pin

use std::time::Instant;

use log::debug;
use morse_core::{HalError, Level, OutputLine};

pub struct ConsoleLine {
    started: Instant,
    level: Level,
    edges: usize,
}

impl ConsoleLine {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            level: Level::Low,
            edges: 0,
        }
    }

    /// Level changes seen so far
    pub fn edges(&self) -> usize {
        self.edges
    }

    fn drive(&mut self, level: Level) {
        if level != self.level {
            self.edges += 1;
            debug!(
                "{:>8.1} ms  key {}",
                self.started.elapsed().as_secs_f64() * 1000.0,
                if level == Level::High { "down" } else { "up" }
            );
        }
        self.level = level;
    }
}

impl OutputLine for ConsoleLine {
    type Error = HalError;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::Low);
        Ok(())
    }
}
