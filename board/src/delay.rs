use core::hint;
use core::time::Duration;

use game_core::Delay;

use crate::error::{Error, Result};

/// Spin-loop delay calibrated in loop iterations per millisecond.
///
/// The calibration depends on the core clock and the memory the loop runs
/// from; measure it again on any other hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyWait {
    iterations_per_ms: u32,
}

impl BusyWait {
    pub const DEFAULT_ITERATIONS_PER_MS: u32 = 1000;

    pub fn new(iterations_per_ms: u32) -> Result<Self> {
        if iterations_per_ms == 0 {
            return Err(Error::ZeroCalibration);
        }
        Ok(Self { iterations_per_ms })
    }

    pub fn iterations_per_ms(&self) -> u32 {
        self.iterations_per_ms
    }

    /// Loop count for `duration`, saturating on overflow
    pub fn iterations_for(&self, duration: Duration) -> u64 {
        let iterations = duration.as_micros() * u128::from(self.iterations_per_ms) / 1000;
        u64::try_from(iterations).unwrap_or(u64::MAX)
    }
}

impl Default for BusyWait {
    fn default() -> Self {
        Self {
            iterations_per_ms: Self::DEFAULT_ITERATIONS_PER_MS,
        }
    }
}

impl Delay for BusyWait {
    fn delay(&mut self, duration: Duration) {
        for i in 0..self.iterations_for(duration) {
            // Keep the loop from being optimised away
            hint::black_box(i);
            hint::spin_loop();
        }
    }
}
