//! Timing and wiring parameters shared by both tasks.
//!
//! The indicator and button lists themselves are not part of [`Config`]: they
//! are handed to the tasks as arrays, so their lengths are the array lengths.

use embedded_hal::digital::PinState;

use crate::error::ConfigError;
use crate::time::TickDuration;

pub const DEFAULT_DEBOUNCE: TickDuration = TickDuration::millis(20);
pub const DEFAULT_RELEASE_POLL: TickDuration = TickDuration::millis(10);
pub const DEFAULT_SCAN_INTERVAL: TickDuration = TickDuration::millis(50);
pub const DEFAULT_STEP_DELAY: TickDuration = TickDuration::millis(130);
pub const DEFAULT_TRAIL_LENGTH: usize = 2;

/// Validated configuration. Build one with [`Config::builder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    debounce: TickDuration,
    release_poll: TickDuration,
    scan_interval: TickDuration,
    step_delay: TickDuration,
    trail_length: usize,
    pressed_state: PinState,
    lit_state: PinState,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Wait between first seeing a press and confirming it.
    pub fn debounce(&self) -> TickDuration {
        self.debounce
    }

    /// Re-check interval while waiting for a confirmed button to be released.
    pub fn release_poll(&self) -> TickDuration {
        self.release_poll
    }

    /// Rest between two full scans of the buttons.
    pub fn scan_interval(&self) -> TickDuration {
        self.scan_interval
    }

    /// Time each sweep step is held.
    pub fn step_delay(&self) -> TickDuration {
        self.step_delay
    }

    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    /// Input level that means "pressed".
    ///
    /// Inputs must idle at the opposite level (pull resistor on the line);
    /// a floating input can fire spuriously.
    pub fn pressed_state(&self) -> PinState {
        self.pressed_state
    }

    /// Output level that turns an indicator on.
    pub fn lit_state(&self) -> PinState {
        self.lit_state
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            release_poll: DEFAULT_RELEASE_POLL,
            scan_interval: DEFAULT_SCAN_INTERVAL,
            step_delay: DEFAULT_STEP_DELAY,
            trail_length: DEFAULT_TRAIL_LENGTH,
            pressed_state: PinState::Low,
            lit_state: PinState::High,
        }
    }
}

/// Builder for [`Config`], starting from the defaults.
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn debounce(mut self, debounce: TickDuration) -> Self {
        self.config.debounce = debounce;
        self
    }

    pub fn release_poll(mut self, release_poll: TickDuration) -> Self {
        self.config.release_poll = release_poll;
        self
    }

    pub fn scan_interval(mut self, scan_interval: TickDuration) -> Self {
        self.config.scan_interval = scan_interval;
        self
    }

    pub fn step_delay(mut self, step_delay: TickDuration) -> Self {
        self.config.step_delay = step_delay;
        self
    }

    pub fn trail_length(mut self, trail_length: usize) -> Self {
        self.config.trail_length = trail_length;
        self
    }

    pub fn pressed_state(mut self, pressed_state: PinState) -> Self {
        self.config.pressed_state = pressed_state;
        self
    }

    pub fn lit_state(mut self, lit_state: PinState) -> Self {
        self.config.lit_state = lit_state;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTrailLength`] if the trail length is 0.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.config.trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        Ok(self.config)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
