//! In-memory board: a hand-driven clock plus output and input pins backed by
//! cells. Used by the host binary and by the tests.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

use crate::time::{Clock, TickDuration, TickInstant};

/// Clock that only moves when told to.
#[derive(Default)]
pub struct VirtualClock {
    ticks: Cell<u64>,
}

impl VirtualClock {
    pub const fn new() -> Self {
        Self {
            ticks: Cell::new(0),
        }
    }

    pub fn advance(&self, duration: TickDuration) {
        self.ticks.set(self.ticks.get() + duration.ticks());
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> TickInstant {
        TickInstant::from_ticks(self.ticks.get())
    }
}

/// `N` output lines, all starting LOW.
pub struct LedBank<const N: usize> {
    levels: [Cell<bool>; N],
}

impl<const N: usize> LedBank<N> {
    pub fn new() -> Self {
        Self {
            levels: core::array::from_fn(|_| Cell::new(false)),
        }
    }

    pub fn pins(&self) -> [SimLed<'_>; N] {
        core::array::from_fn(|index| SimLed {
            level: &self.levels[index],
        })
    }

    /// Indices currently driven to `state`.
    pub fn matching(&self, state: PinState) -> impl Iterator<Item = usize> + '_ {
        let high = state == PinState::High;
        (0..N).filter(move |&index| self.levels[index].get() == high)
    }

    pub fn levels(&self) -> [bool; N] {
        core::array::from_fn(|index| self.levels[index].get())
    }
}

impl<const N: usize> Default for LedBank<N> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SimLed<'a> {
    level: &'a Cell<bool>,
}

impl ErrorType for SimLed<'_> {
    type Error = Infallible;
}

impl OutputPin for SimLed<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// `M` push-buttons wired active-low: idle HIGH, LOW while pressed.
pub struct ButtonBank<const M: usize> {
    levels: [Cell<bool>; M],
}

impl<const M: usize> ButtonBank<M> {
    pub fn new() -> Self {
        Self {
            levels: core::array::from_fn(|_| Cell::new(true)),
        }
    }

    pub fn pins(&self) -> [SimButton<'_>; M] {
        core::array::from_fn(|index| SimButton {
            level: &self.levels[index],
        })
    }

    pub fn press(&self, index: usize) {
        self.levels[index].set(false);
    }

    pub fn release(&self, index: usize) {
        self.levels[index].set(true);
    }

    /// Drive the raw line level, for wiring where pressed is HIGH.
    pub fn set_level(&self, index: usize, state: PinState) {
        self.levels[index].set(state == PinState::High);
    }
}

impl<const M: usize> Default for ButtonBank<M> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SimButton<'a> {
    level: &'a Cell<bool>,
}

impl ErrorType for SimButton<'_> {
    type Error = Infallible;
}

impl InputPin for SimButton<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}
