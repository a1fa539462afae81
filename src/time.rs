//! Tick based time keeping for the cooperative tasks.
//!
//! Nothing in the core ever sleeps. A task that has to wait creates a [`Timer`]
//! and checks it on its next poll, so the clock behind it can be the board RTC
//! or a [`VirtualClock`](crate::sim::VirtualClock) that tests advance by hand.

use fugit::{Duration, Instant};

/// Rate of the nRF52 RTC counter with a zero prescaler.
pub const TICK_HZ: u32 = 32_768;

pub type TickInstant = Instant<u64, 1, TICK_HZ>;
pub type TickDuration = Duration<u64, 1, TICK_HZ>;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> TickInstant;
}

pub struct Timer<'a, C: Clock> {
    end_time: TickInstant,
    clock: &'a C,
}

impl<'a, C: Clock> Timer<'a, C> {
    pub fn new(duration: TickDuration, clock: &'a C) -> Self {
        Self {
            end_time: clock.now() + duration,
            clock,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.clock.now() >= self.end_time
    }
}
