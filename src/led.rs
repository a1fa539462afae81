use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, info};

use crate::{
    button::Direction,
    channel::Receiver,
    config::Config,
    sweep::{Step, Sweep},
    time::{Clock, TickDuration, Timer},
};

enum LedState<'a, C: Clock> {
    Idle,
    Running { sweep: Sweep, timer: Timer<'a, C> },
}

/// Plays one sweep per received [`Direction`] across `N` indicators.
///
/// Directions are only taken from the channel while idle; anything sent during
/// a sweep waits in the channel (or gets replaced) until the sweep is done.
pub struct LedTask<'a, P, C: Clock, const N: usize> {
    leds: [P; N],
    clock: &'a C,
    receiver: Receiver<'a, Direction>,
    state: LedState<'a, C>,
    step_delay: TickDuration,
    trail_length: usize,
    lit_state: PinState,
    dark_state: PinState,
}

impl<'a, P: OutputPin, C: Clock, const N: usize> LedTask<'a, P, C, N> {
    /// Takes the indicator pins and switches all of them off.
    pub fn new(
        mut leds: [P; N],
        receiver: Receiver<'a, Direction>,
        clock: &'a C,
        config: &Config,
    ) -> Result<Self, P::Error> {
        let lit_state = config.lit_state();
        let dark_state = match lit_state {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        };
        for led in &mut leds {
            led.set_state(dark_state)?;
        }
        Ok(Self {
            leds,
            clock,
            receiver,
            state: LedState::Idle,
            step_delay: config.step_delay(),
            trail_length: config.trail_length(),
            lit_state,
            dark_state,
        })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, LedState::Idle)
    }

    pub fn poll(&mut self) -> Result<(), P::Error> {
        let step = match &mut self.state {
            LedState::Idle => {
                let Some(direction) = self.receiver.receive() else {
                    return Ok(());
                };
                info!("{direction:?} sweep");
                let mut sweep = Sweep::new(direction, N, self.trail_length);
                let step = sweep.next();
                self.state = LedState::Running {
                    sweep,
                    timer: Timer::new(self.step_delay, self.clock),
                };
                step
            }
            LedState::Running { sweep, timer } => {
                if !timer.is_ready() {
                    return Ok(());
                }
                match sweep.next() {
                    Some(step) => {
                        *timer = Timer::new(self.step_delay, self.clock);
                        Some(step)
                    }
                    None => {
                        debug!("{:?} sweep done", sweep.direction());
                        self.state = LedState::Idle;
                        return Ok(());
                    }
                }
            }
        };
        if let Some(step) = step {
            self.apply(step)?;
        }
        Ok(())
    }

    fn apply(&mut self, step: Step) -> Result<(), P::Error> {
        if let Some(index) = step.light {
            self.leds[index].set_state(self.lit_state)?;
        }
        if let Some(index) = step.extinguish {
            self.leds[index].set_state(self.dark_state)?;
        }
        Ok(())
    }
}
