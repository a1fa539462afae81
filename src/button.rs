use embedded_hal::digital::{InputPin, PinState};
use log::{debug, trace};

use crate::{
    channel::Sender,
    config::Config,
    time::{Clock, TickDuration, Timer},
};

/// Sweep requested by a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Reference mapping: the first button runs forward, every other one reverse.
    pub fn for_button(index: usize) -> Self {
        if index == 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

/// One input line and the direction it requests.
pub struct Button<P> {
    pin: P,
    direction: Direction,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, direction: Direction) -> Self {
        Self { pin, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn is_pressed(&mut self, pressed_state: PinState) -> Result<bool, P::Error> {
        match pressed_state {
            PinState::Low => self.pin.is_low(),
            PinState::High => self.pin.is_high(),
        }
    }
}

/// Pairs each pin with [`Direction::for_button`] of its position.
pub fn with_default_mapping<P: InputPin, const M: usize>(pins: [P; M]) -> [Button<P>; M] {
    let mut index = 0;
    pins.map(|pin| {
        let button = Button::new(pin, Direction::for_button(index));
        index += 1;
        button
    })
}

enum SamplerState<'a, C: Clock> {
    /// Check button `n` and the ones after it.
    Scan(usize),
    Debounce(usize, Timer<'a, C>),
    /// Confirmed press; check whether the button is still held.
    Held(usize),
    HeldWait(usize, Timer<'a, C>),
    Rest(Timer<'a, C>),
}

/// Scans the buttons in order and sends one [`Direction`] per physical press.
///
/// A button that reads pressed is re-read after the debounce interval; if it
/// still reads pressed its direction is sent and the scan stays on that button
/// until it is released. The buttons after it are not looked at meanwhile, so
/// simultaneous presses are served in index order. After a full scan the task
/// rests for the scan interval.
pub struct ButtonTask<'a, P, C: Clock, const M: usize> {
    buttons: [Button<P>; M],
    clock: &'a C,
    sender: Sender<'a, Direction>,
    state: SamplerState<'a, C>,
    debounce: TickDuration,
    release_poll: TickDuration,
    scan_interval: TickDuration,
    pressed_state: PinState,
}

impl<'a, P: InputPin, C: Clock, const M: usize> ButtonTask<'a, P, C, M> {
    pub fn new(
        buttons: [Button<P>; M],
        sender: Sender<'a, Direction>,
        clock: &'a C,
        config: &Config,
    ) -> Self {
        Self {
            buttons,
            clock,
            sender,
            state: SamplerState::Scan(0),
            debounce: config.debounce(),
            release_poll: config.release_poll(),
            scan_interval: config.scan_interval(),
            pressed_state: config.pressed_state(),
        }
    }

    /// Advances the sampler until it has to wait.
    pub fn poll(&mut self) -> Result<(), P::Error> {
        loop {
            match self.state {
                SamplerState::Scan(index) => {
                    let Some(button) = self.buttons.get_mut(index) else {
                        self.state = SamplerState::Rest(Timer::new(self.scan_interval, self.clock));
                        return Ok(());
                    };
                    if button.is_pressed(self.pressed_state)? {
                        self.state =
                            SamplerState::Debounce(index, Timer::new(self.debounce, self.clock));
                        return Ok(());
                    }
                    self.state = SamplerState::Scan(index + 1);
                }
                SamplerState::Debounce(index, ref timer) => {
                    if !timer.is_ready() {
                        return Ok(());
                    }
                    let button = &mut self.buttons[index];
                    if button.is_pressed(self.pressed_state)? {
                        let direction = button.direction();
                        debug!("button {index} pressed, requesting {direction:?}");
                        if let Some(stale) = self.sender.send(direction) {
                            debug!("dropped unconsumed {stale:?}");
                        }
                        self.state = SamplerState::Held(index);
                    } else {
                        trace!("button {index} bounce ignored");
                        self.state = SamplerState::Scan(index + 1);
                    }
                }
                SamplerState::Held(index) => {
                    if self.buttons[index].is_pressed(self.pressed_state)? {
                        self.state =
                            SamplerState::HeldWait(index, Timer::new(self.release_poll, self.clock));
                        return Ok(());
                    }
                    self.state = SamplerState::Scan(index + 1);
                }
                SamplerState::HeldWait(index, ref timer) => {
                    if !timer.is_ready() {
                        return Ok(());
                    }
                    self.state = SamplerState::Held(index);
                }
                SamplerState::Rest(ref timer) => {
                    if !timer.is_ready() {
                        return Ok(());
                    }
                    self.state = SamplerState::Scan(0);
                }
            }
        }
    }
}
