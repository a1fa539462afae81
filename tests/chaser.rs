use embedded_hal::digital::PinState;
use ledchaser::{
    button::{self, ButtonTask},
    channel::Channel,
    config::Config,
    led::LedTask,
    sim::{ButtonBank, LedBank, SimButton, SimLed, VirtualClock},
    time::TickDuration,
};

const N: usize = 10;

struct Rig<'a> {
    clock: &'a VirtualClock,
    leds: &'a LedBank<N>,
    buttons: &'a ButtonBank<2>,
    led_task: LedTask<'a, SimLed<'a>, VirtualClock, N>,
    button_task: ButtonTask<'a, SimButton<'a>, VirtualClock, 2>,
    /// Every distinct indicator frame seen, starting with the initial one.
    frames: Vec<[bool; N]>,
    sweeps_started: usize,
}

impl<'a> Rig<'a> {
    fn new(
        clock: &'a VirtualClock,
        leds: &'a LedBank<N>,
        buttons: &'a ButtonBank<2>,
        channel: &'a Channel<button::Direction>,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = Config::default();
        let led_task = LedTask::new(leds.pins(), channel.get_receiver(), clock, &config).unwrap();
        let button_task = ButtonTask::new(
            button::with_default_mapping(buttons.pins()),
            channel.get_sender(),
            clock,
            &config,
        );
        Self {
            clock,
            leds,
            buttons,
            led_task,
            button_task,
            frames: vec![leds.levels()],
            sweeps_started: 0,
        }
    }

    fn run_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            let was_idle = self.led_task.is_idle();
            self.button_task.poll().unwrap();
            self.led_task.poll().unwrap();
            if was_idle && !self.led_task.is_idle() {
                self.sweeps_started += 1;
            }
            let levels = self.leds.levels();
            if self.frames.last() != Some(&levels) {
                self.frames.push(levels);
            }
            self.clock.advance(TickDuration::millis(1));
        }
    }

    fn tap(&mut self, index: usize, hold_ms: u32) {
        self.buttons.press(index);
        self.run_ms(hold_ms);
        self.buttons.release(index);
    }

    fn lit(&self) -> Vec<usize> {
        self.leds.matching(PinState::High).collect()
    }
}

fn lit(frame: &[bool; N]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter_map(|(index, &on)| on.then_some(index))
        .collect()
}

#[test]
fn no_presses_leave_indicators_dark() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut rig = Rig::new(&clock, &leds, &buttons, &channel);

    rig.run_ms(10_000);

    assert_eq!(rig.frames.len(), 1);
    assert!(rig.lit().is_empty());
    assert_eq!(rig.sweeps_started, 0);
}

#[test]
fn button_zero_runs_forward_sweep() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut rig = Rig::new(&clock, &leds, &buttons, &channel);

    rig.tap(0, 150);
    rig.run_ms(2_000);

    let shown: Vec<Vec<usize>> = rig.frames.iter().map(lit).collect();
    let mut expected = vec![vec![], vec![0], vec![0, 1]];
    expected.extend((1..N - 1).map(|first| vec![first, first + 1]));
    expected.push(vec![N - 1]);
    expected.push(vec![]);
    assert_eq!(shown, expected);
    assert_eq!(rig.sweeps_started, 1);
}

#[test]
fn button_one_runs_mirrored_sweep() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut forward = Rig::new(&clock, &leds, &buttons, &channel);
    forward.tap(0, 150);
    forward.run_ms(2_000);
    let forward_frames = forward.frames;

    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut reverse = Rig::new(&clock, &leds, &buttons, &channel);
    reverse.tap(1, 150);
    reverse.run_ms(2_000);

    assert_eq!(reverse.frames.len(), forward_frames.len());
    for (rev, fwd) in reverse.frames.iter().zip(&forward_frames) {
        let mirrored: Vec<bool> = fwd.iter().rev().copied().collect();
        assert_eq!(rev.as_slice(), mirrored.as_slice());
    }
    assert!(reverse.lit().is_empty());
}

#[test]
fn long_hold_fires_one_sweep() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut rig = Rig::new(&clock, &leds, &buttons, &channel);

    rig.tap(1, 5_000);
    rig.run_ms(3_000);

    assert_eq!(rig.sweeps_started, 1);
    assert!(rig.lit().is_empty());
}

#[test]
fn presses_during_a_sweep_collapse_to_the_latest() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut rig = Rig::new(&clock, &leds, &buttons, &channel);

    // Forward sweep takes 12 steps of 130 ms; both taps land inside it.
    rig.tap(0, 100);
    rig.run_ms(100);
    rig.tap(1, 100);
    rig.run_ms(100);
    rig.tap(0, 100);
    assert_eq!(rig.sweeps_started, 1);

    rig.run_ms(5_000);
    assert_eq!(rig.sweeps_started, 2);

    // The second sweep went forward: index 0 lit alone right after a dark frame.
    let starts: Vec<usize> = rig
        .frames
        .windows(2)
        .filter(|pair| lit(&pair[0]).is_empty() && !lit(&pair[1]).is_empty())
        .map(|pair| lit(&pair[1])[0])
        .collect();
    assert_eq!(starts, [0, 0]);
    assert!(rig.lit().is_empty());
}

#[test]
fn bounce_shorter_than_debounce_is_ignored() {
    let (clock, leds, buttons, channel) =
        (VirtualClock::new(), LedBank::new(), ButtonBank::new(), Channel::new());
    let mut rig = Rig::new(&clock, &leds, &buttons, &channel);

    for _ in 0..20 {
        rig.tap(0, 5);
        rig.run_ms(37);
    }
    rig.run_ms(500);

    assert_eq!(rig.sweeps_started, 0);
    assert!(rig.lit().is_empty());
}
