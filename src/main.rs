#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod ticker;

use core::convert::Infallible;

#[cfg(target_os = "none")]
use panic_halt as _;

#[cfg(target_os = "none")]
#[cortex_m_rt::entry]
fn main() -> ! {
    use embedded_hal::digital::{OutputPin, PinState};
    use ledchaser::{
        button::{self, ButtonTask, Direction},
        channel::Channel,
        config::Config,
        led::LedTask,
    };
    use microbit::board::Board;
    use ticker::Ticker;

    rtt_target::rtt_init_log!();
    let mut board = Board::take().unwrap();
    Ticker::init(board.RTC0, &mut board.NVIC);
    let (col, mut row) = board.display_pins.degrade();
    row[0].set_high().ok();

    // Row 0 is driven high, so a column LED lights while its column is low.
    let config = Config::builder()
        .lit_state(PinState::Low)
        .build()
        .unwrap_or_else(|err| {
            log::error!("invalid config ({err}), using defaults");
            Config::default()
        });
    let buttons = button::with_default_mapping([
        board.buttons.button_a.degrade(),
        board.buttons.button_b.degrade(),
    ]);

    let ticker = Ticker;
    let channel: Channel<Direction> = Channel::new();
    let mut led_task = infallible(LedTask::new(col, channel.get_receiver(), &ticker, &config));
    let mut button_task = ButtonTask::new(buttons, channel.get_sender(), &ticker, &config);
    log::info!("ready");

    loop {
        infallible(led_task.poll());
        infallible(button_task.poll());
    }
}

/// Runs the reference ten-indicator setup on a virtual clock and logs every
/// frame: button 0 is pressed once, then button 1.
#[cfg(not(target_os = "none"))]
fn main() {
    use ledchaser::{
        button::{self, ButtonTask},
        channel::Channel,
        config::Config,
        led::LedTask,
        sim::{ButtonBank, LedBank, VirtualClock},
        time::TickDuration,
    };

    /// (time in ms, button, pressed)
    const SCRIPT: [(u32, usize, bool); 4] = [
        (100, 0, true),
        (300, 0, false),
        (2_000, 1, true),
        (2_100, 1, false),
    ];
    const RUN_MS: u32 = 4_000;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = VirtualClock::new();
    let leds = LedBank::<10>::new();
    let buttons = ButtonBank::<2>::new();
    let config = Config::default();
    let channel = Channel::new();

    let mut led_task = infallible(LedTask::new(
        leds.pins(),
        channel.get_receiver(),
        &clock,
        &config,
    ));
    let mut button_task = ButtonTask::new(
        button::with_default_mapping(buttons.pins()),
        channel.get_sender(),
        &clock,
        &config,
    );

    let mut shown = leds.levels();
    for ms in 0..RUN_MS {
        for &(at, index, pressed) in &SCRIPT {
            if at == ms {
                if pressed {
                    buttons.press(index);
                } else {
                    buttons.release(index);
                }
            }
        }

        infallible(led_task.poll());
        infallible(button_task.poll());

        let levels = leds.levels();
        if levels != shown {
            let frame: String = levels.iter().map(|&on| if on { '#' } else { '.' }).collect();
            log::info!("{ms:>5} ms  {frame}");
            shown = levels;
        }
        clock.advance(TickDuration::millis(1));
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
