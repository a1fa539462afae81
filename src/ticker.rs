//! RTC0 backed [`Clock`] for the micro:bit.
//!
//! The RTC counter is 24 bits wide and wraps every 512 s at 32 768 Hz; the
//! overflow interrupt extends it to 64 bits.

use core::{
    cell::RefCell,
    sync::atomic::{AtomicU32, Ordering},
};

use critical_section::Mutex;
use ledchaser::time::{Clock, TickInstant};
use microbit::{
    hal::rtc::{Rtc, RtcInterrupt},
    pac::{interrupt, NVIC, RTC0},
};

static RTC: Mutex<RefCell<Option<Rtc<RTC0>>>> = Mutex::new(RefCell::new(None));
static OVERFLOWS: AtomicU32 = AtomicU32::new(0);

pub struct Ticker;

impl Ticker {
    pub fn init(rtc0: RTC0, nvic: &mut NVIC) {
        let Ok(mut rtc) = Rtc::new(rtc0, 0) else {
            log::error!("RTC0 rejected prescaler");
            return;
        };
        rtc.enable_counter();
        rtc.enable_event(RtcInterrupt::Overflow);
        rtc.enable_interrupt(RtcInterrupt::Overflow, Some(nvic));
        critical_section::with(|cs| RTC.replace(cs, Some(rtc)));
    }
}

impl Clock for Ticker {
    fn now(&self) -> TickInstant {
        loop {
            let overflows = OVERFLOWS.load(Ordering::SeqCst);
            let counter = critical_section::with(|cs| {
                RTC.borrow_ref(cs)
                    .as_ref()
                    .map_or(0, |rtc| rtc.get_counter())
            });
            // An overflow in between means the counter may belong to either count.
            if OVERFLOWS.load(Ordering::SeqCst) == overflows {
                return TickInstant::from_ticks(((overflows as u64) << 24) | counter as u64);
            }
        }
    }
}

#[interrupt]
fn RTC0() {
    critical_section::with(|cs| {
        if let Some(rtc) = RTC.borrow_ref(cs).as_ref() {
            if rtc.is_event_triggered(RtcInterrupt::Overflow) {
                rtc.reset_event(RtcInterrupt::Overflow);
                OVERFLOWS.fetch_add(1, Ordering::SeqCst);
            }
        }
    });
}
