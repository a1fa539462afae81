//! Two-button light chaser.
//!
//! A [`ButtonTask`](button::ButtonTask) scans the buttons and hands the
//! requested [`Direction`](button::Direction) over a single-slot
//! [`Channel`](channel::Channel) to a [`LedTask`](led::LedTask), which plays a
//! short light trail across the indicators in that direction. Both tasks are
//! plain state machines advanced by `poll()` from one scheduler loop, and read
//! time through a [`Clock`](time::Clock) so they run the same on the board and
//! on a [`VirtualClock`](sim::VirtualClock).
#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod channel;
pub mod config;
pub mod error;
pub mod led;
pub mod sim;
pub mod sweep;
pub mod time;
