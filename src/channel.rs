//! Single-slot hand-off between tasks running on the same scheduler loop.
//!
//! The slot holds at most one item. Sending never waits: a new item replaces
//! whatever the receiver has not picked up yet, so the receiver always acts on
//! the latest request instead of a backlog.

use core::cell::Cell;

pub struct Channel<T> {
    item: Cell<Option<T>>,
}

impl<T> Channel<T> {
    pub const fn new() -> Self {
        Self {
            item: Cell::new(None),
        }
    }

    pub fn get_sender(&self) -> Sender<'_, T> {
        Sender { channel: self }
    }

    /// Only one receiver may be in use at a time; a second one would race the
    /// first for every item.
    pub fn get_receiver(&self) -> Receiver<'_, T> {
        Receiver { channel: self }
    }

    fn send(&self, item: T) -> Option<T> {
        self.item.replace(Some(item))
    }

    fn receive(&self) -> Option<T> {
        self.item.take()
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Sender<'a, T> {
    channel: &'a Channel<T>,
}

impl<T> Sender<'_, T> {
    /// Stores `item`, returning the unconsumed item it displaced, if any.
    pub fn send(&self, item: T) -> Option<T> {
        self.channel.send(item)
    }
}

pub struct Receiver<'a, T> {
    channel: &'a Channel<T>,
}

impl<T> Receiver<'_, T> {
    /// Takes the pending item, leaving the slot empty.
    pub fn receive(&self) -> Option<T> {
        self.channel.receive()
    }
}
