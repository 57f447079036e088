//! Bounded pattern-update queue
//!
//! Commands publish complete [`PatternConfig`] values here; the driver drains
//! the queue at the start of each tick and swaps the active set wholesale.
//! A render therefore never observes a half-updated parameter set, even when
//! the sender runs on another execution context. Synchronisation is a
//! critical section around a fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::config::PatternConfig;

/// Error returned when publishing to a full queue; carries the rejected set
#[derive(Debug, Clone, Copy)]
pub struct UpdateQueueFull(pub PatternConfig);

/// A bounded queue of pending pattern reconfigurations
pub struct UpdateChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<PatternConfig, SIZE>>>,
}

impl<const SIZE: usize> UpdateChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the command layer
    pub const fn sender(&self) -> UpdateSender<'_, SIZE> {
        UpdateSender { channel: self }
    }

    /// Get the receiver handle for the driver
    pub const fn receiver(&self) -> UpdateReceiver<'_, SIZE> {
        UpdateReceiver { channel: self }
    }

    fn try_send(&self, update: PatternConfig) -> Result<(), UpdateQueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(update).map_err(UpdateQueueFull)
        })
    }

    fn try_receive(&self) -> Option<PatternConfig> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for UpdateChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for an [`UpdateChannel`]
#[derive(Clone, Copy)]
pub struct UpdateSender<'a, const SIZE: usize> {
    channel: &'a UpdateChannel<SIZE>,
}

impl<const SIZE: usize> UpdateSender<'_, SIZE> {
    /// Queue a complete parameter set for the driver's next tick
    pub fn try_send(&self, update: PatternConfig) -> Result<(), UpdateQueueFull> {
        self.channel.try_send(update)
    }
}

/// Receiver handle for an [`UpdateChannel`]
#[derive(Clone, Copy)]
pub struct UpdateReceiver<'a, const SIZE: usize> {
    channel: &'a UpdateChannel<SIZE>,
}

impl<const SIZE: usize> UpdateReceiver<'_, SIZE> {
    /// Take the next pending parameter set, if any
    pub fn try_receive(&self) -> Option<PatternConfig> {
        self.channel.try_receive()
    }
}
