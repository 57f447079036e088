//! Tick pacing for loop-driven embeddings
//!
//! Platforms with a hardware timer call [`StripDriver::tick`] straight from
//! the timer callback. Platforms that only have a main loop wrap the driver
//! in a [`TickScheduler`], which renders once per call and tells the caller
//! how long to sleep before the next tick.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::driver::StripDriver;
use crate::state::TickState;

/// Result of one scheduled tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Deadline for the next tick
    pub next_deadline: Instant,
    /// How long to wait before the next tick (zero when behind schedule)
    pub sleep_duration: Duration,
}

/// Paces driver ticks at the strip's resolution with drift correction
pub struct TickScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE: usize> {
    driver: StripDriver<'a, O, MAX_LEDS, UPDATE_QUEUE>,
    next_tick: Instant,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE: usize>
    TickScheduler<'a, O, MAX_LEDS, UPDATE_QUEUE>
{
    pub fn new(driver: StripDriver<'a, O, MAX_LEDS, UPDATE_QUEUE>) -> Self {
        Self {
            driver,
            next_tick: Instant::from_millis(0),
        }
    }

    /// Render one tick and compute the next deadline
    ///
    /// If the caller has fallen more than two resolutions behind, timing
    /// resets to `now` instead of replaying the backlog in a burst.
    pub fn tick(&mut self, now: Instant, state: &mut TickState, bytes: &mut [u8]) -> TickResult {
        let resolution = self.driver.strip().resolution;

        let max_drift = resolution.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        self.driver.tick(state, bytes);

        self.next_tick += resolution;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub fn driver(&self) -> &StripDriver<'a, O, MAX_LEDS, UPDATE_QUEUE> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut StripDriver<'a, O, MAX_LEDS, UPDATE_QUEUE> {
        &mut self.driver
    }
}
