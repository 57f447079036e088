use crate::OutputDriver;
use crate::channel::UpdateReceiver;
use crate::colour::{self, Colour};
use crate::config::{PatternConfig, StripConfig};
use crate::pattern;
use crate::state::TickState;

/// Strip driver - renders the active pattern once per tick
///
/// Owns the strip description, the active parameter set and the output
/// transport. `MAX_LEDS` bounds the internal frame; the configured LED count
/// may be anything up to it. `UPDATE_QUEUE` is the capacity of the pending
/// reconfiguration queue drained at each tick boundary.
pub struct StripDriver<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE: usize> {
    strip: StripConfig,
    output: O,
    params: PatternConfig,
    updates: UpdateReceiver<'a, UPDATE_QUEUE>,
    frame: [Colour; MAX_LEDS],
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE: usize>
    StripDriver<'a, O, MAX_LEDS, UPDATE_QUEUE>
{
    /// Create a driver for the given strip
    ///
    /// Panics if the configured LED count is zero or exceeds `MAX_LEDS`;
    /// the count is fixed at configuration time and a bad value is a wiring
    /// mistake, not a runtime condition.
    pub fn new(strip: StripConfig, output: O, updates: UpdateReceiver<'a, UPDATE_QUEUE>) -> Self {
        assert!(strip.num_leds > 0 && strip.num_leds <= MAX_LEDS);
        assert!(strip.resolution.as_millis() > 0);

        Self {
            strip,
            output,
            params: PatternConfig::new(strip.num_leds),
            updates,
            frame: [colour::BLACK; MAX_LEDS],
        }
    }

    /// Render one tick
    ///
    /// Applies pending reconfigurations, runs the active pattern formula into
    /// the frame, serialises it into `bytes` in the configured channel order,
    /// hands the slice to the output, then advances the elapsed counter by
    /// one resolution. `bytes` must hold at least `num_leds * 3` bytes.
    pub fn tick(&mut self, state: &mut TickState, bytes: &mut [u8]) {
        while let Some(update) = self.updates.try_receive() {
            self.params = update;
        }

        let num_leds = self.strip.num_leds;
        assert!(bytes.len() >= num_leds * 3);

        let frame = &mut self.frame[..num_leds];
        pattern::render(&self.strip, &self.params, state, frame);

        for (led, slot) in frame.iter().zip(bytes.chunks_exact_mut(3)) {
            slot.copy_from_slice(&self.strip.channel_order.bytes(*led));
        }

        self.output.write(&bytes[..num_leds * 3]);

        state.counter_ms += self.strip.resolution.as_millis();
    }

    /// The strip description this driver was built with
    pub const fn strip(&self) -> &StripConfig {
        &self.strip
    }

    /// Direct access to the active parameter set
    ///
    /// For wiring code that sets the power-up pattern before the tick source
    /// starts. Once ticks are running, reconfigure through the update channel
    /// instead so a render never sees a half-written set.
    pub fn params_mut(&mut self) -> &mut PatternConfig {
        &mut self.params
    }

    /// The output transport
    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
