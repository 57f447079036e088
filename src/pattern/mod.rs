//! Pattern formulas
//!
//! One module per pattern, selected from a single dispatch point. Every
//! formula fills the whole frame and owns its counter resets; the driver
//! advances `state.counter_ms` afterwards. Resets happen before the frame is
//! computed, so the reset and the first frame of the new cycle land in the
//! same tick.

mod blink;
mod gradient;
mod progress;
mod pulse;
mod snake;
mod solid;
mod strobe;
mod weather;

use crate::colour::Colour;
use crate::config::{Pattern, PatternConfig, StripConfig};
use crate::state::TickState;

pub(crate) fn render(
    strip: &StripConfig,
    params: &PatternConfig,
    state: &mut TickState,
    frame: &mut [Colour],
) {
    match params.pattern {
        Pattern::Colour => solid::render(params, frame),
        Pattern::Blink => blink::render(params, state, frame),
        Pattern::Strobe => strobe::render(params, state, frame),
        Pattern::Pulse => pulse::render(strip, params, state, frame),
        Pattern::Gradient => gradient::render(params, frame),
        Pattern::Snake => snake::render(params, state, frame),
        Pattern::Progress => progress::render(params, state, frame),
        Pattern::Weather => weather::render(strip, params, state, frame),
    }
}

/// Fill the whole frame with one colour
fn fill(frame: &mut [Colour], colour: Colour) {
    for led in frame {
        *led = colour;
    }
}
