use crate::colour::Colour;
use crate::config::PatternConfig;
use crate::state::TickState;

/// Blink with the on-time pinned at half the period
pub(super) fn render(params: &PatternConfig, state: &mut TickState, frame: &mut [Colour]) {
    let period = params.period.as_millis();

    if state.counter_ms >= period {
        state.counter_ms = 0;
    }

    let colour = if state.counter_ms < period / 2 {
        params.colour_on
    } else {
        params.colour_off
    };

    super::fill(frame, colour);
}
