use crate::colour::Colour;
use crate::config::PatternConfig;
use crate::state::TickState;

/// Square wave: on colour for `period * duty / 100`, off colour for the rest
pub(super) fn render(params: &PatternConfig, state: &mut TickState, frame: &mut [Colour]) {
    let period = params.period.as_millis();

    if state.counter_ms >= period {
        state.counter_ms = 0;
    }

    let on_time = period * u64::from(params.duty_cycle_percent) / 100;
    let colour = if state.counter_ms < on_time {
        params.colour_on
    } else {
        params.colour_off
    };

    super::fill(frame, colour);
}
