use crate::colour::Colour;
use crate::config::{Direction, PatternConfig};
use crate::state::TickState;

/// A completion bar growing from `initial_value` toward `final_value`
///
/// While short of the target, the bar grows by `increment` LEDs every
/// `increment_delay`. Once the target is reached the bar holds for
/// `increment_delay + reset_delay`, then restarts from `initial_value`.
/// The frame shows the bar as it was when the tick started; growth becomes
/// visible on the following tick. The target bounds the bar, not the strip
/// length; LEDs past the lit count always carry the off colour.
pub(super) fn render(params: &PatternConfig, state: &mut TickState, frame: &mut [Colour]) {
    let leds_on = (params.progress_initial + state.progress).min(params.progress_final);

    #[allow(clippy::cast_possible_truncation)]
    let lit = (leds_on as usize).min(frame.len());
    let first_lit = match params.progress_direction {
        Direction::Forward => 0,
        Direction::Reverse => frame.len() - lit,
    };

    for (i, led) in frame.iter_mut().enumerate() {
        *led = if i >= first_lit && i < first_lit + lit {
            params.colour_on
        } else {
            params.colour_off
        };
    }

    if params.progress_final > leds_on {
        if state.counter_ms >= params.progress_increment_delay.as_millis() {
            state.counter_ms = 0;
            state.progress += params.progress_increment;
        }
    } else {
        let hold =
            params.progress_increment_delay.as_millis() + params.progress_reset_delay.as_millis();
        if state.counter_ms >= hold {
            state.counter_ms = 0;
            state.progress = 0;
        }
    }
}
