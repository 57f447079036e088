use crate::colour::Colour;
use crate::config::{Direction, PatternConfig};
use crate::state::TickState;

/// A lit segment travelling along the strip
///
/// `progress` runs over `num_leds + length` positions per lap so the segment
/// fully exits one end before re-entering at the other. The period covers a
/// whole lap; each position change resets the tick counter.
pub(super) fn render(params: &PatternConfig, state: &mut TickState, frame: &mut [Colour]) {
    #[allow(clippy::cast_possible_truncation)]
    let num_leds = frame.len() as u32;
    let length = params.snake_length;
    let progress_max = num_leds + length;

    let increment_period = params.period.as_millis() / u64::from(progress_max);

    if state.counter_ms >= increment_period {
        state.counter_ms = 0;
        state.progress += 1;
        if state.progress >= progress_max {
            state.progress = 0;
        }
    }

    // Half-open window of lit LEDs; indices past the strip end fall outside
    // the frame and simply stay dark
    let (start, end) = match params.snake_direction {
        Direction::Forward => (state.progress.saturating_sub(length), state.progress),
        Direction::Reverse => {
            // Saturation covers stale positions left by another pattern
            let end = progress_max.saturating_sub(state.progress);
            (end.saturating_sub(length), end)
        }
    };

    for (i, led) in frame.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let i = i as u32;
        *led = if i >= start && i < end {
            params.colour_on
        } else {
            params.colour_off
        };
    }
}
