use crate::colour::{Colour, fade_step};
use crate::config::{PatternConfig, StripConfig};
use crate::state::TickState;

/// Whole-strip linear crossfade between the two colours, back and forth
///
/// `duty_direction` +1 fades on-to-off, -1 the reverse. The final step of a
/// sweep forces the exact end colour so truncation drift never leaves the
/// strip one count short of the target.
pub(super) fn render(
    strip: &StripConfig,
    params: &PatternConfig,
    state: &mut TickState,
    frame: &mut [Colour],
) {
    let period = params.period.as_millis();
    let resolution = strip.resolution.as_millis();

    if state.counter_ms >= period {
        state.counter_ms = 0;
        state.duty_direction = -state.duty_direction;
    }

    let (start, end) = if state.duty_direction > 0 {
        (params.colour_on, params.colour_off)
    } else {
        (params.colour_off, params.colour_on)
    };

    let steps = (period / resolution).saturating_sub(1);
    let step = state.counter_ms / resolution;

    let colour = if state.counter_ms >= period.saturating_sub(resolution) {
        end
    } else {
        fade_step(start, end, step, steps)
    };

    #[allow(clippy::cast_precision_loss)]
    if steps > 0 {
        state.duty_cycle = step as f32 / steps as f32;
    }

    super::fill(frame, colour);
}
