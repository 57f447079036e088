//! Linear colour fade used by the pulse, temperature and warning layers

use super::Colour;

/// Compute the colour `step` steps into a linear fade of `steps` steps
///
/// Per channel: `gradient = (to - from) / steps`, `value = gradient * step
/// + from`, truncated toward zero and saturated to `0..=255`. Truncation
/// matches the byte values the strip has always shown (a red to green fade
/// passes through (127, 127, 0), not (127, 128, 0)). The interpolation can
/// stop one count short of `to`; callers force the exact end colour on their
/// final step.
pub fn fade_step(from: Colour, to: Colour, step: u64, steps: u64) -> Colour {
    Colour {
        r: fade_channel(from.r, to.r, step, steps),
        g: fade_channel(from.g, to.g, step, steps),
        b: fade_channel(from.b, to.b, step, steps),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fade_channel(from: u8, to: u8, step: u64, steps: u64) -> u8 {
    if steps == 0 {
        return to;
    }

    let gradient = (f64::from(to) - f64::from(from)) / steps as f64;
    let value = gradient * step as f64 + f64::from(from);

    // `as u8` truncates toward zero and saturates outside 0..=255
    value as u8
}
