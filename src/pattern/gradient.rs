use crate::colour::Colour;
use crate::config::PatternConfig;

/// Static spatial fade from the on colour at LED 0 to the off colour at the
/// last LED
///
/// The per-channel slope uses integer division, truncating toward zero; the
/// byte values this produces (a red to green fade hits (128, 127, 0) at the
/// midpoint of three LEDs) are part of the fixture's observed behaviour and
/// must not change. The last LED is forced to the exact end colour.
pub(super) fn render(params: &PatternConfig, frame: &mut [Colour]) {
    let Some(last) = frame.len().checked_sub(1) else {
        return;
    };

    if last == 0 {
        frame[0] = params.colour_off;
        return;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let steps = last as i32;
    let from = params.colour_on;
    let to = params.colour_off;

    for (i, led) in frame.iter_mut().enumerate().take(last) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let i = i as i32;
        *led = Colour {
            r: gradient_channel(from.r, to.r, i, steps),
            g: gradient_channel(from.g, to.g, i, steps),
            b: gradient_channel(from.b, to.b, i, steps),
        };
    }

    frame[last] = to;
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn gradient_channel(from: u8, to: u8, index: i32, steps: i32) -> u8 {
    let gradient = (i32::from(to) - i32::from(from)) / steps;
    (i32::from(from) + gradient * index).clamp(0, 255) as u8
}
