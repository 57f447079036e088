use crate::colour::Colour;
use crate::config::PatternConfig;

/// Solid fill with the on colour; the degenerate blink at 100% duty
pub(super) fn render(params: &PatternConfig, frame: &mut [Colour]) {
    super::fill(frame, params.colour_on);
}
