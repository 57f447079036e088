use crate::colour::{self, Colour, fade_step};
use crate::config::{PatternConfig, StripConfig, WeatherConfig};
use crate::state::{TickState, WarningFadeState};

/// Weather display: three layers, later layers overlay earlier ones
///
/// 1. temperature: whole-strip fade between the two colours, one sweep per
///    `temp_fade_interval`, reversing at each end
/// 2. rain: bands of `rain_band_height` LEDs marching down the strip
/// 3. warning: a breathing full-strip overlay; exact black is transparent
pub(super) fn render(
    strip: &StripConfig,
    params: &PatternConfig,
    state: &mut TickState,
    frame: &mut [Colour],
) {
    let resolution = strip.resolution.as_millis();

    temperature_layer(params, state, resolution, frame);
    rain_layer(&params.weather, state, resolution, frame);
    warning_layer(&params.weather, state, resolution, frame);
}

/// Base coat: the pulse fade driven by its own direction flag and cycle
fn temperature_layer(
    params: &PatternConfig,
    state: &mut TickState,
    resolution: u64,
    frame: &mut [Colour],
) {
    let cycle = params.weather.temp_fade_interval.as_millis();

    if state.counter_ms >= cycle {
        state.counter_ms = 0;
        state.temp_fade_direction = -state.temp_fade_direction;
    }

    let (start, end) = if state.temp_fade_direction > 0 {
        (params.colour_on, params.colour_off)
    } else {
        (params.colour_off, params.colour_on)
    };

    let steps = (cycle / resolution).saturating_sub(1);
    let step = state.counter_ms / resolution;

    let colour = if state.counter_ms >= cycle.saturating_sub(resolution) {
        end
    } else {
        fade_step(start, end, step, steps)
    };

    super::fill(frame, colour);
}

/// Rain bands every `height + spacing` LEDs, one LED of travel per delay,
/// wrapping at the strip end
fn rain_layer(
    weather: &WeatherConfig,
    state: &mut TickState,
    resolution: u64,
    frame: &mut [Colour],
) {
    let height = weather.rain_band_height;
    if height == 0 {
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let num_leds = frame.len() as u32;

    if state.rain_counter_ms >= weather.rain_band_increment_delay.as_millis() {
        state.rain_counter_ms = 0;
        state.rain_position = (state.rain_position + 1) % num_leds;
    }

    let stride = height + weather.rain_band_spacing;
    for band in 0..num_leds.div_ceil(stride) {
        let start = (state.rain_position + band * stride) % num_leds;
        for offset in 0..height.min(num_leds) {
            frame[((start + offset) % num_leds) as usize] = weather.rain_band_colour;
        }
    }

    state.rain_counter_ms += resolution;
}

/// Warning overlay cycling fade-in, fade-out, off-dwell
///
/// The computed colour overwrites the whole strip unless it is exact black,
/// which keeps the lower layers visible. Configuring a black warning colour
/// therefore disables the overlay entirely.
fn warning_layer(
    weather: &WeatherConfig,
    state: &mut TickState,
    resolution: u64,
    frame: &mut [Colour],
) {
    let fade_in = weather.warning_fade_in.as_millis();
    let fade_out = weather.warning_fade_out.as_millis();

    let phase_len = match state.warning_fade_state {
        WarningFadeState::FadeIn => fade_in,
        WarningFadeState::FadeOut => fade_out,
        WarningFadeState::OffDwell => weather.warning_off_dwell.as_millis(),
    };
    if state.warning_counter_ms >= phase_len {
        state.warning_counter_ms = 0;
        state.warning_fade_state = match state.warning_fade_state {
            WarningFadeState::FadeIn => WarningFadeState::FadeOut,
            WarningFadeState::FadeOut => WarningFadeState::OffDwell,
            WarningFadeState::OffDwell => WarningFadeState::FadeIn,
        };
    }

    let target = weather.warning_colour;
    let step = state.warning_counter_ms / resolution;

    let overlay = match state.warning_fade_state {
        WarningFadeState::FadeIn => {
            if state.warning_counter_ms >= fade_in.saturating_sub(resolution) {
                // Final step is pinned to the target colour
                target
            } else {
                fade_step(
                    colour::BLACK,
                    target,
                    step,
                    (fade_in / resolution).saturating_sub(1),
                )
            }
        }
        WarningFadeState::FadeOut => fade_step(
            target,
            colour::BLACK,
            step,
            (fade_out / resolution).saturating_sub(1),
        ),
        WarningFadeState::OffDwell => colour::BLACK,
    };

    state.warning_counter_ms += resolution;

    if overlay != colour::BLACK {
        super::fill(frame, overlay);
    }
}
