//! Strip and pattern configuration
//!
//! [`StripConfig`] describes the physical strip and is fixed once the driver
//! is built. [`PatternConfig`] is the full parameter set for the active
//! pattern; commands rebuild it through the chained setters and swap it in
//! wholesale at a tick boundary.

use embassy_time::Duration;

use crate::colour::{self, Colour};

/// Power-up period
const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);
/// Power-up pulse duty cycle (symmetric fade)
const DEFAULT_DUTY_CYCLE: u8 = 50;
const DEFAULT_SNAKE_LENGTH: u32 = 3;
const DEFAULT_PROGRESS_INCREMENT: u32 = 1;
const DEFAULT_PROGRESS_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_TEMP_FADE_INTERVAL: Duration = Duration::from_secs(60);
const DEFAULT_RAIN_DELAY: Duration = Duration::from_millis(250);
const DEFAULT_RAIN_SPACING: u32 = 4;
const DEFAULT_WARNING_FADE: Duration = Duration::from_millis(500);
const DEFAULT_WARNING_DWELL: Duration = Duration::from_millis(1000);

/// The closed set of lighting patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Hard on/off square wave with configurable duty cycle
    Blink,
    /// Solid fill with the on colour
    Colour,
    /// Fixed 50% duty blink
    Strobe,
    /// Whole-strip linear crossfade, back and forth
    Pulse,
    /// Static spatial fade from the first LED to the last
    Gradient,
    /// A lit segment travelling along the strip
    Snake,
    /// A completion bar growing toward a target
    Progress,
    /// Temperature fade + rain bands + warning overlay
    Weather,
}

/// Travel direction for the snake and progress patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Byte placement of the three channels in the output frame
///
/// Chosen per fixture; changes byte order only, never pattern math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Grb,
}

impl ChannelOrder {
    /// Serialise one colour into its three-byte slot
    pub const fn bytes(self, c: Colour) -> [u8; 3] {
        match self {
            Self::Rgb => [c.r, c.g, c.b],
            Self::Grb => [c.g, c.r, c.b],
        }
    }
}

/// Physical strip description, immutable after driver construction
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of LEDs driven
    pub num_leds: usize,
    /// Tick resolution; the driver expects one tick per this interval
    pub resolution: Duration,
    /// Channel layout of the serialised frame
    pub channel_order: ChannelOrder,
}

/// Weather pattern sub-parameters
#[derive(Debug, Clone, Copy)]
pub struct WeatherConfig {
    pub(crate) temp_fade_interval: Duration,
    pub(crate) rain_band_height: u32,
    pub(crate) rain_band_spacing: u32,
    pub(crate) rain_band_increment_delay: Duration,
    pub(crate) rain_band_colour: Colour,
    pub(crate) warning_colour: Colour,
    pub(crate) warning_fade_in: Duration,
    pub(crate) warning_fade_out: Duration,
    pub(crate) warning_off_dwell: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temp_fade_interval: DEFAULT_TEMP_FADE_INTERVAL,
            rain_band_height: 0,
            rain_band_spacing: DEFAULT_RAIN_SPACING,
            rain_band_increment_delay: DEFAULT_RAIN_DELAY,
            rain_band_colour: colour::WHITE,
            // Black disables the overlay until a warning command arrives
            warning_colour: colour::BLACK,
            warning_fade_in: DEFAULT_WARNING_FADE,
            warning_fade_out: DEFAULT_WARNING_FADE,
            warning_off_dwell: DEFAULT_WARNING_DWELL,
        }
    }
}

/// Full parameter set for the active pattern
///
/// Selecting a pattern does not reset the other fields; a command must set
/// every parameter its pattern reads. Stale values from an earlier pattern
/// stay in place until overwritten.
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    pub(crate) pattern: Pattern,
    pub(crate) period: Duration,
    pub(crate) duty_cycle_percent: u8,
    pub(crate) colour_on: Colour,
    pub(crate) colour_off: Colour,
    pub(crate) snake_length: u32,
    pub(crate) snake_direction: Direction,
    pub(crate) progress_initial: u32,
    pub(crate) progress_final: u32,
    pub(crate) progress_increment: u32,
    pub(crate) progress_increment_delay: Duration,
    pub(crate) progress_reset_delay: Duration,
    pub(crate) progress_direction: Direction,
    pub(crate) weather: WeatherConfig,
}

impl PatternConfig {
    /// Power-up parameter set for a strip of `num_leds` LEDs
    ///
    /// The progress target defaults to the full strip so an unconfigured bar
    /// stops growing at the last LED.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(num_leds: usize) -> Self {
        Self {
            pattern: Pattern::Colour,
            period: DEFAULT_PERIOD,
            duty_cycle_percent: DEFAULT_DUTY_CYCLE,
            colour_on: colour::WHITE,
            colour_off: colour::WHITE,
            snake_length: DEFAULT_SNAKE_LENGTH,
            snake_direction: Direction::Forward,
            progress_initial: 0,
            progress_final: num_leds as u32,
            progress_increment: DEFAULT_PROGRESS_INCREMENT,
            progress_increment_delay: DEFAULT_PROGRESS_DELAY,
            progress_reset_delay: DEFAULT_PROGRESS_DELAY,
            progress_direction: Direction::Forward,
            weather: WeatherConfig::default(),
        }
    }

    /// Select the active pattern
    pub fn pattern(&mut self, pattern: Pattern) -> &mut Self {
        self.pattern = pattern;
        self
    }

    /// Cycle length for blink, strobe, pulse and snake
    pub fn period(&mut self, period: Duration) -> &mut Self {
        self.period = period;
        self
    }

    /// Percentage of the period spent on the on colour (blink),
    /// or of time spent fading on vs off (pulse)
    pub fn duty_cycle(&mut self, percent: u8) -> &mut Self {
        self.duty_cycle_percent = percent;
        self
    }

    pub fn colour_on(&mut self, colour: Colour) -> &mut Self {
        self.colour_on = colour;
        self
    }

    pub fn colour_off(&mut self, colour: Colour) -> &mut Self {
        self.colour_off = colour;
        self
    }

    /// Length of the snake segment in LEDs
    pub fn length(&mut self, leds: u32) -> &mut Self {
        self.snake_length = leds;
        self
    }

    /// Travel direction of the snake segment
    pub fn snake_direction(&mut self, direction: Direction) -> &mut Self {
        self.snake_direction = direction;
        self
    }

    /// Starting value of the progress bar
    pub fn initial_value(&mut self, leds: u32) -> &mut Self {
        self.progress_initial = leds;
        self
    }

    /// Target value of the progress bar
    pub fn final_value(&mut self, leds: u32) -> &mut Self {
        self.progress_final = leds;
        self
    }

    /// LEDs added to the bar per increment
    pub fn increment(&mut self, leds: u32) -> &mut Self {
        self.progress_increment = leds;
        self
    }

    /// Time between bar increments
    pub fn increment_delay(&mut self, delay: Duration) -> &mut Self {
        self.progress_increment_delay = delay;
        self
    }

    /// Dwell time on the full bar before it restarts
    pub fn reset_delay(&mut self, delay: Duration) -> &mut Self {
        self.progress_reset_delay = delay;
        self
    }

    /// Fill direction of the progress bar
    pub fn progress_direction(&mut self, direction: Direction) -> &mut Self {
        self.progress_direction = direction;
        self
    }

    /// Length of one temperature fade sweep
    pub fn temp_fade_interval(&mut self, interval: Duration) -> &mut Self {
        self.weather.temp_fade_interval = interval;
        self
    }

    /// Height of each rain band in LEDs; 0 disables the rain layer
    pub fn rain_band_height(&mut self, leds: u32) -> &mut Self {
        self.weather.rain_band_height = leds;
        self
    }

    /// Gap between consecutive rain bands in LEDs
    pub fn rain_band_spacing(&mut self, leds: u32) -> &mut Self {
        self.weather.rain_band_spacing = leds;
        self
    }

    /// Time between one-LED advances of the rain bands
    pub fn rain_band_delay(&mut self, delay: Duration) -> &mut Self {
        self.weather.rain_band_increment_delay = delay;
        self
    }

    pub fn rain_band_colour(&mut self, colour: Colour) -> &mut Self {
        self.weather.rain_band_colour = colour;
        self
    }

    /// Warning overlay colour; exact black disables the overlay
    pub fn warning_colour(&mut self, colour: Colour) -> &mut Self {
        self.weather.warning_colour = colour;
        self
    }

    pub fn warning_fade_in(&mut self, duration: Duration) -> &mut Self {
        self.weather.warning_fade_in = duration;
        self
    }

    pub fn warning_fade_out(&mut self, duration: Duration) -> &mut Self {
        self.weather.warning_fade_out = duration;
        self
    }

    /// Dwell time between a fade-out and the next fade-in
    pub fn warning_off_dwell(&mut self, duration: Duration) -> &mut Self {
        self.weather.warning_off_dwell = duration;
        self
    }
}
