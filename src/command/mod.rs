//! Remote command layer
//!
//! One handler per cloud-visible function. Each handler validates the full
//! argument string against its schema, then rebuilds the retained parameter
//! set and publishes a copy to the driver's update queue. Reconfiguration is
//! all-or-nothing: a single bad field rejects the whole command and the
//! active pattern keeps running untouched. Fields a command does not set keep
//! their values from earlier commands.

mod args;

use args::{ArgInfo, parse_args};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::UpdateSender;
use crate::colour;
use crate::config::{Pattern, PatternConfig};

/// Smallest accepted cycle period
const PERIOD_MIN_MS: i64 = 100;
/// Upper bound for every millisecond argument
const MS_MAX: i64 = i32::MAX as i64;
/// Pulse and blink duty cycle bounds
const DUTY_MIN: i64 = 10;
const DUTY_MAX: i64 = 90;
/// Longest temperature fade sweep, one day
const TEMP_FADE_MAX_S: i64 = 86_400;

const COMMAND_NAME_BLINK: &str = "blink";
const COMMAND_NAME_COLOUR: &str = "colour";
const COMMAND_NAME_STROBE: &str = "strobe";
const COMMAND_NAME_PULSE: &str = "pulse";
const COMMAND_NAME_GRADIENT: &str = "gradient";
const COMMAND_NAME_SNAKE: &str = "snake";
const COMMAND_NAME_PROGRESS: &str = "progress";
const COMMAND_NAME_WEATHER: &str = "weather";
const COMMAND_NAME_WARNING: &str = "warning";

/// The cloud-visible command set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Blink,
    Colour,
    Strobe,
    Pulse,
    Gradient,
    Snake,
    Progress,
    Weather,
    Warning,
}

impl Command {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => COMMAND_NAME_BLINK,
            Self::Colour => COMMAND_NAME_COLOUR,
            Self::Strobe => COMMAND_NAME_STROBE,
            Self::Pulse => COMMAND_NAME_PULSE,
            Self::Gradient => COMMAND_NAME_GRADIENT,
            Self::Snake => COMMAND_NAME_SNAKE,
            Self::Progress => COMMAND_NAME_PROGRESS,
            Self::Weather => COMMAND_NAME_WEATHER,
            Self::Warning => COMMAND_NAME_WARNING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COMMAND_NAME_BLINK => Some(Self::Blink),
            COMMAND_NAME_COLOUR => Some(Self::Colour),
            COMMAND_NAME_STROBE => Some(Self::Strobe),
            COMMAND_NAME_PULSE => Some(Self::Pulse),
            COMMAND_NAME_GRADIENT => Some(Self::Gradient),
            COMMAND_NAME_SNAKE => Some(Self::Snake),
            COMMAND_NAME_PROGRESS => Some(Self::Progress),
            COMMAND_NAME_WEATHER => Some(Self::Weather),
            COMMAND_NAME_WARNING => Some(Self::Warning),
            _ => None,
        }
    }
}

/// Why a command was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer comma-delimited fields than the schema expects
    TooFewArguments,
    /// More fields than the schema expects
    TooManyArguments,
    /// Numeric field at this index is unparsable or out of range
    InvalidNumber(usize),
    /// Colour field at this index is not a valid `#RRGGBB` string
    InvalidColour(usize),
    /// The update queue is full; the driver has not drained it
    QueueFull,
    /// No command with that name is registered
    UnknownCommand,
}

impl CommandError {
    /// Negative return code for the remote dispatcher (0 means accepted)
    pub const fn code(self) -> i32 {
        match self {
            Self::TooFewArguments => -1,
            Self::TooManyArguments => -2,
            Self::InvalidNumber(_) => -3,
            Self::InvalidColour(_) => -4,
            Self::QueueFull => -5,
            Self::UnknownCommand => -6,
        }
    }
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewArguments => write!(f, "too few arguments"),
            Self::TooManyArguments => write!(f, "too many arguments"),
            Self::InvalidNumber(index) => {
                write!(f, "argument {index} is not a number in range")
            }
            Self::InvalidColour(index) => {
                write!(f, "argument {index} is not a #RRGGBB colour")
            }
            Self::QueueFull => write!(f, "update queue full"),
            Self::UnknownCommand => write!(f, "unknown command"),
        }
    }
}

/// Validates command arguments and publishes parameter sets
///
/// Retains its own copy of the parameter set so that fields outside a
/// command's schema carry over from previous commands, matching the
/// behaviour callers have always relied on.
pub struct CommandHandler<'a, const UPDATE_QUEUE: usize> {
    params: PatternConfig,
    num_leds: i64,
    updates: UpdateSender<'a, UPDATE_QUEUE>,
}

impl<'a, const UPDATE_QUEUE: usize> CommandHandler<'a, UPDATE_QUEUE> {
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(num_leds: usize, updates: UpdateSender<'a, UPDATE_QUEUE>) -> Self {
        Self {
            params: PatternConfig::new(num_leds),
            num_leds: num_leds as i64,
            updates,
        }
    }

    /// Route a named command to its handler
    pub fn dispatch(&mut self, name: &str, arg_string: &str) -> Result<(), CommandError> {
        let result = match Command::parse_from_str(name) {
            Some(Command::Blink) => self.blink(arg_string),
            Some(Command::Colour) => self.colour(arg_string),
            Some(Command::Strobe) => self.strobe(arg_string),
            Some(Command::Pulse) => self.pulse(arg_string),
            Some(Command::Gradient) => self.gradient(arg_string),
            Some(Command::Snake) => self.snake(arg_string),
            Some(Command::Progress) => self.progress(arg_string),
            Some(Command::Weather) => self.weather(arg_string),
            Some(Command::Warning) => self.warning(arg_string),
            None => Err(CommandError::UnknownCommand),
        };

        #[cfg(feature = "esp32-log")]
        if let Err(err) = &result {
            println!("command '{name}' rejected: {err}");
        }

        result
    }

    /// `period_ms,duty_percent,colour_on,colour_off`
    pub fn blink(&mut self, arg_string: &str) -> Result<(), CommandError> {
        const INFO: [ArgInfo; 4] = [
            ArgInfo::Number {
                min: PERIOD_MIN_MS,
                max: MS_MAX,
            },
            ArgInfo::Number {
                min: DUTY_MIN,
                max: DUTY_MAX,
            },
            ArgInfo::Colour,
            ArgInfo::Colour,
        ];
        let [period, duty, on, off] = parse_args(arg_string, &INFO)?;

        self.params
            .pattern(Pattern::Blink)
            .period(period.millis())
            .duty_cycle(duty.percent())
            .colour_on(on.colour())
            .colour_off(off.colour());
        self.publish()
    }

    /// `colour`
    pub fn colour(&mut self, arg_string: &str) -> Result<(), CommandError> {
        const INFO: [ArgInfo; 1] = [ArgInfo::Colour];
        let [fill] = parse_args(arg_string, &INFO)?;

        self.params.pattern(Pattern::Colour).colour_on(fill.colour());
        self.publish()
    }

    /// `period_ms,colour`
    pub fn strobe(&mut self, arg_string: &str) -> Result<(), CommandError> {
        const INFO: [ArgInfo; 2] = [
            ArgInfo::Number {
                min: PERIOD_MIN_MS,
                max: MS_MAX,
            },
            ArgInfo::Colour,
        ];
        let [period, on] = parse_args(arg_string, &INFO)?;

        self.params
            .pattern(Pattern::Strobe)
            .period(period.millis())
            .colour_on(on.colour())
            .colour_off(colour::BLACK);
        self.publish()
    }

    /// `period_ms,duty_percent,colour_on,colour_off`
    pub fn pulse(&mut self, arg_string: &str) -> Result<(), CommandError> {
        const INFO: [ArgInfo; 4] = [
            ArgInfo::Number {
                min: PERIOD_MIN_MS,
                max: MS_MAX,
            },
            ArgInfo::Number {
                min: DUTY_MIN,
                max: DUTY_MAX,
            },
            ArgInfo::Colour,
            ArgInfo::Colour,
        ];
        let [period, duty, on, off] = parse_args(arg_string, &INFO)?;

        self.params
            .pattern(Pattern::Pulse)
            .period(period.millis())
            .duty_cycle(duty.percent())
            .colour_on(on.colour())
            .colour_off(off.colour());
        self.publish()
    }

    /// `colour_start,colour_end`
    pub fn gradient(&mut self, arg_string: &str) -> Result<(), CommandError> {
        const INFO: [ArgInfo; 2] = [ArgInfo::Colour, ArgInfo::Colour];
        let [start, end] = parse_args(arg_string, &INFO)?;

        self.params
            .pattern(Pattern::Gradient)
            .colour_on(start.colour())
            .colour_off(end.colour());
        self.publish()
    }

    /// `period_ms,direction,length,colour_on,colour_off`
    pub fn snake(&mut self, arg_string: &str) -> Result<(), CommandError> {
        let info: [ArgInfo; 5] = [
            ArgInfo::Number {
                min: PERIOD_MIN_MS,
                max: MS_MAX,
            },
            ArgInfo::Number { min: 0, max: 1 },
            ArgInfo::Number {
                min: 1,
                max: self.num_leds,
            },
            ArgInfo::Colour,
            ArgInfo::Colour,
        ];
        let [period, direction, length, on, off] = parse_args(arg_string, &info)?;

        self.params
            .pattern(Pattern::Snake)
            .period(period.millis())
            .snake_direction(direction.direction())
            .length(length.unsigned())
            .colour_on(on.colour())
            .colour_off(off.colour());
        self.publish()
    }

    /// `initial,final,increment,increment_delay_ms,reset_delay_ms,direction,colour_on,colour_off`
    pub fn progress(&mut self, arg_string: &str) -> Result<(), CommandError> {
        let leds = ArgInfo::Number {
            min: 0,
            max: self.num_leds,
        };
        let delay = ArgInfo::Number {
            min: 0,
            max: MS_MAX,
        };
        let info: [ArgInfo; 8] = [
            leds,
            leds,
            ArgInfo::Number {
                min: 1,
                max: self.num_leds,
            },
            delay,
            delay,
            ArgInfo::Number { min: 0, max: 1 },
            ArgInfo::Colour,
            ArgInfo::Colour,
        ];
        let [initial, target, increment, inc_delay, reset_delay, direction, on, off] =
            parse_args(arg_string, &info)?;

        self.params
            .pattern(Pattern::Progress)
            .initial_value(initial.unsigned())
            .final_value(target.unsigned())
            .increment(increment.unsigned())
            .increment_delay(inc_delay.millis())
            .reset_delay(reset_delay.millis())
            .progress_direction(direction.direction())
            .colour_on(on.colour())
            .colour_off(off.colour());
        self.publish()
    }

    /// `temp_fade_interval_s,colour_warm,colour_cold,rain_height,rain_spacing,rain_delay_ms,rain_colour`
    pub fn weather(&mut self, arg_string: &str) -> Result<(), CommandError> {
        let info: [ArgInfo; 7] = [
            ArgInfo::Number {
                min: 1,
                max: TEMP_FADE_MAX_S,
            },
            ArgInfo::Colour,
            ArgInfo::Colour,
            ArgInfo::Number {
                min: 0,
                max: self.num_leds,
            },
            ArgInfo::Number {
                min: 0,
                max: self.num_leds,
            },
            ArgInfo::Number {
                min: 0,
                max: MS_MAX,
            },
            ArgInfo::Colour,
        ];
        let [interval, warm, cold, height, spacing, delay, rain] = parse_args(arg_string, &info)?;

        self.params
            .pattern(Pattern::Weather)
            .temp_fade_interval(interval.seconds())
            .colour_on(warm.colour())
            .colour_off(cold.colour())
            .rain_band_height(height.unsigned())
            .rain_band_spacing(spacing.unsigned())
            .rain_band_delay(delay.millis())
            .rain_band_colour(rain.colour());
        self.publish()
    }

    /// `colour,fade_in_ms,fade_out_ms,off_dwell_ms`
    ///
    /// Configures the weather warning overlay without touching the rest of
    /// the weather parameters. A black colour switches the overlay off.
    pub fn warning(&mut self, arg_string: &str) -> Result<(), CommandError> {
        let delay = ArgInfo::Number {
            min: 0,
            max: MS_MAX,
        };
        let info: [ArgInfo; 4] = [ArgInfo::Colour, delay, delay, delay];
        let [warning, fade_in, fade_out, dwell] = parse_args(arg_string, &info)?;

        self.params
            .warning_colour(warning.colour())
            .warning_fade_in(fade_in.millis())
            .warning_fade_out(fade_out.millis())
            .warning_off_dwell(dwell.millis());
        self.publish()
    }

    fn publish(&mut self) -> Result<(), CommandError> {
        self.updates
            .try_send(self.params)
            .map_err(|_| CommandError::QueueFull)
    }
}
