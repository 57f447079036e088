#![no_std]

pub mod channel;
pub mod colour;
pub mod command;
pub mod config;
pub mod dmx;
pub mod driver;
pub mod pattern;
pub mod scheduler;
pub mod state;

pub use channel::{UpdateChannel, UpdateQueueFull, UpdateReceiver, UpdateSender};
pub use command::{Command, CommandError, CommandHandler};
pub use config::{ChannelOrder, Direction, Pattern, PatternConfig, StripConfig, WeatherConfig};
pub use dmx::{DmxOutput, DmxPort};
pub use driver::StripDriver;
pub use scheduler::{TickResult, TickScheduler};
pub use state::{TickState, WarningFadeState};

pub use colour::{Colour, HexColourError, colour_from_hex};
pub use embassy_time::{Duration, Instant};

/// Abstract strip output trait
///
/// Implement this trait to support different transports (DMX over UART,
/// SPI-clocked strips, a test capture buffer). The driver hands over the
/// serialised frame once per tick and does not observe failures.
pub trait OutputDriver {
    /// Write one serialised frame (`num_leds * 3` bytes) to the strip
    fn write(&mut self, bytes: &[u8]);
}
