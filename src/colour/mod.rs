mod fade;
mod hex;

pub use fade::fade_step;
pub use hex::{HexColourError, colour_from_hex};
use smart_leds::RGB8;

pub type Colour = RGB8;

/// Transparent value for the weather warning layer, default strobe off colour
pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

/// Power-up default for both configured colours
pub const WHITE: Colour = Colour {
    r: 255,
    g: 255,
    b: 255,
};
