//! Argument string tokenizing and validation
//!
//! Remote commands arrive as one comma-delimited string. Each command
//! declares a fixed schema; the string must yield exactly that many fields
//! and every field must validate before any value is handed to a handler.

use embassy_time::Duration;

use super::CommandError;
use crate::colour::{Colour, colour_from_hex};
use crate::config::Direction;

/// Declared shape of one argument
#[derive(Debug, Clone, Copy)]
pub(super) enum ArgInfo {
    /// Decimal integer within an inclusive range
    Number { min: i64, max: i64 },
    /// `#RRGGBB` colour string
    Colour,
}

/// A validated argument
#[derive(Debug, Clone, Copy)]
pub(super) enum ArgValue {
    Number(i64),
    Colour(Colour),
}

impl ArgValue {
    /// The validated integer; panics on a schema/handler mismatch, which is
    /// a wiring bug inside this module
    pub(super) fn number(self) -> i64 {
        match self {
            Self::Number(value) => value,
            Self::Colour(_) => panic!("argument schema mismatch"),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn unsigned(self) -> u32 {
        self.number() as u32
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn percent(self) -> u8 {
        self.number() as u8
    }

    #[allow(clippy::cast_sign_loss)]
    pub(super) fn millis(self) -> Duration {
        Duration::from_millis(self.number() as u64)
    }

    #[allow(clippy::cast_sign_loss)]
    pub(super) fn seconds(self) -> Duration {
        Duration::from_secs(self.number() as u64)
    }

    /// Wire encoding: 0 = forward, anything else validated to 1 = reverse
    pub(super) fn direction(self) -> Direction {
        if self.number() == 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    pub(super) fn colour(self) -> Colour {
        match self {
            Self::Colour(value) => value,
            Self::Number(_) => panic!("argument schema mismatch"),
        }
    }
}

/// Tokenise `args` against the declared field infos, validating every field
///
/// Field count must match the schema exactly. An empty string carries no
/// fields; a trailing comma means the final field is missing. Validation
/// stops at the first offending field and nothing is applied.
pub(super) fn parse_args<const N: usize>(
    args: &str,
    info: &[ArgInfo; N],
) -> Result<[ArgValue; N], CommandError> {
    let fields = if args.is_empty() {
        0
    } else if args.ends_with(',') {
        args.split(',').count() - 1
    } else {
        args.split(',').count()
    };

    if fields > N {
        return Err(CommandError::TooManyArguments);
    }
    if fields < N {
        return Err(CommandError::TooFewArguments);
    }

    let mut values = [ArgValue::Number(0); N];
    for (index, token) in args.split(',').take(N).enumerate() {
        values[index] = match info[index] {
            ArgInfo::Number { min, max } => {
                let value: i64 = token
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(index))?;
                if value < min || value > max {
                    return Err(CommandError::InvalidNumber(index));
                }
                ArgValue::Number(value)
            }
            ArgInfo::Colour => ArgValue::Colour(
                colour_from_hex(token).map_err(|_| CommandError::InvalidColour(index))?,
            ),
        };
    }

    Ok(values)
}
