//! Per-strip tick state
//!
//! The embedding owns one [`TickState`] per strip session and passes it to
//! every tick. Only the renderer mutates it.

/// Phase of the weather warning overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningFadeState {
    /// Fading from black up to the warning colour
    #[default]
    FadeIn,
    /// Fading from the warning colour back to black
    FadeOut,
    /// Holding black between cycles
    OffDwell,
}

/// Mutable pattern state carried across ticks
///
/// Counters are milliseconds. `counter_ms` is pattern-local elapsed time; the
/// driver advances it by one resolution after each tick and the formulas
/// reset it at their cycle boundaries, so it is always below the current
/// cycle length once a tick completes.
#[derive(Debug, Clone, Copy)]
pub struct TickState {
    /// Elapsed time since the last pattern-local reset
    pub counter_ms: u64,
    /// Normalised position of the pulse oscillation, 0.0..=1.0
    pub duty_cycle: f32,
    /// Pulse fade direction, +1 on-to-off, -1 off-to-on
    pub duty_direction: i8,
    /// Position counter for the snake and progress patterns
    pub progress: u32,
    /// Weather temperature fade direction, +1 or -1
    pub temp_fade_direction: i8,
    /// Elapsed time since the rain bands last advanced
    pub rain_counter_ms: u64,
    /// Strip index of the leading rain band
    pub rain_position: u32,
    /// Elapsed time within the current warning phase
    pub warning_counter_ms: u64,
    /// Current warning phase
    pub warning_fade_state: WarningFadeState,
}

impl TickState {
    /// Fresh state for a new strip session
    pub const fn new() -> Self {
        Self {
            counter_ms: 0,
            duty_cycle: 0.0,
            duty_direction: 1,
            progress: 0,
            temp_fade_direction: 1,
            rain_counter_ms: 0,
            rain_position: 0,
            warning_counter_ms: 0,
            warning_fade_state: WarningFadeState::FadeIn,
        }
    }
}

impl Default for TickState {
    fn default() -> Self {
        Self::new()
    }
}
