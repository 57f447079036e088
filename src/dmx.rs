//! DMX512 frame framing
//!
//! Builds the on-wire shape of a DMX packet: a break, the null start code,
//! then the slot data. The UART itself stays behind [`DmxPort`]; programming
//! baud-rate registers and pin muxing belongs to the embedding.

use crate::OutputDriver;

/// DMX data rate, 8N2
pub const BAUD_DMX: u32 = 250_000;

/// Rate used to stretch a null byte into a valid break condition
pub const BAUD_BREAK: u32 = 80_000;

/// Start code for a standard dimmer-data packet
const START_CODE_NULL: u8 = 0;

/// Minimal UART surface needed to emit DMX frames
pub trait DmxPort {
    /// Hold the line low long enough for a break plus mark-after-break
    fn send_break(&mut self);

    /// Transmit bytes at [`BAUD_DMX`], blocking until accepted
    fn write(&mut self, bytes: &[u8]);
}

/// Output transport that frames every strip buffer as one DMX packet
pub struct DmxOutput<P: DmxPort> {
    port: P,
}

impl<P: DmxPort> DmxOutput<P> {
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

impl<P: DmxPort> OutputDriver for DmxOutput<P> {
    fn write(&mut self, bytes: &[u8]) {
        self.port.send_break();
        self.port.write(&[START_CODE_NULL]);
        self.port.write(bytes);
    }
}
