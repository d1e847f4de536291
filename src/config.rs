//! Configuration and constants
//!
//! Compile-time defaults for the physical layer and the pin and buffer
//! assignments used by the direct-mode firmware. Runtime per-driver
//! parameters are carried in [`PhyParams`].

use crate::types::{DataShaping, Encoding};

/// Default maximum packet length in bytes
pub const DEFAULT_MAX_PACKET_LEN: usize = 255;

/// Direct-mode frame buffer capacity used by the firmware binary
pub const DIRECT_BUFFER_SIZE: usize = DEFAULT_MAX_PACKET_LEN;

/// Longest direct-mode sync word in bits
pub const MAX_SYNC_WORD_BITS: u8 = 32;

/// Encoding selected when entering direct mode
pub const DIRECT_ENCODING: Encoding = Encoding::Nrz;

/// Data shaping selected when entering direct mode
pub const DIRECT_SHAPING: DataShaping = DataShaping::None;

/// Frequency deviation value meaning "lowest the chip supports"
pub const LOWEST_FREQUENCY_DEVIATION: f32 = -1.0;

/// Consumer poll interval for the firmware drain task in milliseconds
pub const DRAIN_POLL_MS: u64 = 2;

/// Default direct-mode sync word used by the firmware binary
pub const FIRMWARE_SYNC_WORD: u32 = 0x2DD4;

/// Length of [`FIRMWARE_SYNC_WORD`] in bits
pub const FIRMWARE_SYNC_WORD_LEN: u8 = 16;

/// Fixed frame length expected by the firmware binary, in bytes
pub const FIRMWARE_FRAME_LEN: usize = 16;

/// Pin assignments for the direct-mode firmware
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Demodulated data output from the radio (DIO2 on most FSK chips)
    pub const DIRECT_DATA: &str = "PA1";

    /// Recovered bit clock from the radio (DIO1 / DCLK)
    pub const DIRECT_CLOCK: &str = "PA0";

    /// Status LED, toggled per completed frame
    pub const LED_STATUS: &str = "PA5";
}

/// Construction-time parameters of a physical layer instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhyParams {
    /// Frequency synthesizer step in Hz
    pub freq_step: f32,
    /// Largest packet the chip can receive, in bytes
    pub max_packet_length: usize,
}

impl PhyParams {
    /// Create parameters for a chip
    #[must_use]
    pub const fn new(freq_step: f32, max_packet_length: usize) -> Self {
        Self {
            freq_step,
            max_packet_length,
        }
    }
}

impl Default for PhyParams {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_MAX_PACKET_LEN)
    }
}
