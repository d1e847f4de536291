//! Physical Layer Capability Contract
//!
//! The operation set a concrete chip driver implements. Every operation has
//! a default that returns [`RadioError::Unsupported`] without side effects,
//! so a driver only overrides what its chip can do.
//!
//! Data operations take byte slices; text adapters live in [`crate::text`].

use crate::config::{PhyParams, DIRECT_ENCODING, DIRECT_SHAPING, LOWEST_FREQUENCY_DEVIATION};
use crate::direct::receiver::DirectStream;
use crate::error::{RadioError, RadioResult};
use crate::rng;
use crate::types::{DataShaping, Encoding, IrqAction, PinId, StandbyMode, TimerSetup};

/// Radio chip capability contract
pub trait PhysicalLayer {
    /// Construction-time parameters of this instance
    fn params(&self) -> &PhyParams;

    /// Frequency synthesizer step in Hz
    fn freq_step(&self) -> f32 {
        self.params().freq_step
    }

    /// Largest packet the chip can receive, in bytes
    fn max_packet_length(&self) -> usize {
        self.params().max_packet_length
    }

    /// Transmit a packet, blocking until done
    fn transmit(&mut self, data: &[u8], addr: u8) -> RadioResult<()> {
        let _ = (data, addr);
        Err(RadioError::Unsupported)
    }

    /// Receive a packet into `data`, blocking until done
    fn receive(&mut self, data: &mut [u8]) -> RadioResult<()> {
        let _ = data;
        Err(RadioError::Unsupported)
    }

    /// Put the chip to sleep
    fn sleep(&mut self) -> RadioResult<()> {
        Err(RadioError::Unsupported)
    }

    /// Put the chip in its default standby mode
    fn standby(&mut self) -> RadioResult<()> {
        self.standby_mode(StandbyMode::Default)
    }

    /// Put the chip in a specific standby mode
    fn standby_mode(&mut self, mode: StandbyMode) -> RadioResult<()> {
        let _ = mode;
        Err(RadioError::Unsupported)
    }

    /// Start an interrupt-driven reception
    fn start_receive(
        &mut self,
        timeout: u32,
        irq_flags: u16,
        irq_mask: u16,
        len: usize,
    ) -> RadioResult<()> {
        let _ = (timeout, irq_flags, irq_mask, len);
        Err(RadioError::Unsupported)
    }

    /// Start an interrupt-driven transmission
    fn start_transmit(&mut self, data: &[u8], addr: u8) -> RadioResult<()> {
        let _ = (data, addr);
        Err(RadioError::Unsupported)
    }

    /// Clean up after an interrupt-driven transmission
    fn finish_transmit(&mut self) -> RadioResult<()> {
        Err(RadioError::Unsupported)
    }

    /// Read a packet received by [`Self::start_receive`]
    fn read_data(&mut self, data: &mut [u8]) -> RadioResult<()> {
        let _ = data;
        Err(RadioError::Unsupported)
    }

    /// Start transmitting in direct mode (`frf` is the raw frequency word)
    fn transmit_direct(&mut self, frf: u32) -> RadioResult<()> {
        let _ = frf;
        Err(RadioError::Unsupported)
    }

    /// Start receiving in direct mode
    fn receive_direct(&mut self) -> RadioResult<()> {
        Err(RadioError::Unsupported)
    }

    /// Set carrier frequency in MHz
    fn set_frequency(&mut self, freq_mhz: f32) -> RadioResult<()> {
        let _ = freq_mhz;
        Err(RadioError::Unsupported)
    }

    /// Set bit rate in kbps
    fn set_bit_rate(&mut self, kbps: f32) -> RadioResult<()> {
        let _ = kbps;
        Err(RadioError::Unsupported)
    }

    /// Set FSK frequency deviation in kHz
    ///
    /// [`LOWEST_FREQUENCY_DEVIATION`] requests the lowest value the chip
    /// supports.
    fn set_frequency_deviation(&mut self, khz: f32) -> RadioResult<()> {
        let _ = khz;
        Err(RadioError::Unsupported)
    }

    /// Set the data shaping filter
    fn set_data_shaping(&mut self, shaping: DataShaping) -> RadioResult<()> {
        let _ = shaping;
        Err(RadioError::Unsupported)
    }

    /// Set the line encoding
    fn set_encoding(&mut self, encoding: Encoding) -> RadioResult<()> {
        let _ = encoding;
        Err(RadioError::Unsupported)
    }

    /// Length of the last received packet
    ///
    /// With `update`, the driver re-reads it from the chip.
    fn packet_length(&mut self, update: bool) -> usize {
        let _ = update;
        0
    }

    /// RSSI of the last received packet in dBm
    fn rssi(&mut self) -> RadioResult<f32> {
        Err(RadioError::Unsupported)
    }

    /// SNR of the last received packet in dB
    fn snr(&mut self) -> RadioResult<f32> {
        Err(RadioError::Unsupported)
    }

    /// One random byte from the radio hardware
    ///
    /// The default yields 0, which makes [`Self::random`] degenerate.
    fn random_byte(&mut self) -> u8 {
        0
    }

    /// Random number in `0..max` from [`Self::random_byte`]
    fn random(&mut self, max: i32) -> i32 {
        rng::random(&mut || self.random_byte(), max)
    }

    /// Random number in `min..max` from [`Self::random_byte`]
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        rng::random_range(&mut || self.random_byte(), min, max)
    }

    /// Prepare the chip for direct mode
    ///
    /// Disables encoding and data shaping and selects the lowest frequency
    /// deviation, stopping at the first failure.
    fn start_direct(&mut self) -> RadioResult<()> {
        self.set_encoding(DIRECT_ENCODING)?;
        self.set_data_shaping(DIRECT_SHAPING)?;
        self.set_frequency_deviation(LOWEST_FREQUENCY_DEVIATION)
    }

    /// Direct-mode receiver owned by the driver, if any
    fn direct_stream(&self) -> Option<&dyn DirectStream> {
        None
    }

    /// Number of direct-mode bytes ready to read
    fn available(&self) -> usize {
        self.direct_stream().map_or(0, |stream| stream.available())
    }

    /// Read one direct-mode byte, optionally dropping sync afterwards
    fn read(&mut self, drop_sync: bool) -> RadioResult<u8> {
        self.direct_stream()
            .ok_or(RadioError::Unsupported)?
            .read(drop_sync)
    }

    /// Set the direct-mode sync word (0 to 32 bits)
    fn set_direct_sync_word(&mut self, value: u32, len: u8) -> RadioResult<()> {
        self.direct_stream()
            .ok_or(RadioError::Unsupported)?
            .configure_sync_word(value, len)
    }

    /// Register the direct-mode bit interrupt handler
    fn set_direct_action(&mut self, action: IrqAction) {
        let _ = action;
    }

    /// Sample the direct-mode data pin and feed the bit to the receiver
    fn read_bit(&mut self, pin: PinId) -> RadioResult<()> {
        let _ = pin;
        Err(RadioError::Unsupported)
    }

    /// Map a chip DIO pin to a function
    fn set_dio_mapping(&mut self, pin: PinId, value: u8) -> RadioResult<()> {
        let _ = (pin, value);
        Err(RadioError::Unsupported)
    }

    /// Register the DIO1 interrupt handler
    fn set_dio1_action(&mut self, action: IrqAction) {
        let _ = action;
    }

    /// Remove the DIO1 interrupt handler
    fn clear_dio1_action(&mut self) {}

    /// Register the timer setup callback for interrupt-timed transfers
    fn set_interrupt_setup(&mut self, setup: TimerSetup) {
        let _ = setup;
    }

    /// Signal that the transfer timer has expired
    ///
    /// Called from the timer interrupt set up through
    /// [`Self::set_interrupt_setup`].
    fn set_timer_flag(&mut self) {}
}
