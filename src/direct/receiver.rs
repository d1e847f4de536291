//! Direct-Mode Receiver
//!
//! Combines the sync word matcher, the bit packer and the frame buffer into
//! the object a driver owns for direct-mode reception.
//!
//! # Contexts
//!
//! ```text
//! bit interrupt ──▶ ingest_bit() ──▶ FrameBuffer ──▶ consume_byte() ◀── consumer task
//!                   (producer)       (atomics)       (consumer)
//! ```
//!
//! `ingest_bit` is the only writer of the producer state and the write
//! cursor. It runs in O(1), never allocates and never blocks: the producer
//! state is guarded by a `critical_section`, which on a single-core MCU only
//! masks interrupts for a few instructions. Reconfiguration goes through the
//! same critical section, so a sync word is always replaced as a whole.

use core::cell::Cell;

use critical_section::Mutex;

use super::buffer::FrameBuffer;
use super::sync::SyncState;
use crate::error::{RadioError, RadioResult};
use crate::types::{BitOrder, SyncWord};

/// Producer-side state, copied in and out of the critical section
#[derive(Clone, Copy, Debug)]
struct Producer {
    sync: SyncState,
    /// Byte under assembly, bits in arrival order from bit 0
    pending: u8,
    /// Next bit position within `pending` (0-7)
    bit_pos: u8,
    /// Wire bit order of completed bytes
    order: BitOrder,
    /// Buffer overflowed, bits rejected until the consumer drains
    overflowed: bool,
}

impl Producer {
    const fn new() -> Self {
        Self {
            sync: SyncState::new(),
            pending: 0,
            bit_pos: 0,
            order: BitOrder::MsbFirst,
            overflowed: false,
        }
    }

    fn start_frame(&mut self) {
        self.pending = 0;
        self.bit_pos = 0;
        self.overflowed = false;
    }
}

/// Object-safe view of a direct-mode receiver
///
/// Lets drivers and the capability interface reach a receiver without
/// naming its buffer capacity.
pub trait DirectStream {
    /// Configure the sync word (0 to 32 bits)
    fn configure_sync_word(&self, value: u32, len: u8) -> RadioResult<()>;

    /// Force re-synchronization before the next frame
    fn drop_sync(&self);

    /// Feed one received bit (interrupt context)
    fn ingest_bit(&self, bit: bool) -> RadioResult<()>;

    /// Number of completed, unread bytes
    fn available(&self) -> usize;

    /// Read the oldest byte, optionally dropping sync afterwards
    fn read(&self, drop_sync: bool) -> RadioResult<u8>;
}

/// Direct-mode receiver with room for `N` unread bytes
///
/// Meant to live in a `static` shared by the bit interrupt and the consumer:
///
/// ```
/// use radio_phy::DirectReceiver;
///
/// static RX: DirectReceiver<64> = DirectReceiver::new();
/// ```
pub struct DirectReceiver<const N: usize> {
    producer: Mutex<Cell<Producer>>,
    frame: FrameBuffer<N>,
}

impl<const N: usize> DirectReceiver<N> {
    /// Create a receiver with no sync word (every bit is payload)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            producer: Mutex::new(Cell::new(Producer::new())),
            frame: FrameBuffer::new(),
        }
    }

    /// Create a receiver searching for `word`
    #[must_use]
    pub const fn with_sync_word(word: SyncWord) -> Self {
        let mut producer = Producer::new();
        producer.sync = SyncState::with_word(word);
        Self {
            producer: Mutex::new(Cell::new(producer)),
            frame: FrameBuffer::new(),
        }
    }

    /// Run `f` on the producer state inside the critical section
    fn with_producer<R>(&self, f: impl FnOnce(&mut Producer) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.producer.borrow(cs);
            let mut producer = cell.get();
            let result = f(&mut producer);
            cell.set(producer);
            result
        })
    }

    fn producer(&self) -> Producer {
        critical_section::with(|cs| self.producer.borrow(cs).get())
    }

    /// Configure the sync word from raw parts
    ///
    /// Fails with [`RadioError::InvalidSyncWord`] if `len > 32`, leaving
    /// the receiver untouched. A zero length puts the receiver in sync
    /// immediately; any other length starts a fresh search.
    pub fn configure_sync_word(&self, value: u32, len: u8) -> RadioResult<()> {
        self.with_producer(|producer| producer.sync.configure(value, len))?;

        #[cfg(feature = "embedded")]
        defmt::debug!("direct sync word {=u32:X}/{}", value, len);
        Ok(())
    }

    /// Replace the sync word
    pub fn set_sync_word(&self, word: SyncWord) {
        self.with_producer(|producer| {
            producer.sync = SyncState::with_word(word);
        });

        #[cfg(feature = "embedded")]
        defmt::debug!("direct sync word {}", word);
    }

    /// Force re-synchronization (no-op with a zero-length sync word)
    pub fn drop_sync(&self) {
        self.with_producer(|producer| producer.sync.drop_sync());
    }

    /// Set the wire bit order for bytes completed from now on
    pub fn set_bit_order(&self, order: BitOrder) {
        self.with_producer(|producer| producer.order = order);
    }

    /// Feed one received bit
    ///
    /// Called from the bit interrupt. While searching, the bit goes into
    /// the sync shift register; a match starts a new frame and rewinds all
    /// cursors. In sync, the bit is packed into the byte under assembly and
    /// every eighth bit commits a byte.
    ///
    /// Returns [`RadioError::Overflow`] when a completed byte finds the
    /// buffer full (the byte is discarded) and for every bit after that
    /// until the consumer has drained the buffer.
    pub fn ingest_bit(&self, bit: bool) -> RadioResult<()> {
        self.with_producer(|producer| self.step(producer, bit))
    }

    fn step(&self, producer: &mut Producer, bit: bool) -> RadioResult<()> {
        if !producer.sync.is_acquired() {
            if producer.sync.shift_in(bit) {
                producer.start_frame();
                self.frame.reset();

                #[cfg(feature = "embedded")]
                defmt::debug!("direct sync {=u32:X}", producer.sync.shift_register());
            }
            return Ok(());
        }

        if producer.overflowed {
            if !self.frame.is_empty() {
                return Err(RadioError::Overflow);
            }
            producer.overflowed = false;
        }

        let mask = 1u8 << producer.bit_pos;
        if bit {
            producer.pending |= mask;
        } else {
            producer.pending &= !mask;
        }
        producer.bit_pos += 1;
        if producer.bit_pos < 8 {
            return Ok(());
        }

        let byte = producer.order.apply(producer.pending);
        producer.pending = 0;
        producer.bit_pos = 0;

        match self.frame.push(byte) {
            Ok(()) => {
                #[cfg(feature = "embedded")]
                defmt::trace!("direct byte {=u8:X}", byte);
                Ok(())
            }
            Err(err) => {
                producer.overflowed = true;

                #[cfg(feature = "embedded")]
                defmt::warn!("direct buffer overflow, {} bytes unread", self.frame.len());
                Err(err)
            }
        }
    }

    /// Number of completed, unread bytes
    #[must_use]
    pub fn available(&self) -> usize {
        self.frame.len()
    }

    /// Read the oldest completed byte
    ///
    /// Fails with [`RadioError::BufferEmpty`] when nothing is available.
    /// With `drop_sync_after`, the next frame must find the sync word again.
    pub fn consume_byte(&self, drop_sync_after: bool) -> RadioResult<u8> {
        let byte = self.frame.pop()?;
        if drop_sync_after {
            self.drop_sync();
        }
        Ok(byte)
    }

    /// Check if the receiver is in sync
    #[must_use]
    pub fn is_acquired(&self) -> bool {
        self.producer().sync.is_acquired()
    }

    /// Get the configured sync word
    #[must_use]
    pub fn sync_word(&self) -> SyncWord {
        self.producer().sync.word()
    }

    /// Get the wire bit order
    #[must_use]
    pub fn bit_order(&self) -> BitOrder {
        self.producer().order
    }

    /// Bit position within the byte under assembly (0-7)
    #[must_use]
    pub fn bit_cursor(&self) -> u8 {
        self.producer().bit_pos
    }

    /// Check if the buffer overflowed and input is being rejected
    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.producer().overflowed
    }

    /// Current write cursor of the frame buffer
    #[must_use]
    pub fn write_cursor(&self) -> usize {
        self.frame.write_cursor()
    }

    /// Current read cursor of the frame buffer
    #[must_use]
    pub fn read_cursor(&self) -> usize {
        self.frame.read_cursor()
    }

    /// Buffer capacity in bytes
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for DirectReceiver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DirectStream for DirectReceiver<N> {
    fn configure_sync_word(&self, value: u32, len: u8) -> RadioResult<()> {
        DirectReceiver::configure_sync_word(self, value, len)
    }

    fn drop_sync(&self) {
        DirectReceiver::drop_sync(self);
    }

    fn ingest_bit(&self, bit: bool) -> RadioResult<()> {
        DirectReceiver::ingest_bit(self, bit)
    }

    fn available(&self) -> usize {
        DirectReceiver::available(self)
    }

    fn read(&self, drop_sync: bool) -> RadioResult<u8> {
        self.consume_byte(drop_sync)
    }
}
