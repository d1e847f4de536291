//! Direct-Mode Frame Buffer
//!
//! Single-producer/single-consumer byte buffer shared between the bit
//! ingestion path (interrupt context) and a consumer task.
//!
//! # Memory Ordering
//!
//! - Producer stores the byte, then publishes it with a `Release` store of
//!   the write cursor
//! - Consumer loads the write cursor with `Acquire` before reading storage
//! - Consumer advances the read cursor with a compare-exchange, so a frame
//!   reset by the producer makes the consumer retry instead of moving a
//!   cursor that was just rewound
//! - A reset rewinds the write cursor before the read cursor. A consumer
//!   that acquires the rewound read cursor also sees the rewound write
//!   cursor and never reads a slot of the previous frame as new data
//!
//! Cursors are free-running positions over `0..WRAP`, where `WRAP` is the
//! largest multiple of `N` that fits a `usize`. Byte `p` lives in
//! `storage[p % N]`, which stays contiguous when the cursors wrap. The number
//! of readable bytes is always the wrapping distance between the cursors.
//!
//! A pop that started before a reset can still complete against position 0
//! and leave the read cursor one past the write cursor. That distance is
//! larger than `N`, which no valid state produces: the consumer treats it as
//! empty and the producer's next push moves the read cursor back.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::error::{RadioError, RadioResult};

/// SPSC frame buffer holding up to `N` completed bytes
pub struct FrameBuffer<const N: usize> {
    /// Byte slots
    storage: [AtomicU8; N],
    /// Position of the next byte to write (producer owned)
    write: AtomicUsize,
    /// Position of the next byte to read (consumer owned)
    read: AtomicUsize,
}

impl<const N: usize> FrameBuffer<N> {
    /// Cursor positions run over `0..WRAP`
    const WRAP: usize = usize::MAX - usize::MAX % N;

    /// Create an empty buffer
    ///
    /// # Panics
    ///
    /// Panics at compile time (in const context) if N is zero.
    #[must_use]
    pub const fn new() -> Self {
        assert!(N > 0, "frame buffer capacity must be non-zero");

        Self {
            storage: [const { AtomicU8::new(0) }; N],
            write: AtomicUsize::new(0),
            read: AtomicUsize::new(0),
        }
    }

    /// Get the buffer capacity in bytes
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of completed, unread bytes
    #[must_use]
    pub fn len(&self) -> usize {
        let read = self.read.load(Ordering::Acquire);
        let write = self.write.load(Ordering::Acquire);
        match Self::distance(read, write) {
            pending if pending > N => 0,
            pending => pending,
        }
    }

    /// Check if there is nothing to read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if another byte would overflow
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= N
    }

    /// Current write cursor
    #[must_use]
    pub fn write_cursor(&self) -> usize {
        self.write.load(Ordering::Acquire)
    }

    /// Current read cursor
    #[must_use]
    pub fn read_cursor(&self) -> usize {
        self.read.load(Ordering::Acquire)
    }

    /// Commit one completed byte (producer only)
    ///
    /// Fails with [`RadioError::Overflow`] when all `N` slots hold unread
    /// bytes. Unread bytes are never overwritten.
    pub fn push(&self, byte: u8) -> RadioResult<()> {
        let write = self.write.load(Ordering::Relaxed);
        let mut read = self.read.load(Ordering::Acquire);
        if Self::distance(read, write) > N {
            // Pop raced a reset and moved past the write cursor
            read = match self.read.compare_exchange(
                read,
                write,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => write,
                Err(current) => current,
            };
        }
        if Self::distance(read, write) >= N {
            return Err(RadioError::Overflow);
        }

        self.storage[write % N].store(byte, Ordering::Relaxed);
        self.write.store(Self::advance(write), Ordering::Release);
        Ok(())
    }

    /// Take the oldest unread byte (consumer only)
    ///
    /// Fails with [`RadioError::BufferEmpty`] without touching the read
    /// cursor when nothing is available.
    pub fn pop(&self) -> RadioResult<u8> {
        loop {
            let read = self.read.load(Ordering::Acquire);
            let write = self.write.load(Ordering::Acquire);
            let pending = Self::distance(read, write);
            if pending == 0 || pending > N {
                return Err(RadioError::BufferEmpty);
            }

            let byte = self.storage[read % N].load(Ordering::Relaxed);
            if self
                .read
                .compare_exchange(read, Self::advance(read), Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Ok(byte);
            }
        }
    }

    /// Rewind both cursors to the start of a new frame (producer only)
    ///
    /// The write cursor is rewound first, so a consumer that sees the read
    /// cursor at 0 also sees an empty frame.
    pub fn reset(&self) {
        self.write.store(0, Ordering::Release);
        self.read.store(0, Ordering::Release);
    }

    /// Next cursor position
    const fn advance(pos: usize) -> usize {
        if pos + 1 >= Self::WRAP {
            0
        } else {
            pos + 1
        }
    }

    /// Bytes between the cursors, modulo `WRAP`
    const fn distance(read: usize, write: usize) -> usize {
        if write >= read {
            write - read
        } else {
            Self::WRAP - read + write
        }
    }

    #[cfg(test)]
    fn with_cursors(read: usize, write: usize) -> Self {
        let buffer = Self::new();
        buffer.read.store(read, Ordering::Relaxed);
        buffer.write.store(write, Ordering::Relaxed);
        buffer
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
