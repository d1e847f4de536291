//! Error types
//!
//! Every operation in this crate reports failure through [`RadioError`].
//! Errors are plain values so the interrupt-context path never unwinds.

use core::fmt;

/// Physical layer error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadioError {
    /// Capability not implemented by the concrete driver
    Unsupported,
    /// Requested sync word is longer than 32 bits
    InvalidSyncWord,
    /// Nothing to read from the direct-mode buffer
    BufferEmpty,
    /// Direct-mode buffer is full, the completed byte was discarded
    Overflow,
    /// A buffer of the requested size could not be provided
    MemoryAllocationFailed,
    /// Packet received with a CRC error (data is still readable)
    CrcMismatch,
    /// Packet header damaged (data is still readable)
    HeaderDamaged,
}

impl RadioError {
    /// Check whether this is a partial success that still leaves data to read
    #[must_use]
    pub const fn is_partial(self) -> bool {
        matches!(self, Self::CrcMismatch | Self::HeaderDamaged)
    }
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Unsupported => "operation not supported by this radio",
            Self::InvalidSyncWord => "sync word longer than 32 bits",
            Self::BufferEmpty => "direct-mode buffer is empty",
            Self::Overflow => "direct-mode buffer overflow",
            Self::MemoryAllocationFailed => "buffer too small for requested length",
            Self::CrcMismatch => "CRC mismatch",
            Self::HeaderDamaged => "packet header damaged",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for RadioError {}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unsupported => defmt::write!(f, "Unsupported"),
            Self::InvalidSyncWord => defmt::write!(f, "InvalidSyncWord"),
            Self::BufferEmpty => defmt::write!(f, "BufferEmpty"),
            Self::Overflow => defmt::write!(f, "Overflow"),
            Self::MemoryAllocationFailed => defmt::write!(f, "MemoryAllocationFailed"),
            Self::CrcMismatch => defmt::write!(f, "CrcMismatch"),
            Self::HeaderDamaged => defmt::write!(f, "HeaderDamaged"),
        }
    }
}

/// Physical layer operation result
pub type RadioResult<T> = Result<T, RadioError>;
