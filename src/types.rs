//! Shared types used across the physical layer
//!
//! Domain types that enforce invariants at construction time, plus the
//! small enums passed to the capability operations.

use core::fmt;

/// Direct-mode synchronization word
///
/// A bit pattern of 0 to 32 bits that marks the start of a frame in the
/// continuous bit stream. The pattern occupies the low `len` bits and is
/// matched MSB-first (the most recently received bit is the LSB).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncWord {
    value: u32,
    len: u8,
}

impl SyncWord {
    /// Longest supported pattern in bits
    pub const MAX_LEN: u8 = crate::config::MAX_SYNC_WORD_BITS;

    /// Empty pattern: every bit is payload, no synchronization required
    pub const NONE: Self = Self { value: 0, len: 0 };

    /// Create a sync word, returns None if `len` exceeds [`Self::MAX_LEN`]
    #[must_use]
    pub const fn new(value: u32, len: u8) -> Option<Self> {
        if len <= Self::MAX_LEN {
            Some(Self { value, len })
        } else {
            None
        }
    }

    /// Get the pattern value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Get the pattern length in bits
    #[must_use]
    pub const fn len(self) -> u8 {
        self.len
    }

    /// Check if this is the empty (pass-through) pattern
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Mask selecting the low `len` bits of the shift register
    #[must_use]
    pub const fn mask(self) -> u32 {
        if self.len == 0 {
            0
        } else {
            u32::MAX >> (32 - self.len as u32)
        }
    }

    /// Check the shift register window against the pattern
    ///
    /// The value is compared unmasked, so a value with bits above `len`
    /// never matches.
    #[must_use]
    pub const fn matches(self, window: u32) -> bool {
        window & self.mask() == self.value
    }
}

impl Default for SyncWord {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for SyncWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyncWord({:#X}/{})", self.value, self.len)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SyncWord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:X}/{}", self.value, self.len);
    }
}

/// Bit order of direct-mode bytes on the wire
///
/// Bits are assembled in arrival order starting at bit 0. The order then
/// decides the transform applied to each completed byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// First received bit is the MSB (assembled byte is bit-reversed)
    #[default]
    MsbFirst,
    /// First received bit is the LSB (assembled byte is stored as-is)
    LsbFirst,
}

impl BitOrder {
    /// Apply the transform to a byte assembled in arrival order
    #[must_use]
    pub const fn apply(self, assembled: u8) -> u8 {
        match self {
            Self::MsbFirst => assembled.reverse_bits(),
            Self::LsbFirst => assembled,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BitOrder {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::MsbFirst => defmt::write!(f, "MSB-first"),
            Self::LsbFirst => defmt::write!(f, "LSB-first"),
        }
    }
}

/// Line encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Non-return-to-zero (no encoding)
    #[default]
    Nrz,
    /// Manchester encoding
    Manchester,
    /// Data whitening
    Whitening,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Encoding {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Nrz => defmt::write!(f, "NRZ"),
            Self::Manchester => defmt::write!(f, "Manchester"),
            Self::Whitening => defmt::write!(f, "Whitening"),
        }
    }
}

/// Gaussian data shaping filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataShaping {
    /// No shaping
    #[default]
    None,
    /// Gaussian filter, BT = 0.3
    Bt0_3,
    /// Gaussian filter, BT = 0.5
    Bt0_5,
    /// Gaussian filter, BT = 0.7
    Bt0_7,
    /// Gaussian filter, BT = 1.0
    Bt1_0,
}

impl DataShaping {
    /// Get the bandwidth-time product (0.0 for no shaping)
    #[must_use]
    pub fn bt(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Bt0_3 => 0.3,
            Self::Bt0_5 => 0.5,
            Self::Bt0_7 => 0.7,
            Self::Bt1_0 => 1.0,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DataShaping {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::None => defmt::write!(f, "none"),
            Self::Bt0_3 => defmt::write!(f, "BT0.3"),
            Self::Bt0_5 => defmt::write!(f, "BT0.5"),
            Self::Bt0_7 => defmt::write!(f, "BT0.7"),
            Self::Bt1_0 => defmt::write!(f, "BT1.0"),
        }
    }
}

/// Standby mode requested from the chip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StandbyMode {
    /// Chip default standby
    #[default]
    Default,
    /// Chip-specific mode code
    Custom(u8),
}

#[cfg(feature = "embedded")]
impl defmt::Format for StandbyMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Default => defmt::write!(f, "default"),
            Self::Custom(mode) => defmt::write!(f, "mode {}", mode),
        }
    }
}

/// Pin identifier as understood by the concrete driver
pub type PinId = u32;

/// Interrupt callback injected into a driver
pub type IrqAction = fn();

/// Timer setup callback for interrupt-timed transfers, given the period in
/// microseconds
pub type TimerSetup = fn(u32);
