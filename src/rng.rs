//! Entropy-Derived Random Numbers
//!
//! Bounded pseudorandom integers built from single random bytes supplied by
//! the radio hardware (typically noise-floor sampling).
//!
//! These numbers are NOT cryptographically secure. Their quality is that of
//! the entropy source; with [`NullEntropy`] (what a driver without a
//! hardware source provides) every draw is 0.

/// Source of single random bytes
pub trait EntropySource {
    /// Draw one byte from the hardware
    fn random_byte(&mut self) -> u8;
}

impl<F: FnMut() -> u8> EntropySource for F {
    fn random_byte(&mut self) -> u8 {
        self()
    }
}

/// Entropy source for radios without one
///
/// Always yields 0, so every derived number is 0: output is degenerate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullEntropy;

impl EntropySource for NullEntropy {
    fn random_byte(&mut self) -> u8 {
        0
    }
}

/// Draw a non-negative 31-bit number from four entropy bytes
fn draw<E: EntropySource + ?Sized>(source: &mut E) -> i32 {
    let mut bytes = [0u8; 4];
    for byte in &mut bytes {
        *byte = source.random_byte();
    }

    let raw = i32::from_be_bytes(bytes);

    #[cfg(feature = "embedded")]
    defmt::debug!("rng raw {}", raw);

    raw.checked_abs().unwrap_or(i32::MAX)
}

/// Random number in `0..max`
///
/// Returns 0 when `max` is 0. A negative `max` yields a value in `0..|max|`.
pub fn random<E: EntropySource + ?Sized>(source: &mut E, max: i32) -> i32 {
    if max == 0 {
        return 0;
    }
    draw(source) % max
}

/// Random number in `min..max`
///
/// Returns `min` when `min >= max`.
pub fn random_range<E: EntropySource + ?Sized>(source: &mut E, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }

    // Span up to 2^32 - 1 does not fit i32
    let span = i64::from(max) - i64::from(min);
    let offset = i64::from(draw(source)) % span;
    // min + offset < max, always within i32
    i32::try_from(i64::from(min) + offset).unwrap_or(min)
}
