//! Direct-Mode Bit Sampler
//!
//! Reads the radio's demodulated data pin and hands each bit to a
//! [`DirectStream`]. Sampling is either driven from a bit interrupt
//! ([`BitSampler::sample`]) or paced by the radio's recovered clock pin
//! ([`BitSampler::run`]).

use core::fmt;

use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::direct::receiver::DirectStream;
use crate::error::RadioError;

/// Sampling error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleError<E> {
    /// Pin read or wait failed
    Pin(E),
    /// Receiver rejected the bit
    Radio(RadioError),
}

impl<E> From<RadioError> for SampleError<E> {
    fn from(err: RadioError) -> Self {
        Self::Radio(err)
    }
}

impl<E: fmt::Debug> fmt::Display for SampleError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(err) => write!(f, "pin error: {err:?}"),
            Self::Radio(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl<E> defmt::Format for SampleError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Pin(_) => defmt::write!(f, "Pin"),
            Self::Radio(err) => defmt::write!(f, "Radio({})", err),
        }
    }
}

/// Outcome of a clocked sampling run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Bits read from the pin and offered to the receiver
    pub sampled: usize,
    /// Bits rejected because the receiver buffer was full
    pub overflowed: usize,
}

/// Data pin bound to a direct-mode receiver
pub struct BitSampler<'a, P, S: ?Sized> {
    data: P,
    stream: &'a S,
    inverted: bool,
}

impl<'a, P, S> BitSampler<'a, P, S>
where
    P: InputPin,
    S: DirectStream + ?Sized,
{
    /// Bind a data pin (high = 1) to a receiver
    #[must_use]
    pub fn new(data: P, stream: &'a S) -> Self {
        Self {
            data,
            stream,
            inverted: false,
        }
    }

    /// Bind a data pin with inverted polarity (low = 1)
    #[must_use]
    pub fn inverted(data: P, stream: &'a S) -> Self {
        Self {
            data,
            stream,
            inverted: true,
        }
    }

    /// Check if the pin polarity is inverted
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Read the data pin once and feed the bit to the receiver
    ///
    /// Call from the bit interrupt handler.
    pub fn sample(&mut self) -> Result<bool, SampleError<P::Error>> {
        let bit = self.data.is_high().map_err(SampleError::Pin)? != self.inverted;
        self.stream.ingest_bit(bit)?;
        Ok(bit)
    }

    /// Wait for a rising clock edge, then sample
    pub async fn sample_on_edge<C>(&mut self, clock: &mut C) -> Result<bool, SampleError<P::Error>>
    where
        C: Wait<Error = P::Error>,
    {
        clock.wait_for_rising_edge().await.map_err(SampleError::Pin)?;
        self.sample()
    }

    /// Sample `bits` clocked bits
    ///
    /// Stops at the first pin error. Overflow is counted and sampling goes
    /// on, so the receiver resumes as soon as the consumer has drained it.
    pub async fn run<C>(&mut self, clock: &mut C, bits: usize) -> Result<RunStats, P::Error>
    where
        C: Wait<Error = P::Error>,
    {
        let mut stats = RunStats::default();
        for _ in 0..bits {
            match self.sample_on_edge(clock).await {
                Ok(_) => {}
                Err(SampleError::Pin(err)) => return Err(err),
                Err(SampleError::Radio(_)) => stats.overflowed += 1,
            }
            stats.sampled += 1;
        }
        Ok(stats)
    }

    /// Release the data pin
    pub fn release(self) -> P {
        self.data
    }
}
