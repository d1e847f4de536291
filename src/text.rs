//! Text Adapters
//!
//! Convenience wrappers that move text through the byte-oriented
//! [`PhysicalLayer`] operations. Received text is collected into a
//! fixed-capacity `heapless::String`.
//!
//! A packet received with a CRC error or a damaged header still carries
//! data. Those outcomes are returned as a [`Reception`] with the error in
//! `warning`, leaving the decision to keep the text to the caller.

use heapless::{String, Vec};

use crate::error::{RadioError, RadioResult};
use crate::phy::PhysicalLayer;

/// Data received together with a non-fatal integrity warning
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reception<T> {
    /// Received data
    pub data: T,
    /// Partial-success code ([`RadioError::CrcMismatch`] or
    /// [`RadioError::HeaderDamaged`]), None for a clean reception
    pub warning: Option<RadioError>,
}

impl<T> Reception<T> {
    /// Check if the data arrived without integrity warnings
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.warning.is_none()
    }
}

/// Transmit a string as its UTF-8 bytes
pub fn transmit_str<P: PhysicalLayer + ?Sized>(phy: &mut P, text: &str, addr: u8) -> RadioResult<()> {
    phy.transmit(text.as_bytes(), addr)
}

/// Start an interrupt-driven transmission of a string
pub fn start_transmit_str<P: PhysicalLayer + ?Sized>(
    phy: &mut P,
    text: &str,
    addr: u8,
) -> RadioResult<()> {
    phy.start_transmit(text.as_bytes(), addr)
}

/// Receive a packet as text
///
/// `len` is the expected length; 0 means "unknown", in which case the
/// buffer is sized for [`PhysicalLayer::max_packet_length`] and the text
/// length is taken from [`PhysicalLayer::packet_length`]. Fails with
/// [`RadioError::MemoryAllocationFailed`] if the buffer does not fit in `N`.
pub fn receive_text<const N: usize, P: PhysicalLayer + ?Sized>(
    phy: &mut P,
    len: usize,
) -> RadioResult<Reception<String<N>>> {
    let size = if len == 0 { phy.max_packet_length() } else { len };
    let mut buffer = zeroed::<N>(size)?;

    let warning = partial(phy.receive(&mut buffer))?;

    let length = if len == 0 { phy.packet_length(false) } else { len };
    Ok(Reception {
        data: to_text(&buffer[..length.min(size)]),
        warning,
    })
}

/// Read a packet received by [`PhysicalLayer::start_receive`] as text
///
/// Reads the received packet length; a non-zero `len` below it truncates
/// the read. Fails with [`RadioError::MemoryAllocationFailed`] if the
/// buffer does not fit in `N`.
pub fn read_data_text<const N: usize, P: PhysicalLayer + ?Sized>(
    phy: &mut P,
    len: usize,
) -> RadioResult<Reception<String<N>>> {
    let mut length = phy.packet_length(true);
    if len != 0 && len < length {
        length = len;
    }
    let mut buffer = zeroed::<N>(length)?;

    let warning = partial(phy.read_data(&mut buffer))?;

    Ok(Reception {
        data: to_text(&buffer),
        warning,
    })
}

fn zeroed<const N: usize>(size: usize) -> RadioResult<Vec<u8, N>> {
    let mut buffer = Vec::new();
    buffer
        .resize(size, 0)
        .map_err(|()| RadioError::MemoryAllocationFailed)?;
    Ok(buffer)
}

/// Keep data on success and partial success, fail otherwise
fn partial(result: RadioResult<()>) -> RadioResult<Option<RadioError>> {
    match result {
        Ok(()) => Ok(None),
        Err(err) if err.is_partial() => Ok(Some(err)),
        Err(err) => Err(err),
    }
}

/// Text up to the first NUL byte or invalid UTF-8 sequence
fn to_text<const N: usize>(bytes: &[u8]) -> String<N> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let bytes = &bytes[..end];
    let valid = match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => core::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    };

    let mut text = String::new();
    // Caller sized `bytes` to fit N
    let _ = text.push_str(valid);
    text
}
