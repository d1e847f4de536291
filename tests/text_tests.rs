//! Text Adapter Tests
//!
//! Tests for moving strings through the byte-oriented physical layer.
//! Run with: cargo test --test text_tests

use radio_phy::config::PhyParams;
use radio_phy::text::{read_data_text, receive_text, start_transmit_str, transmit_str};
use radio_phy::{PhysicalLayer, RadioError};

/// Radio replaying one canned packet
struct PacketRadio {
    params: PhyParams,
    payload: &'static [u8],
    outcome: Result<(), RadioError>,
    sent: Vec<u8>,
    sent_addr: Option<u8>,
    requested: Vec<usize>,
}

impl PacketRadio {
    fn new(payload: &'static [u8]) -> Self {
        Self {
            params: PhyParams::new(1.0, 32),
            payload,
            outcome: Ok(()),
            sent: Vec::new(),
            sent_addr: None,
            requested: Vec::new(),
        }
    }

    fn with_outcome(mut self, outcome: Result<(), RadioError>) -> Self {
        self.outcome = outcome;
        self
    }

    fn with_max_packet_length(mut self, len: usize) -> Self {
        self.params = PhyParams::new(1.0, len);
        self
    }

    fn fill(&mut self, data: &mut [u8]) -> Result<(), RadioError> {
        self.requested.push(data.len());
        let n = data.len().min(self.payload.len());
        data[..n].copy_from_slice(&self.payload[..n]);
        self.outcome
    }
}

impl PhysicalLayer for PacketRadio {
    fn params(&self) -> &PhyParams {
        &self.params
    }

    fn transmit(&mut self, data: &[u8], addr: u8) -> Result<(), RadioError> {
        self.sent.extend_from_slice(data);
        self.sent_addr = Some(addr);
        Ok(())
    }

    fn receive(&mut self, data: &mut [u8]) -> Result<(), RadioError> {
        self.fill(data)
    }

    fn read_data(&mut self, data: &mut [u8]) -> Result<(), RadioError> {
        self.fill(data)
    }

    fn packet_length(&mut self, _update: bool) -> usize {
        self.payload.len()
    }
}

// ============================================================================
// Transmit Tests
// ============================================================================

#[test]
fn test_transmit_str_sends_utf8_bytes() {
    let mut radio = PacketRadio::new(b"");
    transmit_str(&mut radio, "héllo", 0x42).unwrap();
    assert_eq!(radio.sent, "héllo".as_bytes());
    assert_eq!(radio.sent_addr, Some(0x42));
}

#[test]
fn test_start_transmit_str_unsupported_by_default() {
    let mut radio = PacketRadio::new(b"");
    assert_eq!(
        start_transmit_str(&mut radio, "hi", 0),
        Err(RadioError::Unsupported)
    );
    assert!(radio.sent.is_empty());
}

#[test]
fn test_transmit_str_through_trait_object() {
    let mut radio = PacketRadio::new(b"");
    let phy: &mut dyn PhysicalLayer = &mut radio;
    transmit_str(phy, "abc", 0).unwrap();
    assert_eq!(radio.sent, b"abc");
}

// ============================================================================
// receive_text Tests
// ============================================================================

#[test]
fn test_receive_unknown_length_uses_packet_length() {
    let mut radio = PacketRadio::new(b"hello");
    let rx = receive_text::<64, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "hello");
    assert!(rx.is_clean());
    // Buffer sized for the largest packet
    assert_eq!(radio.requested, vec![32]);
}

#[test]
fn test_receive_known_length() {
    let mut radio = PacketRadio::new(b"hello world");
    let rx = receive_text::<16, _>(&mut radio, 5).unwrap();
    assert_eq!(rx.data.as_str(), "hello");
    assert_eq!(radio.requested, vec![5]);
}

#[test]
fn test_receive_crc_mismatch_keeps_data() {
    let mut radio = PacketRadio::new(b"noisy").with_outcome(Err(RadioError::CrcMismatch));
    let rx = receive_text::<64, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "noisy");
    assert_eq!(rx.warning, Some(RadioError::CrcMismatch));
    assert!(!rx.is_clean());
}

#[test]
fn test_receive_damaged_header_keeps_data() {
    let mut radio = PacketRadio::new(b"hdr").with_outcome(Err(RadioError::HeaderDamaged));
    let rx = receive_text::<8, _>(&mut radio, 3).unwrap();
    assert_eq!(rx.data.as_str(), "hdr");
    assert_eq!(rx.warning, Some(RadioError::HeaderDamaged));
}

#[test]
fn test_receive_failure_discards_data() {
    let mut radio = PacketRadio::new(b"lost").with_outcome(Err(RadioError::Unsupported));
    assert_eq!(
        receive_text::<64, _>(&mut radio, 0),
        Err(RadioError::Unsupported)
    );
}

#[test]
fn test_receive_buffer_too_small() {
    let mut radio = PacketRadio::new(b"hello");
    assert_eq!(
        receive_text::<4, _>(&mut radio, 5),
        Err(RadioError::MemoryAllocationFailed)
    );
    // Nothing was requested from the radio
    assert!(radio.requested.is_empty());
}

#[test]
fn test_receive_max_packet_length_too_large() {
    let mut radio = PacketRadio::new(b"hi").with_max_packet_length(300);
    assert_eq!(
        receive_text::<255, _>(&mut radio, 0),
        Err(RadioError::MemoryAllocationFailed)
    );
}

#[test]
fn test_receive_stops_at_nul() {
    let mut radio = PacketRadio::new(b"ab\0cd");
    let rx = receive_text::<16, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "ab");
}

#[test]
fn test_receive_stops_at_invalid_utf8() {
    let mut radio = PacketRadio::new(b"ok\xFF\xFEmore");
    let rx = receive_text::<16, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "ok");
}

#[test]
fn test_receive_multibyte_text() {
    let mut radio = PacketRadio::new("ünï".as_bytes());
    let rx = receive_text::<16, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "ünï");
}

#[test]
fn test_receive_unsupported_by_default() {
    struct Bare(PhyParams);
    impl PhysicalLayer for Bare {
        fn params(&self) -> &PhyParams {
            &self.0
        }
    }

    let mut radio = Bare(PhyParams::default());
    assert_eq!(
        receive_text::<255, _>(&mut radio, 0),
        Err(RadioError::Unsupported)
    );
}

// ============================================================================
// read_data_text Tests
// ============================================================================

#[test]
fn test_read_data_full_packet() {
    let mut radio = PacketRadio::new(b"hello");
    let rx = read_data_text::<16, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "hello");
    assert_eq!(radio.requested, vec![5]);
}

#[test]
fn test_read_data_truncates_to_len() {
    let mut radio = PacketRadio::new(b"hello");
    let rx = read_data_text::<16, _>(&mut radio, 3).unwrap();
    assert_eq!(rx.data.as_str(), "hel");
    assert_eq!(radio.requested, vec![3]);
}

#[test]
fn test_read_data_len_above_packet_is_ignored() {
    let mut radio = PacketRadio::new(b"hello");
    let rx = read_data_text::<16, _>(&mut radio, 10).unwrap();
    assert_eq!(rx.data.as_str(), "hello");
    assert_eq!(radio.requested, vec![5]);
}

#[test]
fn test_read_data_crc_mismatch_keeps_data() {
    let mut radio = PacketRadio::new(b"hello").with_outcome(Err(RadioError::CrcMismatch));
    let rx = read_data_text::<16, _>(&mut radio, 0).unwrap();
    assert_eq!(rx.data.as_str(), "hello");
    assert_eq!(rx.warning, Some(RadioError::CrcMismatch));
}

#[test]
fn test_read_data_buffer_too_small() {
    let mut radio = PacketRadio::new(b"hello world");
    assert_eq!(
        read_data_text::<8, _>(&mut radio, 0),
        Err(RadioError::MemoryAllocationFailed)
    );
}
