//! Direct-Mode Receive Path
//!
//! Turns an interrupt-delivered bit stream into bytes:
//! - Sync word matching over a rolling shift register
//! - Bit-to-byte packing with a configurable wire bit order
//! - Single-producer/single-consumer frame buffer

pub mod sync;
pub mod buffer;
pub mod receiver;
