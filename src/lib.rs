//! Radio Physical Layer
//!
//! This library is the lowest layer of a radio transceiver stack. It provides
//! the capability contract that concrete chip drivers implement, and the
//! direct-mode receive path used when a radio exposes its raw demodulated
//! bit stream instead of buffered packets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CHIP DRIVERS (external)                  │
//! │        implement PhysicalLayer, own a DirectReceiver         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      CAPABILITY LAYER                        │
//! │  PhysicalLayer  │  Text adapters  │  Entropy RNG             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DIRECT MODE                             │
//! │  Sync word matcher  │  Bit packer  │  SPSC frame buffer      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      PIN SAMPLING                            │
//! │     embedded-hal InputPin  │  embedded-hal-async Wait        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! A per-bit interrupt (or a clock edge) calls
//! [`DirectReceiver::ingest_bit`](direct::receiver::DirectReceiver::ingest_bit).
//! Once the sync word is seen, the following bits are packed into bytes that
//! a consumer task drains with `available()` / `consume_byte()`.
//!
//! # Design Principles
//!
//! - **No allocation, no blocking** on the interrupt path
//! - **Single producer, single consumer**: atomics for cursors, a bounded
//!   critical section for producer state
//! - **No unsafe**: shared storage is built from atomics
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Direct-mode receive path
///
/// Sync word matching, bit-to-byte packing and the frame buffer.
pub mod direct;

/// Error types shared by every layer
pub mod error;

/// Pin sampling
///
/// Feeds the direct-mode receiver from `embedded-hal` pins.
pub mod hal;

/// Capability contract for radio chip drivers
pub mod phy;

/// Entropy-derived random numbers
pub mod rng;

/// Text adapters over the byte-oriented capability operations
pub mod text;

/// Shared types used across modules
pub mod types;

/// Configuration and constants
pub mod config;

pub use direct::receiver::{DirectReceiver, DirectStream};
pub use error::{RadioError, RadioResult};
pub use phy::PhysicalLayer;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::direct::receiver::{DirectReceiver, DirectStream};
    pub use crate::error::{RadioError, RadioResult};
    pub use crate::phy::PhysicalLayer;
    pub use crate::rng::EntropySource;
    pub use crate::types::*;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
