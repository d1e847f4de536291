//! Pin Sampling
//!
//! Feeds the direct-mode receiver from GPIO pins. Built on the
//! `embedded-hal` and `embedded-hal-async` traits so any MCU HAL (and host
//! test doubles) can drive it.

pub mod bit_sampler;
