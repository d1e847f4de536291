//! Direct-Mode Receiver Firmware
//!
//! Entry point for an STM32G474 wired to a radio in direct (continuous)
//! mode. The radio's recovered clock drives an EXTI line; on every rising
//! edge the data pin is sampled into the direct-mode receiver. A second
//! task drains fixed-length frames and logs them over RTT.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::{Duration, Timer};
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use radio_phy::hal::bit_sampler::BitSampler;
use radio_phy::prelude::*;

/// Shared between the sampler (producer) and drain (consumer) tasks
static RECEIVER: DirectReceiver<DIRECT_BUFFER_SIZE> = DirectReceiver::new();

/// Radio whose only capability is GPIO direct-mode reception
struct GpioDirectRadio {
    params: PhyParams,
}

impl PhysicalLayer for GpioDirectRadio {
    fn params(&self) -> &PhyParams {
        &self.params
    }

    fn direct_stream(&self) -> Option<&dyn DirectStream> {
        Some(&RECEIVER)
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Direct-mode receiver v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // Pin names in config::pins; clock on EXTI0
    let clock = ExtiInput::new(p.PA0, p.EXTI0, Pull::None);
    let data = Input::new(p.PA1, Pull::None);
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    info!(
        "DCLK {=str}, DATA {=str}, LED {=str}",
        pins::DIRECT_CLOCK,
        pins::DIRECT_DATA,
        pins::LED_STATUS
    );

    let mut radio = GpioDirectRadio {
        params: PhyParams::default(),
    };
    if let Err(err) = radio.set_direct_sync_word(FIRMWARE_SYNC_WORD, FIRMWARE_SYNC_WORD_LEN) {
        warn!("Sync word rejected: {}", err);
    }

    info!(
        "Waiting for sync {=u32:X}/{} ({} byte frames)",
        FIRMWARE_SYNC_WORD,
        FIRMWARE_SYNC_WORD_LEN,
        FIRMWARE_FRAME_LEN
    );

    spawner.spawn(sampler_task(clock, data)).unwrap();
    spawner.spawn(drain_task(radio, led)).unwrap();
}

/// Sampler task - feeds one bit per clock edge
#[embassy_executor::task]
async fn sampler_task(mut clock: ExtiInput<'static>, data: Input<'static>) {
    let mut sampler = BitSampler::new(data, &RECEIVER);
    loop {
        match sampler.run(&mut clock, 8 * DIRECT_BUFFER_SIZE).await {
            Ok(stats) if stats.overflowed > 0 => {
                warn!("{} bits dropped on overflow", stats.overflowed);
            }
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}

/// Drain task - collects frames and re-arms sync after each one
#[embassy_executor::task]
async fn drain_task(mut radio: GpioDirectRadio, mut led: Output<'static>) {
    let mut frame: Vec<u8, FIRMWARE_FRAME_LEN> = Vec::new();
    loop {
        while radio.available() > 0 {
            let last = frame.len() + 1 == FIRMWARE_FRAME_LEN;
            match radio.read(last) {
                Ok(byte) => {
                    let _ = frame.push(byte);
                }
                Err(err) => {
                    warn!("Direct read failed: {}", err);
                    break;
                }
            }

            if last {
                info!("Frame {=[u8]:X}", frame.as_slice());
                frame.clear();
                led.toggle();
            }
        }
        Timer::after(Duration::from_millis(DRAIN_POLL_MS)).await;
    }
}
