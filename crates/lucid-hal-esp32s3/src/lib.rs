#![cfg_attr(not(test), no_std)]

//! Board support for the Lucid ESP32-S3 controller.
//!
//! The controller owns exactly one SPI link to the LVP, and the UI core
//! wants three independent facades on it (screen, pad, pipeline). The
//! driver therefore sits in a [`LvpShared`] cell that each adapter
//! borrows per call. Adapters are generic over
//! `embedded_hal::spi::SpiDevice`, which keeps them testable off the
//! board; the ESP-specific wiring happens in the firmware binary.

pub mod link;
pub mod osd;
pub mod pad;
pub mod pipeline;

#[cfg(test)]
mod mock_spi;

pub use link::LvpShared;
pub use osd::OsdGrid;
pub use pad::PadPort;
pub use pipeline::LvpPipeline;
