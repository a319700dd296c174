//! Hardware-independent core of the Lucid video processor UI.
//!
//! Everything in this crate runs identically on the ESP32-S3 firmware and
//! on the host simulator: settings storage, the on-screen menu engine, and
//! the screen definitions. Hardware access goes through the [`osd`],
//! [`input`], and [`pipeline`] traits.

#![cfg_attr(not(test), no_std)]

pub mod input;
pub mod menu;
pub mod osd;
pub mod pipeline;
pub mod screens;
pub mod settings;
