#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

//! Lucid firmware entry point.
//!
//! On the ESP32-S3 this drives the real LVP over SPI. On a host it runs
//! the same menu shell inside a terminal simulator instead, which is
//! how the UI gets exercised without a board attached.

#[path = "main/shell.rs"]
mod shell;

#[cfg(target_os = "none")]
#[path = "main/board.rs"]
mod board;

#[cfg(not(target_os = "none"))]
#[path = "main/sim.rs"]
mod sim;

#[cfg(not(target_os = "none"))]
fn main() {
    sim::run();
}
