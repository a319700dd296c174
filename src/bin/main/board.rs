//! ESP32-S3 firmware: board bring-up and the forever loop.
//!
//! The controller's single job is the settings UI, so the main loop
//! just watches the pad for the menu key and the mode-change latch.
//! Everything else (video path, OSD mixing, input sampling) lives in
//! the LVP; this side only feeds it registers over SPI.

use embedded_hal::spi::SpiDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::master::Spi;
use esp_hal::time::Rate;
use log::{LevelFilter, info, warn};
use lucid_core::input::{BTN_MENU, Controls, EVT_MODE_CHANGE, IR_MENU};
use lucid_core::pipeline::VideoPipeline;
use lucid_core::settings::{SettingsBank, VideoMode, WordId};
use lucid_hal_esp32s3::{LvpPipeline, LvpShared, OsdGrid, PadPort};
use lvp_link::Lvp;

use crate::shell;

const LVP_SPI_HZ: u32 = 10_000_000;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: lucid starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Wiring used by the rev B board:
    // CLK=GPIO12, MOSI=GPIO11, MISO=GPIO13, CS=GPIO10
    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(LVP_SPI_HZ))
        .with_mode(esp_hal::spi::Mode::_0);
    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO12)
        .with_mosi(peripherals.GPIO11)
        .with_miso(peripherals.GPIO13);
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let device = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();

    let link = LvpShared::new(Lvp::new(device));
    match link.with(|lvp| lvp.probe()) {
        Ok(true) => info!("lvp: probe ok"),
        Ok(false) => warn!("lvp: unexpected id, continuing anyway"),
        Err(err) => warn!("lvp: probe failed: {err:?}"),
    }

    let mut screen = OsdGrid::new(&link);
    let mut pad = PadPort::new(&link, Delay::new());
    let mut pipeline = LvpPipeline::new(&link);
    let mut bank = SettingsBank::new();

    sync_active_mode(&link, &mut bank);
    push_all(&mut pipeline, &bank);
    screen.clear();
    info!("lucid ready, mode {}", bank.active_mode().label());

    loop {
        let held = pad.held();

        if held & EVT_MODE_CHANGE != 0 {
            sync_active_mode(&link, &mut bank);
            pipeline.apply_output(bank.combined());
            pipeline.update_infoframe(bank.active_mode(), &bank);
            pad.clear(EVT_MODE_CHANGE);
            continue;
        }

        if held & (BTN_MENU | IR_MENU) != 0 {
            pad.clear(BTN_MENU | IR_MENU);
            shell::run_session(&mut bank, &mut pipeline, &mut screen, &mut pad);
            continue;
        }

        // stray presses outside the menu are consumed, not acted on
        pad.clear(held);
    }
}

fn sync_active_mode<SPI>(link: &LvpShared<SPI>, bank: &mut SettingsBank)
where
    SPI: SpiDevice<u8>,
{
    match link.with(|lvp| lvp.read_mode_code()) {
        Ok(code) => {
            let mode = VideoMode::from_index(code as usize & 0x7);
            info!("video input: {}", mode.label());
            bank.set_active_mode(mode);
        }
        Err(err) => warn!("lvp: mode read failed: {err:?}"),
    }
}

fn push_all(pipeline: &mut dyn VideoPipeline, bank: &SettingsBank) {
    pipeline.apply_output(bank.combined());
    pipeline.apply_osd_bg(bank.word(WordId::OsdBg));
    pipeline.update_color_matrix(bank);
    pipeline.update_scanlines(bank);
    pipeline.update_infoframe(bank.active_mode(), bank);
}
