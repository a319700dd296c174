//! Pad and remote input adapter.
//!
//! The LVP samples the front-panel pad and the IR receiver into its
//! status register. Button bits are level-based, so an acknowledge
//! latch hides consumed presses until the key is released. The
//! mode-change bit is latched in hardware instead and needs an
//! explicit register acknowledge.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use log::warn;
use lucid_core::input::{Controls, EVT_MODE_CHANGE, PadLatch};

use crate::link::LvpShared;

const POLL_INTERVAL_US: u32 = 2_000;

pub struct PadPort<'a, SPI, D> {
    link: &'a LvpShared<SPI>,
    delay: D,
    latch: PadLatch,
}

impl<'a, SPI, D> PadPort<'a, SPI, D>
where
    SPI: SpiDevice<u8>,
    D: DelayNs,
{
    pub fn new(link: &'a LvpShared<SPI>, delay: D) -> Self {
        Self {
            link,
            delay,
            latch: PadLatch::new(),
        }
    }

    fn read_raw(&mut self) -> u32 {
        match self.link.with(|lvp| lvp.read_status()) {
            Ok(bits) => bits,
            Err(err) => {
                warn!("pad: status read failed: {err:?}");
                0
            }
        }
    }
}

impl<SPI, D> Controls for PadPort<'_, SPI, D>
where
    SPI: SpiDevice<u8>,
    D: DelayNs,
{
    fn held(&mut self) -> u32 {
        self.delay.delay_us(POLL_INTERVAL_US);
        let raw = self.read_raw();
        self.latch.filter(raw)
    }

    fn clear(&mut self, mask: u32) {
        if mask & EVT_MODE_CHANGE != 0 {
            if let Err(err) = self.link.with(|lvp| lvp.ack_events(EVT_MODE_CHANGE)) {
                warn!("pad: event ack failed: {err:?}");
            }
        }
        self.latch.suppress(mask & !EVT_MODE_CHANGE);
    }

    fn wait_for_release(&mut self) {
        // the event latch is not a key, it must not hold this up
        while self.read_raw() & !EVT_MODE_CHANGE != 0 {
            self.delay.delay_us(POLL_INTERVAL_US);
        }
    }
}
