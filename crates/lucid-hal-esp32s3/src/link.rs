//! Shared handle on the LVP SPI driver.

use core::cell::RefCell;

use embedded_hal::spi::SpiDevice;
use lvp_link::Lvp;

/// Lets the screen, pad and pipeline adapters hold the one driver at
/// the same time.
///
/// The UI is a single blocking loop, so borrows never overlap and the
/// `RefCell` never observes contention.
pub struct LvpShared<SPI> {
    lvp: RefCell<Lvp<SPI>>,
}

impl<SPI> LvpShared<SPI>
where
    SPI: SpiDevice<u8>,
{
    pub fn new(lvp: Lvp<SPI>) -> Self {
        Self {
            lvp: RefCell::new(lvp),
        }
    }

    /// Runs one driver operation.
    pub fn with<R>(&self, op: impl FnOnce(&mut Lvp<SPI>) -> R) -> R {
        op(&mut self.lvp.borrow_mut())
    }

    pub fn into_inner(self) -> Lvp<SPI> {
        self.lvp.into_inner()
    }
}
