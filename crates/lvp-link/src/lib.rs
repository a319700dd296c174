#![cfg_attr(not(test), no_std)]

//! Driver for the LVP video pipeline FPGA's SPI control port.
//!
//! The FPGA exposes a small register file plus burst windows for the OSD
//! character RAM, the color matrix, the scanline table, and the AVI
//! infoframe. Everything computable is kept in plain modules
//! ([`matrix`], [`scanline`], [`infoframe`], [`chargrid`], [`regs`]) so it
//! can be tested off-target; [`Lvp`] only moves bytes.

pub mod chargrid;
pub mod infoframe;
pub mod matrix;
pub mod regs;
pub mod scanline;

pub use chargrid::CharGrid;

use embedded_hal::spi::{Operation, SpiDevice};

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// Register address or payload outside supported bounds.
    InvalidInput,
}

pub type LvpResult<T, SpiErr> = Result<T, Error<SpiErr>>;

/// Register-level handle on the LVP control port.
#[derive(Debug)]
pub struct Lvp<SPI> {
    spi: SPI,
}

impl<SPI> Lvp<SPI>
where
    SPI: SpiDevice<u8>,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the owned bus.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Checks the identification register against the expected magic.
    pub fn probe(&mut self) -> LvpResult<bool, SPI::Error> {
        Ok(self.read_reg(regs::REG_ID)? == regs::LVP_ID)
    }

    /// Writes one 32-bit register.
    pub fn write_reg(&mut self, addr: u8, value: u32) -> LvpResult<(), SPI::Error> {
        let frame = regs::build_write_frame(addr, value).ok_or(Error::InvalidInput)?;
        self.spi.write(&frame).map_err(Error::Spi)
    }

    /// Reads one 32-bit register.
    pub fn read_reg(&mut self, addr: u8) -> LvpResult<u32, SPI::Error> {
        let command = [regs::read_command(addr).ok_or(Error::InvalidInput)?];
        let mut value = [0u8; 4];
        self.spi
            .transaction(&mut [Operation::Write(&command), Operation::Read(&mut value)])
            .map_err(Error::Spi)?;
        Ok(u32::from_le_bytes(value))
    }

    /// Streams a payload into a burst window.
    pub fn write_burst(&mut self, addr: u8, data: &[u8]) -> LvpResult<(), SPI::Error> {
        let command = [regs::burst_command(addr).ok_or(Error::InvalidInput)?];
        self.spi
            .transaction(&mut [Operation::Write(&command), Operation::Write(data)])
            .map_err(Error::Spi)?;
        Ok(())
    }

    /// Loads the combined output control word.
    pub fn load_output(&mut self, word: u32) -> LvpResult<(), SPI::Error> {
        self.write_reg(regs::REG_OUTPUT, word)
    }

    /// Loads the OSD background word.
    pub fn load_osd_bg(&mut self, word: u32) -> LvpResult<(), SPI::Error> {
        self.write_reg(regs::REG_OSD_BG, word)
    }

    /// Reads the held-command bits (buttons, remote, event latches).
    pub fn read_status(&mut self) -> LvpResult<u32, SPI::Error> {
        self.read_reg(regs::REG_STATUS)
    }

    /// Reads the detected input mode code.
    pub fn read_mode_code(&mut self) -> LvpResult<u32, SPI::Error> {
        self.read_reg(regs::REG_MODE)
    }

    /// Clears latched event bits (only the mode-change latch today).
    pub fn ack_events(&mut self, mask: u32) -> LvpResult<(), SPI::Error> {
        self.write_reg(regs::REG_EVENT_ACK, mask)
    }

    /// Pushes all dirty OSD rows. Rows stay dirty if the transfer fails,
    /// so a retry resumes where it stopped.
    pub fn flush_grid(&mut self, grid: &mut CharGrid) -> LvpResult<(), SPI::Error> {
        while let Some(row) = grid.first_dirty_row() {
            let bytes = grid.encode_row(row).ok_or(Error::InvalidInput)?;
            self.write_reg(regs::REG_OSD_ADDR, (row * chargrid::COLS) as u32)?;
            self.write_burst(regs::WIN_OSD_DATA, &bytes)?;
            grid.mark_clean(row);
        }
        Ok(())
    }

    /// Loads a color matrix into the CSC window.
    pub fn load_csc(&mut self, csc: &matrix::CscMatrix) -> LvpResult<(), SPI::Error> {
        self.write_burst(regs::WIN_CSC, &matrix::pack_csc(csc))
    }

    /// Loads a scanline attenuation table.
    pub fn load_scanline_lut(
        &mut self,
        lut: &[u8; scanline::LUT_LEN],
    ) -> LvpResult<(), SPI::Error> {
        self.write_burst(regs::WIN_SL_LUT, lut)
    }

    /// Assembles and loads an AVI infoframe.
    pub fn load_infoframe(&mut self, params: &infoframe::AviParams) -> LvpResult<(), SPI::Error> {
        let frame = infoframe::build_avi_infoframe(params);
        self.write_burst(regs::WIN_INFOFRAME, &frame)
    }
}
