//! OSD screen adapter over the LVP character RAM.

use embedded_hal::spi::SpiDevice;
use log::warn;
use lucid_core::osd::{Glyph, OsdScreen};
use lvp_link::CharGrid;
use lvp_link::chargrid::{
    ATTR_DIM_BG, ATTR_DIM_TEXT, GLYPH_CORNER_BL, GLYPH_CORNER_BR, GLYPH_CORNER_TL,
    GLYPH_CORNER_TR, GLYPH_EDGE_H, GLYPH_EDGE_V,
};

use crate::link::LvpShared;

/// Character screen that mirrors every write into the LVP.
///
/// Writes land in a shadow grid first and the dirty rows are flushed
/// before the call returns, so the panel never shows a half-drawn
/// update.
pub struct OsdGrid<'a, SPI> {
    link: &'a LvpShared<SPI>,
    grid: CharGrid,
    cursor: (u8, u8),
    attr: u16,
}

impl<'a, SPI> OsdGrid<'a, SPI>
where
    SPI: SpiDevice<u8>,
{
    pub fn new(link: &'a LvpShared<SPI>) -> Self {
        Self {
            link,
            grid: CharGrid::new(),
            cursor: (0, 0),
            attr: ATTR_DIM_BG,
        }
    }

    /// Blanks the whole grid, which hides the OSD. The panel RAM may hold
    /// stale cells from before a reset, so every row is rewritten.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.grid.invalidate();
        self.flush();
    }

    fn flush(&mut self) {
        if let Err(err) = self.link.with(|lvp| lvp.flush_grid(&mut self.grid)) {
            warn!("osd: flush failed: {err:?}");
        }
    }
}

fn encode(glyph: Glyph) -> u16 {
    let mut cell = u16::from(glyph.ch);
    if glyph.dim_bg {
        cell |= ATTR_DIM_BG;
    }
    cell
}

impl<SPI> OsdScreen for OsdGrid<'_, SPI>
where
    SPI: SpiDevice<u8>,
{
    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, glyph: Glyph) {
        self.grid.fill(
            x as usize,
            y as usize,
            width as usize,
            height as usize,
            encode(glyph),
        );
        self.flush();
    }

    fn draw_border(&mut self, x: u8, y: u8, width: u8, height: u8) {
        if width < 2 || height < 2 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let (w, h) = (width as usize, height as usize);
        let line = |ch: u8| u16::from(ch) | ATTR_DIM_BG;

        self.grid.put(x, y, line(GLYPH_CORNER_TL));
        self.grid.put(x + w - 1, y, line(GLYPH_CORNER_TR));
        self.grid.put(x, y + h - 1, line(GLYPH_CORNER_BL));
        self.grid.put(x + w - 1, y + h - 1, line(GLYPH_CORNER_BR));
        self.grid.fill(x + 1, y, w - 2, 1, line(GLYPH_EDGE_H));
        self.grid.fill(x + 1, y + h - 1, w - 2, 1, line(GLYPH_EDGE_H));
        self.grid.fill(x, y + 1, 1, h - 2, line(GLYPH_EDGE_V));
        self.grid.fill(x + w - 1, y + 1, 1, h - 2, line(GLYPH_EDGE_V));
        self.flush();
    }

    fn goto(&mut self, x: u8, y: u8) {
        self.cursor = (x, y);
    }

    fn put_str(&mut self, text: &str) {
        let y = self.cursor.1 as usize;
        for byte in text.bytes() {
            if !self.grid.put(self.cursor.0 as usize, y, u16::from(byte) | self.attr) {
                break;
            }
            self.cursor.0 += 1;
        }
        self.flush();
    }

    fn set_attr(&mut self, dim_text: bool, dim_bg: bool) {
        let mut attr = 0;
        if dim_text {
            attr |= ATTR_DIM_TEXT;
        }
        if dim_bg {
            attr |= ATTR_DIM_BG;
        }
        self.attr = attr;
    }
}
