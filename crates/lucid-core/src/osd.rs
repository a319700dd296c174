//! Character-cell OSD abstraction consumed by the menu renderer.

/// OSD text grid width in cells.
pub const SCREEN_COLS: u8 = 40;
/// OSD text grid height in cells.
pub const SCREEN_ROWS: u8 = 25;

/// Charset index of the fully transparent cell.
pub const GLYPH_BLANK: u8 = 0;
/// Charset index of the cursor marker drawn left of the selected row.
pub const GLYPH_MARKER: u8 = 9;
/// Plain space on an opaque background.
pub const GLYPH_SPACE: u8 = b' ';

/// One OSD cell write request: charset index plus background choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub ch: u8,
    pub dim_bg: bool,
}

impl Glyph {
    pub const fn new(ch: u8) -> Self {
        Self { ch, dim_bg: false }
    }

    pub const fn dimmed(ch: u8) -> Self {
        Self { ch, dim_bg: true }
    }
}

/// Text-mode OSD output.
///
/// Coordinates are character cells with the origin in the top-left corner.
/// Calls block until the write is visible; the menu code relies on that to
/// keep partial repaints tear-free.
pub trait OsdScreen {
    /// Fills a rectangle with one glyph.
    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, glyph: Glyph);

    /// Draws a single-line box border along the edge of the rectangle.
    fn draw_border(&mut self, x: u8, y: u8, width: u8, height: u8);

    /// Moves the text cursor.
    fn goto(&mut self, x: u8, y: u8);

    /// Writes ASCII text at the cursor using the current attributes.
    fn put_str(&mut self, text: &str);

    /// Selects text and background dimming for following writes.
    fn set_attr(&mut self, dim_text: bool, dim_bg: bool);
}
