//! Shadow buffer for the 40x25 OSD character RAM.
//!
//! Each cell is one 16-bit word: glyph code in the low byte, attribute
//! bits above it. The grid tracks dirty rows so a flush only transfers
//! lines that actually changed.

/// Grid width in cells.
pub const COLS: usize = 40;
/// Grid height in cells.
pub const ROWS: usize = 25;
/// Bytes per encoded row.
pub const ROW_BYTES: usize = COLS * 2;

/// Renders the glyph in the dim text color.
pub const ATTR_DIM_TEXT: u16 = 1 << 8;
/// Renders the cell background in the dim color.
pub const ATTR_DIM_BG: u16 = 1 << 9;

/// Box-drawing glyph codes understood by the OSD font.
pub const GLYPH_CORNER_TL: u8 = 1;
pub const GLYPH_CORNER_TR: u8 = 2;
pub const GLYPH_CORNER_BL: u8 = 3;
pub const GLYPH_CORNER_BR: u8 = 4;
pub const GLYPH_EDGE_H: u8 = 5;
pub const GLYPH_EDGE_V: u8 = 6;

/// In-memory copy of the OSD character RAM with per-row dirty tracking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharGrid {
    cells: [[u16; COLS]; ROWS],
    dirty: u32,
}

impl CharGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[0; COLS]; ROWS],
            dirty: 0,
        }
    }

    /// Reads one cell, `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<u16> {
        if x >= COLS || y >= ROWS {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Writes one cell. Returns `false` outside the grid. Writing the
    /// value already present does not dirty the row.
    pub fn put(&mut self, x: usize, y: usize, cell: u16) -> bool {
        if x >= COLS || y >= ROWS {
            return false;
        }
        if self.cells[y][x] != cell {
            self.cells[y][x] = cell;
            self.dirty |= 1 << y;
        }
        true
    }

    /// Fills a rectangle, silently clipped to the grid.
    pub fn fill(&mut self, x: usize, y: usize, width: usize, height: usize, cell: u16) {
        for row in y..(y + height).min(ROWS) {
            for col in x..(x + width).min(COLS) {
                if self.cells[row][col] != cell {
                    self.cells[row][col] = cell;
                    self.dirty |= 1 << row;
                }
            }
        }
    }

    /// Blanks the whole grid.
    pub fn clear(&mut self) {
        self.fill(0, 0, COLS, ROWS, 0);
    }

    /// Marks every row dirty so the next flush rewrites the whole RAM,
    /// whatever the hardware currently holds.
    pub fn invalidate(&mut self) {
        self.dirty = (1 << ROWS) - 1;
    }

    /// Bitmask of rows changed since their last flush.
    pub fn dirty_rows(&self) -> u32 {
        self.dirty
    }

    /// Lowest dirty row index, if any.
    pub fn first_dirty_row(&self) -> Option<usize> {
        if self.dirty == 0 {
            return None;
        }
        Some(self.dirty.trailing_zeros() as usize)
    }

    /// Marks one row as flushed.
    pub fn mark_clean(&mut self, row: usize) {
        if row < ROWS {
            self.dirty &= !(1 << row);
        }
    }

    /// Serializes one row for the OSD data window, little endian per
    /// cell. `None` outside the grid.
    pub fn encode_row(&self, row: usize) -> Option<[u8; ROW_BYTES]> {
        if row >= ROWS {
            return None;
        }
        let mut bytes = [0u8; ROW_BYTES];
        for (col, cell) in self.cells[row].iter().enumerate() {
            let le = cell.to_le_bytes();
            bytes[col * 2] = le[0];
            bytes[col * 2 + 1] = le[1];
        }
        Some(bytes)
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_dirties_only_the_touched_row() {
        let mut grid = CharGrid::new();
        assert!(grid.put(3, 7, b'A' as u16));
        assert_eq!(grid.dirty_rows(), 1 << 7);
        assert_eq!(grid.cell(3, 7), Some(b'A' as u16));
    }

    #[test]
    fn rewriting_the_same_cell_stays_clean() {
        let mut grid = CharGrid::new();
        grid.put(0, 0, 0x0141);
        grid.mark_clean(0);
        grid.put(0, 0, 0x0141);
        assert_eq!(grid.dirty_rows(), 0);
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut grid = CharGrid::new();
        assert!(!grid.put(COLS, 0, 1));
        assert!(!grid.put(0, ROWS, 1));
        assert_eq!(grid.cell(COLS, 0), None);
        assert_eq!(grid.encode_row(ROWS), None);
        assert_eq!(grid.dirty_rows(), 0);
    }

    #[test]
    fn fill_clips_to_the_grid_edge() {
        let mut grid = CharGrid::new();
        grid.fill(COLS - 2, ROWS - 1, 10, 10, b'#' as u16);
        assert_eq!(grid.cell(COLS - 1, ROWS - 1), Some(b'#' as u16));
        assert_eq!(grid.dirty_rows(), 1 << (ROWS - 1));
    }

    #[test]
    fn flush_order_walks_rows_bottom_up_from_the_lowest() {
        let mut grid = CharGrid::new();
        grid.put(0, 12, 1);
        grid.put(0, 3, 1);
        assert_eq!(grid.first_dirty_row(), Some(3));
        grid.mark_clean(3);
        assert_eq!(grid.first_dirty_row(), Some(12));
        grid.mark_clean(12);
        assert_eq!(grid.first_dirty_row(), None);
    }

    #[test]
    fn invalidate_marks_every_row() {
        let mut grid = CharGrid::new();
        grid.invalidate();
        assert_eq!(grid.dirty_rows().count_ones() as usize, ROWS);
        for row in 0..ROWS {
            assert_eq!(grid.first_dirty_row(), Some(row));
            grid.mark_clean(row);
        }
    }

    #[test]
    fn encode_row_interleaves_little_endian_cells() {
        let mut grid = CharGrid::new();
        grid.put(0, 0, 0x0141);
        grid.put(1, 0, 0x0242);
        let bytes = grid.encode_row(0).unwrap();
        assert_eq!(&bytes[..4], &[0x41, 0x01, 0x42, 0x02]);
    }
}
