//! Command input abstraction.
//!
//! Inputs arrive as a word of held-command bits. Front-panel buttons and
//! the IR remote map to separate bits so either source can drive the UI;
//! bit 31 is not a button at all but the video-mode-change event flag.

pub const BTN_UP: u32 = 1 << 0;
pub const BTN_DOWN: u32 = 1 << 1;
pub const BTN_LEFT: u32 = 1 << 2;
pub const BTN_RIGHT: u32 = 1 << 3;
pub const BTN_OK: u32 = 1 << 4;
pub const BTN_BACK: u32 = 1 << 5;
pub const BTN_MENU: u32 = 1 << 6;

pub const IR_UP: u32 = 1 << 8;
pub const IR_DOWN: u32 = 1 << 9;
pub const IR_LEFT: u32 = 1 << 10;
pub const IR_RIGHT: u32 = 1 << 11;
pub const IR_OK: u32 = 1 << 12;
pub const IR_BACK: u32 = 1 << 13;
pub const IR_MENU: u32 = 1 << 14;
pub const IR_POWER: u32 = 1 << 15;

/// Set when the video input changed mode since the last acknowledge.
pub const EVT_MODE_CHANGE: u32 = 1 << 31;

/// Polled command source.
pub trait Controls {
    /// Returns the currently pending command bits without consuming them.
    fn held(&mut self) -> u32;

    /// Acknowledges the given bits so they stay hidden until released.
    fn clear(&mut self, mask: u32);

    /// Blocks until no button is held. A latched mode-change event is
    /// not a button and does not hold this up.
    fn wait_for_release(&mut self);
}

/// Acknowledge latch for sources that report raw held state.
///
/// [`filter`](Self::filter) hides suppressed bits from the caller; a bit
/// rearms as soon as the raw state reports it released.
#[derive(Debug, Default, Clone, Copy)]
pub struct PadLatch {
    suppressed: u32,
}

impl PadLatch {
    pub const fn new() -> Self {
        Self { suppressed: 0 }
    }

    pub fn filter(&mut self, raw: u32) -> u32 {
        self.suppressed &= raw;
        raw & !self.suppressed
    }

    pub fn suppress(&mut self, mask: u32) {
        self.suppressed |= mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_hides_suppressed_bits_until_release() {
        let mut latch = PadLatch::new();
        assert_eq!(latch.filter(BTN_OK | BTN_DOWN), BTN_OK | BTN_DOWN);

        latch.suppress(BTN_OK);
        assert_eq!(latch.filter(BTN_OK | BTN_DOWN), BTN_DOWN);
        assert_eq!(latch.filter(BTN_OK), 0);

        // release rearms the bit
        assert_eq!(latch.filter(0), 0);
        assert_eq!(latch.filter(BTN_OK), BTN_OK);
    }

    #[test]
    fn latch_on_unheld_bit_expires_immediately() {
        let mut latch = PadLatch::new();
        latch.suppress(BTN_LEFT);
        assert_eq!(latch.filter(0), 0);
        assert_eq!(latch.filter(BTN_LEFT), BTN_LEFT);
    }
}
