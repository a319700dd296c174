//! Per-kind display rules: clip range, column width, text form.

use core::fmt::Write;

use heapless::String;

/// Upper bound on a formatted value, in bytes.
pub const VALUE_TEXT_MAX: usize = 8;

/// Semantic type of a bound value. Governs clipping, the column a value
/// occupies at the right edge of a menu, and its text form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Bool,
    EvenOdd,
    AnalogMode,
    Byte,
    Signed99,
    Signed127,
    FixPoint256,
    FixPoint128,
    ProfileOrOff,
    Profile,
    LumaIndex,
    ColorMode,
}

/// Inclusive value bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClipRange {
    pub lower: i32,
    pub upper: i32,
}

impl Kind {
    pub const fn clip_range(self) -> ClipRange {
        let (lower, upper) = match self {
            Kind::Bool | Kind::EvenOdd => (0, 1),
            Kind::AnalogMode | Kind::ProfileOrOff | Kind::ColorMode => (0, 3),
            Kind::Byte | Kind::FixPoint128 => (0, 255),
            Kind::Signed99 => (-99, 99),
            Kind::Signed127 => (-128, 127),
            Kind::FixPoint256 => (0, 256),
            Kind::Profile => (1, 3),
            Kind::LumaIndex => (16, 235),
        };
        ClipRange { lower, upper }
    }

    /// Width of the value column, measured from the menu's right edge.
    pub const fn column(self) -> u8 {
        match self {
            Kind::AnalogMode | Kind::ColorMode => 7,
            Kind::FixPoint256 | Kind::FixPoint128 => 8,
            _ => 6,
        }
    }

    /// Kinds that toggle on confirm instead of accepting increments.
    pub const fn toggles(self) -> bool {
        matches!(self, Kind::Bool | Kind::EvenOdd)
    }
}

/// Clamps `value` into the kind's range. Applied after every step, so a
/// value at a bound stays put instead of wrapping.
pub fn clip(kind: Kind, value: i32) -> i32 {
    let range = kind.clip_range();
    value.clamp(range.lower, range.upper)
}

/// Formats a value for display. Deterministic, no state.
pub fn format(kind: Kind, value: i32) -> String<VALUE_TEXT_MAX> {
    let mut out = String::new();
    match kind {
        Kind::Bool => {
            let _ = out.push_str(if value != 0 { "  On" } else { " Off" });
        }
        Kind::EvenOdd => {
            let _ = out.push_str(if value != 0 { "Even" } else { " Odd" });
        }
        Kind::AnalogMode => {
            let _ = out.push_str(match value {
                0 => "YPbPr",
                1 => "  RGB",
                3 => "  BRG",
                _ => " RGsB",
            });
        }
        Kind::Byte | Kind::Signed99 | Kind::LumaIndex => {
            let _ = write!(out, "{value:4}");
        }
        Kind::Signed127 => {
            if value == 0 {
                let _ = out.push_str("   0");
            } else {
                let _ = write!(out, "{value:+4}");
            }
        }
        Kind::FixPoint256 => {
            let _ = write!(out, "{}.{:03}", value / 256, (value % 256) * 1000 / 256);
        }
        Kind::FixPoint128 => {
            let _ = write!(out, "{}.{:03}", value / 128, (value % 128) * 1000 / 128);
        }
        Kind::ProfileOrOff | Kind::Profile => {
            if value == 0 {
                let _ = out.push_str(" Off");
            } else {
                let _ = write!(out, "{value:4}");
            }
        }
        Kind::ColorMode => {
            let _ = out.push_str(match value {
                0 => "RGB-F",
                1 => "RGB-L",
                2 => "YC444",
                _ => "YC422",
            });
        }
    }
    out
}
