//! The menu screens of the settings UI.
//!
//! Each screen is a static row table plus a constructor returning an
//! owned [`Menu`]. Geometry is fixed for the 40x25 OSD grid; draw hooks
//! keep rows in sync with live settings.

mod advanced;
mod modes;
mod osd_prefs;
mod picture;
mod scanlines;

#[cfg(test)]
mod tests;

pub use advanced::advanced_menu;
pub use modes::{MODE_LIST_BACK, mode_list, mode_menu};
pub use osd_prefs::osd_menu;
pub use picture::picture_menu;
pub use scanlines::scanline_menu;

use crate::menu::{Menu, MenuItem};

static MAIN_ROWS: [MenuItem; 7] = [
    MenuItem::action("Current mode...", 1),
    MenuItem::action("Other modes...", 2),
    MenuItem::action("Picture...", 3),
    MenuItem::action("Scanlines...", 4),
    MenuItem::action("OSD window...", 5),
    MenuItem::action("Advanced...", 6),
    MenuItem::action("Exit", 7),
];

pub const fn main_menu() -> Menu {
    Menu::new(4, 3, 26, 9, &MAIN_ROWS)
}

/// Typed view of the main menu's rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MainEntry {
    CurrentMode,
    OtherModes,
    Picture,
    Scanlines,
    OsdWindow,
    Advanced,
    Exit,
}

impl MainEntry {
    pub const fn from_row(row: usize) -> Self {
        match row {
            0 => MainEntry::CurrentMode,
            1 => MainEntry::OtherModes,
            2 => MainEntry::Picture,
            3 => MainEntry::Scanlines,
            4 => MainEntry::OsdWindow,
            5 => MainEntry::Advanced,
            _ => MainEntry::Exit,
        }
    }
}
