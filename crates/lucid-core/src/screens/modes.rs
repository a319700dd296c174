//! Mode selection list and the per-mode settings screen.

use crate::menu::rules::Kind;
use crate::menu::value::{Access, EditEffects, ValueItem};
use crate::menu::{Menu, MenuItem, RowFlags};
use crate::settings::{
    BIT_LINEDOUBLE, BIT_SCANLINES, BIT_SL_ALTERNATE, BIT_SL_EVEN, SettingsBank, VideoMode,
    bit_mask,
};

static MODE_LIST_ROWS: [MenuItem; 7] = [
    MenuItem::action(VideoMode::Ntsc240p.label(), 1),
    MenuItem::action(VideoMode::Pal288p.label(), 2),
    MenuItem::action(VideoMode::Ntsc480i.label(), 3),
    MenuItem::action(VideoMode::Pal576i.label(), 4),
    MenuItem::action(VideoMode::Ntsc480p.label(), 5),
    MenuItem::action(VideoMode::Pal576p.label(), 6),
    MenuItem::action("Back", 7),
];

/// Picks which mode the per-mode screen edits. Rows 0..6 are the modes in
/// [`VideoMode::ALL`] order; the last row goes back.
pub const fn mode_list() -> Menu {
    Menu::new(8, 5, 16, 9, &MODE_LIST_ROWS)
}

/// Row index of the back entry in [`mode_list`].
pub const MODE_LIST_BACK: usize = 6;

const ROW_SCANLINES: usize = 1;
const ROW_PARITY: usize = 2;
const ROW_ALTERNATE: usize = 3;

static MODE_ROWS: [MenuItem; 5] = [
    MenuItem::value(
        "Linedoubler",
        1,
        ValueItem::new(
            Kind::Bool,
            Access::ModeBit {
                bit: BIT_LINEDOUBLE,
                effects: EditEffects::NONE.with_redraw(),
            },
        ),
    ),
    MenuItem::value(
        "Scanlines",
        2,
        ValueItem::new(
            Kind::Bool,
            Access::ModeBit {
                bit: BIT_SCANLINES,
                effects: EditEffects::NONE.with_redraw(),
            },
        ),
    ),
    MenuItem::value(
        "Scanline parity",
        3,
        ValueItem::new(
            Kind::EvenOdd,
            Access::ModeBit {
                bit: BIT_SL_EVEN,
                effects: EditEffects::NONE,
            },
        ),
    ),
    MenuItem::value(
        "Alternate fields",
        4,
        ValueItem::new(
            Kind::Bool,
            Access::ModeBit {
                bit: BIT_SL_ALTERNATE,
                effects: EditEffects::NONE,
            },
        ),
    ),
    MenuItem::action("Back", 6),
];

/// Settings of the mode currently being edited. The draw hook hides the
/// scanline rows while the linedoubler is off (scanlines are drawn into
/// the doubled lines) and the field options for progressive sources.
pub const fn mode_menu() -> Menu {
    Menu::new(7, 5, 26, 8, &MODE_ROWS).with_on_draw(mode_rows)
}

fn mode_rows(state: &SettingsBank, rows: &mut RowFlags) {
    let word = state.mode_word(state.edited_mode());
    let doubled = word & bit_mask(BIT_LINEDOUBLE) != 0;
    let scanlines = doubled && word & bit_mask(BIT_SCANLINES) != 0;

    rows.set_disabled(ROW_SCANLINES, !doubled);
    rows.set_disabled(ROW_PARITY, !scanlines);
    rows.set_disabled(
        ROW_ALTERNATE,
        !scanlines || !state.edited_mode().is_interlaced(),
    );
}
