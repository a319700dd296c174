//! Signal-level options that apply to every mode.

use crate::menu::rules::Kind;
use crate::menu::value::{Access, EditEffects, ValueItem};
use crate::menu::{Menu, MenuItem};
use crate::settings::{BIT_CHROMA_INTERP, BIT_SPOOF_INTERLACE, BIT_SYNC_REGEN};

const PUSH: EditEffects = EditEffects::NONE.with_apply_output();

static ADVANCED_ROWS: [MenuItem; 4] = [
    MenuItem::value(
        "Spoof interlace",
        1,
        ValueItem::new(
            Kind::Bool,
            Access::GlobalBit {
                bit: BIT_SPOOF_INTERLACE,
                effects: PUSH,
            },
        ),
    ),
    MenuItem::value(
        "Chroma interpolation",
        2,
        ValueItem::new(
            Kind::Bool,
            Access::GlobalBit {
                bit: BIT_CHROMA_INTERP,
                effects: PUSH,
            },
        ),
    ),
    MenuItem::value(
        "Sync regeneration",
        3,
        ValueItem::new(
            Kind::Bool,
            Access::GlobalBit {
                bit: BIT_SYNC_REGEN,
                effects: PUSH,
            },
        ),
    ),
    MenuItem::action("Back", 5),
];

pub const fn advanced_menu() -> Menu {
    Menu::new(5, 6, 30, 7, &ADVANCED_ROWS)
}
