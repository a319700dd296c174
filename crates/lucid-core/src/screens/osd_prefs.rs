//! OSD window appearance and timing.

use crate::menu::rules::Kind;
use crate::menu::value::{Access, EditEffects, ValueItem};
use crate::menu::{Menu, MenuItem};
use crate::settings::{
    OSD_ALPHA_SHIFT, OSD_ALPHA_WIDTH, OSD_TINT_CB_SHIFT, OSD_TINT_CR_SHIFT, OSD_TINT_WIDTH,
    TIM_SWITCH_DELAY_SHIFT, TIM_SWITCH_DELAY_WIDTH, WordId,
};

const BG: EditEffects = EditEffects::NONE.with_apply_output();

static OSD_ROWS: [MenuItem; 5] = [
    MenuItem::value(
        "Background alpha",
        1,
        ValueItem::new(
            Kind::Byte,
            Access::Field {
                word: WordId::OsdBg,
                shift: OSD_ALPHA_SHIFT,
                width: OSD_ALPHA_WIDTH,
                signed: false,
                effects: BG,
            },
        ),
    ),
    MenuItem::value(
        "Tint Cb",
        2,
        ValueItem::new(
            Kind::Signed99,
            Access::Field {
                word: WordId::OsdBg,
                shift: OSD_TINT_CB_SHIFT,
                width: OSD_TINT_WIDTH,
                signed: true,
                effects: BG,
            },
        ),
    ),
    MenuItem::value(
        "Tint Cr",
        3,
        ValueItem::new(
            Kind::Signed99,
            Access::Field {
                word: WordId::OsdBg,
                shift: OSD_TINT_CR_SHIFT,
                width: OSD_TINT_WIDTH,
                signed: true,
                effects: BG,
            },
        ),
    ),
    MenuItem::value(
        "Switch delay",
        4,
        ValueItem::new(
            Kind::Byte,
            Access::Field {
                word: WordId::Timing,
                shift: TIM_SWITCH_DELAY_SHIFT,
                width: TIM_SWITCH_DELAY_WIDTH,
                signed: false,
                effects: EditEffects::NONE,
            },
        ),
    ),
    MenuItem::action("Back", 6),
];

pub const fn osd_menu() -> Menu {
    Menu::new(6, 5, 28, 8, &OSD_ROWS)
}
