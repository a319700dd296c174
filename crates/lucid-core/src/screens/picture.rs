//! Picture controls: levels, output color format, analog daughterboard.
//!
//! The level rows are signed offsets around neutral; the color matrix
//! recompute turns them into gains.

use crate::menu::rules::Kind;
use crate::menu::value::{Access, EditEffects, ValueItem};
use crate::menu::{Menu, MenuItem};
use crate::settings::{
    ANALOG_SHIFT, ANALOG_WIDTH, COLORMODE_SHIFT, COLORMODE_WIDTH, PIC_BRIGHTNESS_SHIFT,
    PIC_CONTRAST_SHIFT, PIC_FIELD_WIDTH, PIC_SATURATION_SHIFT, WordId,
};

const LEVELS: EditEffects = EditEffects::NONE.with_color_matrix();

static PICTURE_ROWS: [MenuItem; 6] = [
    MenuItem::value(
        "Brightness",
        1,
        ValueItem::new(
            Kind::Signed127,
            Access::Field {
                word: WordId::Picture,
                shift: PIC_BRIGHTNESS_SHIFT,
                width: PIC_FIELD_WIDTH,
                signed: true,
                effects: LEVELS,
            },
        ),
    ),
    MenuItem::value(
        "Contrast",
        2,
        ValueItem::new(
            Kind::Signed127,
            Access::Field {
                word: WordId::Picture,
                shift: PIC_CONTRAST_SHIFT,
                width: PIC_FIELD_WIDTH,
                signed: true,
                effects: LEVELS,
            },
        ),
    ),
    MenuItem::value(
        "Saturation",
        3,
        ValueItem::new(
            Kind::Signed127,
            Access::Field {
                word: WordId::Picture,
                shift: PIC_SATURATION_SHIFT,
                width: PIC_FIELD_WIDTH,
                signed: true,
                effects: LEVELS,
            },
        ),
    ),
    MenuItem::value(
        "Output color",
        4,
        ValueItem::new(
            Kind::ColorMode,
            Access::Field {
                word: WordId::Global,
                shift: COLORMODE_SHIFT,
                width: COLORMODE_WIDTH,
                signed: false,
                effects: EditEffects::NONE.with_apply_output().with_color_matrix(),
            },
        ),
    ),
    MenuItem::value(
        "Analog output",
        5,
        ValueItem::new(
            Kind::AnalogMode,
            Access::Field {
                word: WordId::Global,
                shift: ANALOG_SHIFT,
                width: ANALOG_WIDTH,
                signed: false,
                effects: EditEffects::NONE.with_apply_output(),
            },
        ),
    ),
    MenuItem::action("Back", 7),
];

pub const fn picture_menu() -> Menu {
    Menu::new(6, 4, 28, 9, &PICTURE_ROWS)
}
