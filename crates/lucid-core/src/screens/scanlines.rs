//! Scanline profile selection and editing.
//!
//! Strength and hybrid factor are stored per profile, so their rows go
//! through custom accessors that follow the profile picked in the edit
//! row. Switching that row just moves the cursor between storage words,
//! which is why it forces a full redraw instead of a value repaint.

use crate::menu::rules::Kind;
use crate::menu::value::{Access, EditEffects, MenuEnv, ValueItem};
use crate::menu::{Menu, MenuItem, RowFlags};
use crate::settings::{
    PROFILE_HYBRID_SHIFT, PROFILE_HYBRID_WIDTH, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH,
    SL_LUMA_SHIFT, SL_LUMA_WIDTH, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH, SettingsBank, WordId,
};

const PROFILE_DEPENDENT_ROWS: core::ops::RangeInclusive<usize> = 1..=4;

static SCANLINE_ROWS: [MenuItem; 6] = [
    MenuItem::value(
        "Profile",
        1,
        ValueItem::new(
            Kind::ProfileOrOff,
            Access::Field {
                word: WordId::Scanlines,
                shift: SL_PROFILE_SHIFT,
                width: SL_PROFILE_WIDTH,
                signed: false,
                effects: EditEffects::NONE.with_scanlines().with_redraw(),
            },
        ),
    ),
    MenuItem::value(
        "Edit profile",
        2,
        ValueItem::new(
            Kind::Profile,
            Access::Custom {
                get: profile_number,
                set: set_profile_number,
            },
        ),
    ),
    MenuItem::value(
        "Strength",
        3,
        ValueItem::new(
            Kind::FixPoint256,
            Access::Custom {
                get: strength,
                set: set_strength,
            },
        ),
    ),
    MenuItem::value(
        "Hybrid factor",
        4,
        ValueItem::new(
            Kind::FixPoint128,
            Access::Custom {
                get: hybrid,
                set: set_hybrid,
            },
        ),
    ),
    MenuItem::value(
        "Luma cutoff",
        5,
        ValueItem::new(
            Kind::LumaIndex,
            Access::Field {
                word: WordId::Scanlines,
                shift: SL_LUMA_SHIFT,
                width: SL_LUMA_WIDTH,
                signed: false,
                effects: EditEffects::NONE.with_scanlines(),
            },
        ),
    ),
    MenuItem::action("Back", 7),
];

pub const fn scanline_menu() -> Menu {
    Menu::new(6, 4, 28, 9, &SCANLINE_ROWS).with_on_draw(scanline_rows)
}

fn scanline_rows(state: &SettingsBank, rows: &mut RowFlags) {
    let off = state.read_field(WordId::Scanlines, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH) == 0;
    for row in PROFILE_DEPENDENT_ROWS {
        rows.set_disabled(row, off);
    }
}

fn profile_number(env: &MenuEnv<'_>) -> i32 {
    i32::from(env.state.edited_profile())
}

fn set_profile_number(env: &mut MenuEnv<'_>, value: i32) -> bool {
    env.state.set_edited_profile(value as u8);
    // strength and hybrid rows now show a different profile
    true
}

fn edited_profile_word(state: &SettingsBank) -> WordId {
    WordId::profile(state.edited_profile())
}

fn strength(env: &MenuEnv<'_>) -> i32 {
    env.state.read_field(
        edited_profile_word(env.state),
        PROFILE_STRENGTH_SHIFT,
        PROFILE_STRENGTH_WIDTH,
    ) as i32
}

fn set_strength(env: &mut MenuEnv<'_>, value: i32) -> bool {
    let word = edited_profile_word(env.state);
    env.state
        .write_field(word, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH, value as u32);
    env.pipeline.update_scanlines(env.state);
    false
}

fn hybrid(env: &MenuEnv<'_>) -> i32 {
    env.state.read_field(
        edited_profile_word(env.state),
        PROFILE_HYBRID_SHIFT,
        PROFILE_HYBRID_WIDTH,
    ) as i32
}

fn set_hybrid(env: &mut MenuEnv<'_>, value: i32) -> bool {
    let word = edited_profile_word(env.state);
    env.state
        .write_field(word, PROFILE_HYBRID_SHIFT, PROFILE_HYBRID_WIDTH, value as u32);
    env.pipeline.update_scanlines(env.state);
    false
}
