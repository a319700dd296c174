use crate::menu::Menu;
use crate::menu::value::MenuEnv;
use crate::osd::{SCREEN_COLS, SCREEN_ROWS};
use crate::pipeline::VideoPipeline;
use crate::settings::{
    BIT_LINEDOUBLE, BIT_SCANLINES, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH, SL_PROFILE_SHIFT,
    SL_PROFILE_WIDTH, SettingsBank, VideoMode, WordId,
};

use super::*;

fn all_menus() -> Vec<(&'static str, Menu)> {
    vec![
        ("main", main_menu()),
        ("mode list", mode_list()),
        ("mode", mode_menu()),
        ("picture", picture_menu()),
        ("scanlines", scanline_menu()),
        ("osd", osd_menu()),
        ("advanced", advanced_menu()),
    ]
}

#[derive(Default)]
struct CountingPipeline {
    scanline_updates: usize,
}

impl VideoPipeline for CountingPipeline {
    fn apply_output(&mut self, _combined: u32) {}

    fn apply_osd_bg(&mut self, _word: u32) {}

    fn update_color_matrix(&mut self, _state: &SettingsBank) {}

    fn update_scanlines(&mut self, _state: &SettingsBank) {
        self.scanline_updates += 1;
    }

    fn update_infoframe(&mut self, _mode: VideoMode, _state: &SettingsBank) {}
}

#[test]
fn every_menu_fits_the_osd_grid() {
    for (name, menu) in all_menus() {
        assert!(menu.xpos + menu.xsize <= SCREEN_COLS, "{name} too wide");
        assert!(menu.ypos + menu.ysize <= SCREEN_ROWS, "{name} too tall");
        for item in menu.items {
            // rows live strictly between the border lines
            assert!(item.line >= 1 && item.line <= menu.ysize - 2, "{name}: {}", item.label);
        }
    }
}

#[test]
fn labels_never_collide_with_value_columns() {
    for (name, menu) in all_menus() {
        for item in menu.items {
            let label_end = 2 + item.label.len() as u8;
            let value_start = match item.binding {
                Some(binding) => menu.xsize - binding.kind.column(),
                None => menu.xsize - 1,
            };
            assert!(
                label_end <= value_start,
                "{name}: '{}' overlaps its value cell",
                item.label
            );
        }
    }
}

#[test]
fn every_menu_ends_in_an_exit_row() {
    for (name, menu) in all_menus() {
        let last = menu.items.last().unwrap();
        assert!(last.binding.is_none(), "{name} has no plain exit row");
        assert!(!menu.disabled.is_disabled(menu.items.len() - 1), "{name}");
    }
}

#[test]
fn mode_screen_hides_scanline_rows_without_linedoubling() {
    let mut menu = mode_menu();
    let hook = menu.on_draw.unwrap();
    let mut bank = SettingsBank::new();
    bank.set_edited_mode(VideoMode::Ntsc480i);

    // 480i defaults to no linedoubling
    hook(&bank, &mut menu.disabled);
    assert!(!menu.disabled.is_disabled(0));
    assert!(menu.disabled.is_disabled(1));
    assert!(menu.disabled.is_disabled(2));
    assert!(menu.disabled.is_disabled(3));

    bank.set_mode_bit(VideoMode::Ntsc480i, BIT_LINEDOUBLE, true);
    hook(&bank, &mut menu.disabled);
    assert!(!menu.disabled.is_disabled(1));
    assert!(menu.disabled.is_disabled(2));

    bank.set_mode_bit(VideoMode::Ntsc480i, BIT_SCANLINES, true);
    hook(&bank, &mut menu.disabled);
    assert!(!menu.disabled.is_disabled(2));
    assert!(!menu.disabled.is_disabled(3));
}

#[test]
fn alternate_fields_stay_hidden_for_progressive_sources() {
    let mut menu = mode_menu();
    let hook = menu.on_draw.unwrap();
    let mut bank = SettingsBank::new();
    bank.set_edited_mode(VideoMode::Ntsc240p);
    bank.set_mode_bit(VideoMode::Ntsc240p, BIT_SCANLINES, true);

    hook(&bank, &mut menu.disabled);
    // 240p defaults to linedoubling, so parity applies
    assert!(!menu.disabled.is_disabled(2));
    // but there is no second field to alternate with
    assert!(menu.disabled.is_disabled(3));
}

#[test]
fn scanline_screen_disables_profile_rows_while_off() {
    let mut menu = scanline_menu();
    let hook = menu.on_draw.unwrap();
    let mut bank = SettingsBank::new();

    hook(&bank, &mut menu.disabled);
    for row in 1..=4 {
        assert!(menu.disabled.is_disabled(row));
    }
    assert!(!menu.disabled.is_disabled(0));
    assert!(!menu.disabled.is_disabled(5));

    bank.write_field(WordId::Scanlines, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH, 2);
    hook(&bank, &mut menu.disabled);
    for row in 1..=4 {
        assert!(!menu.disabled.is_disabled(row));
    }
}

#[test]
fn strength_row_follows_the_edited_profile() {
    let mut bank = SettingsBank::new();
    let mut pipe = CountingPipeline::default();

    let menu = scanline_menu();
    let strength_row = menu.items[2].binding.unwrap();
    let profile_row = menu.items[1].binding.unwrap();

    {
        let mut env = MenuEnv {
            state: &mut bank,
            pipeline: &mut pipe,
        };
        // profile 1 preset
        assert_eq!(strength_row.get(&env), 64);

        assert!(profile_row.set(&mut env, 3));
        assert_eq!(strength_row.get(&env), 192);

        assert!(!strength_row.set(&mut env, 200));
        assert_eq!(strength_row.get(&env), 200);
    }

    assert_eq!(
        bank.read_field(WordId::SlProfile3, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH),
        200
    );
    // profile 1 untouched
    assert_eq!(
        bank.read_field(WordId::SlProfile1, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH),
        64
    );
    assert_eq!(pipe.scanline_updates, 1);
}

#[test]
fn main_rows_map_to_entries_in_order() {
    assert_eq!(MainEntry::from_row(0), MainEntry::CurrentMode);
    assert_eq!(MainEntry::from_row(1), MainEntry::OtherModes);
    assert_eq!(MainEntry::from_row(2), MainEntry::Picture);
    assert_eq!(MainEntry::from_row(3), MainEntry::Scanlines);
    assert_eq!(MainEntry::from_row(4), MainEntry::OsdWindow);
    assert_eq!(MainEntry::from_row(5), MainEntry::Advanced);
    assert_eq!(MainEntry::from_row(6), MainEntry::Exit);
    assert_eq!(main_menu().items.len(), 7);
}

#[test]
fn mode_list_rows_match_video_mode_order() {
    let menu = mode_list();
    for (index, mode) in VideoMode::ALL.iter().enumerate() {
        assert_eq!(menu.items[index].label, mode.label());
    }
    assert_eq!(menu.items[MODE_LIST_BACK].label, "Back");
}
