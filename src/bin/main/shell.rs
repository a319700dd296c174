//! Settings UI session flow shared by the firmware and the simulator.
//!
//! One session covers everything from the main menu opening to the OSD
//! being hidden again: submenu dispatch and the mode-list loop. When the
//! input video mode changes mid-session the event bit stays latched, so
//! every open menu aborts in turn and the session closes by itself.

use log::{debug, info};
use lucid_core::input::Controls;
use lucid_core::menu::draw::draw_menu;
use lucid_core::menu::value::MenuEnv;
use lucid_core::menu::{Menu, MenuResult, run_menu};
use lucid_core::osd::{GLYPH_BLANK, Glyph, OsdScreen, SCREEN_COLS, SCREEN_ROWS};
use lucid_core::pipeline::VideoPipeline;
use lucid_core::screens::{
    MODE_LIST_BACK, MainEntry, advanced_menu, main_menu, mode_list, mode_menu, osd_menu,
    picture_menu, scanline_menu,
};
use lucid_core::settings::{SettingsBank, VideoMode};

/// Runs the settings UI until the user leaves it, then hides the OSD.
pub fn run_session<S, C>(
    state: &mut SettingsBank,
    pipeline: &mut dyn VideoPipeline,
    screen: &mut S,
    controls: &mut C,
) where
    S: OsdScreen,
    C: Controls,
{
    info!("settings menu opened");
    session_loop(state, pipeline, screen, controls);
    screen.fill_rect(0, 0, SCREEN_COLS, SCREEN_ROWS, Glyph::new(GLYPH_BLANK));
    info!("settings menu closed");
}

fn session_loop<S, C>(
    state: &mut SettingsBank,
    pipeline: &mut dyn VideoPipeline,
    screen: &mut S,
    controls: &mut C,
) where
    S: OsdScreen,
    C: Controls,
{
    let mut cursor = 0;
    loop {
        let row = {
            let mut main = main_menu();
            let mut env = MenuEnv {
                state: &mut *state,
                pipeline: &mut *pipeline,
            };
            draw_menu(&mut main, &mut env, screen);
            match run_menu(&mut main, &mut env, screen, controls, cursor) {
                MenuResult::Selected(row) => row,
                MenuResult::Aborted => return,
            }
        };
        cursor = row;

        match MainEntry::from_row(row) {
            MainEntry::CurrentMode => {
                state.set_edited_mode(state.active_mode());
                run_leaf(mode_menu(), state, pipeline, screen, controls);
            }
            MainEntry::OtherModes => pick_other_mode(state, pipeline, screen, controls),
            MainEntry::Picture => run_leaf(picture_menu(), state, pipeline, screen, controls),
            MainEntry::Scanlines => run_leaf(scanline_menu(), state, pipeline, screen, controls),
            MainEntry::OsdWindow => run_leaf(osd_menu(), state, pipeline, screen, controls),
            MainEntry::Advanced => run_leaf(advanced_menu(), state, pipeline, screen, controls),
            MainEntry::Exit => return,
        }
    }
}

/// Runs one leaf menu until it is left through its Back row or the Back
/// key. A mode change aborts it like Back and stays latched for the
/// menus underneath.
fn run_leaf<S, C>(
    mut menu: Menu,
    state: &mut SettingsBank,
    pipeline: &mut dyn VideoPipeline,
    screen: &mut S,
    controls: &mut C,
) where
    S: OsdScreen,
    C: Controls,
{
    let mut env = MenuEnv { state, pipeline };
    draw_menu(&mut menu, &mut env, screen);
    run_menu(&mut menu, &mut env, screen, controls, 0);
}

/// The Other modes flow: pick a mode from the list, edit it, come back
/// to the list until the user backs out.
fn pick_other_mode<S, C>(
    state: &mut SettingsBank,
    pipeline: &mut dyn VideoPipeline,
    screen: &mut S,
    controls: &mut C,
) where
    S: OsdScreen,
    C: Controls,
{
    let mut cursor = state.active_mode().index();
    loop {
        let row = {
            let mut list = mode_list();
            let mut env = MenuEnv {
                state: &mut *state,
                pipeline: &mut *pipeline,
            };
            draw_menu(&mut list, &mut env, screen);
            match run_menu(&mut list, &mut env, screen, controls, cursor) {
                MenuResult::Selected(row) => row,
                MenuResult::Aborted => return,
            }
        };
        if row >= MODE_LIST_BACK {
            return;
        }

        cursor = row;
        let mode = VideoMode::from_index(row);
        debug!("editing settings for {}", mode.label());
        state.set_edited_mode(mode);
        run_leaf(mode_menu(), state, pipeline, screen, controls);
    }
}
