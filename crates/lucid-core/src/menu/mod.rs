//! Text-mode menu engine.
//!
//! Menus are static row tables plus a little runtime state (disabled rows,
//! cursor). [`run_menu`] owns the interaction loop: it blocks on input,
//! moves the selection, edits bound values in place, and returns when a
//! row is selected or the menu is dismissed.

pub mod draw;
pub mod rules;
pub mod value;


use log::debug;

use crate::{
    input::{
        BTN_BACK, BTN_DOWN, BTN_LEFT, BTN_OK, BTN_RIGHT, BTN_UP, Controls, EVT_MODE_CHANGE,
        IR_BACK, IR_DOWN, IR_LEFT, IR_OK, IR_RIGHT, IR_UP,
    },
    osd::{GLYPH_MARKER, GLYPH_SPACE, Glyph, OsdScreen},
    settings::SettingsBank,
};

use draw::{draw_menu, print_value};
use rules::clip;
use value::{MenuEnv, ValueItem};

/// Rows per menu are capped by the width of [`RowFlags`].
pub const MAX_ROWS: usize = 32;

/// One row: label text, line offset inside the menu box, optional value.
#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    pub label: &'static str,
    pub line: u8,
    pub binding: Option<ValueItem>,
}

impl MenuItem {
    /// Valueless row; confirming it closes the menu and reports its index.
    pub const fn action(label: &'static str, line: u8) -> Self {
        Self {
            label,
            line,
            binding: None,
        }
    }

    /// Row with an editable value.
    pub const fn value(label: &'static str, line: u8, binding: ValueItem) -> Self {
        Self {
            label,
            line,
            binding: Some(binding),
        }
    }
}

/// Per-row disabled flags, adjusted at runtime by draw hooks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RowFlags(u32);

impl RowFlags {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn set_disabled(&mut self, row: usize, disabled: bool) {
        if disabled {
            self.0 |= 1 << row;
        } else {
            self.0 &= !(1 << row);
        }
    }

    pub fn is_disabled(&self, row: usize) -> bool {
        self.0 & (1 << row) != 0
    }
}

/// Runs before each full redraw; may flip disabled flags from live state.
pub type DrawHook = fn(&SettingsBank, &mut RowFlags);

/// A menu: screen rectangle, row table, runtime row state.
pub struct Menu {
    pub xpos: u8,
    pub ypos: u8,
    pub xsize: u8,
    pub ysize: u8,
    pub items: &'static [MenuItem],
    pub disabled: RowFlags,
    pub on_draw: Option<DrawHook>,
}

impl Menu {
    pub const fn new(xpos: u8, ypos: u8, xsize: u8, ysize: u8, items: &'static [MenuItem]) -> Self {
        Self {
            xpos,
            ypos,
            xsize,
            ysize,
            items,
            disabled: RowFlags::new(),
            on_draw: None,
        }
    }

    pub const fn with_on_draw(mut self, hook: DrawHook) -> Self {
        self.on_draw = Some(hook);
        self
    }
}

/// Outcome of a menu interaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuResult {
    /// Confirm on a valueless row; carries the row index.
    Selected(usize),
    /// Dismissed with Back, or aborted by a video mode change.
    Aborted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Decrement,
    Increment,
}

// Bits the loop interprets; anything else is discarded every iteration.
const HANDLED_BITS: u32 = BTN_UP
    | BTN_DOWN
    | BTN_LEFT
    | BTN_RIGHT
    | BTN_OK
    | BTN_BACK
    | IR_UP
    | IR_DOWN
    | IR_LEFT
    | IR_RIGHT
    | IR_OK
    | IR_BACK
    | EVT_MODE_CHANGE;

fn mark_item<S: OsdScreen>(screen: &mut S, menu: &Menu, row: usize, ch: u8) {
    screen.fill_rect(
        menu.xpos + 1,
        menu.ypos + menu.items[row].line,
        1,
        1,
        Glyph::dimmed(ch),
    );
}

/// Steps a bound value by one, clips, writes it back, and repaints either
/// the whole menu or just the changed value.
fn update_value<S: OsdScreen>(
    menu: &mut Menu,
    env: &mut MenuEnv<'_>,
    screen: &mut S,
    row: usize,
    step: Step,
) {
    let Some(binding) = menu.items[row].binding else {
        return;
    };

    let mut next = binding.get(env);
    next = match step {
        Step::Decrement => next - 1,
        Step::Increment => next + 1,
    };

    if binding.kind.toggles() {
        // direction is irrelevant for on/off rows
        next = i32::from(binding.get(env) == 0);
    }

    next = clip(binding.kind, next);
    debug!("menu: row {row} set to {next}");

    if binding.set(env, next) {
        draw_menu(menu, env, screen);
        mark_item(screen, menu, row, GLYPH_MARKER);
    } else {
        print_value(menu, env, screen, row);
    }
}

/// Blocking menu interaction. The menu must already be painted; the caller
/// picks the initially selected row (it is advanced past disabled rows).
///
/// At least one row must be enabled, or this never returns.
pub fn run_menu<S: OsdScreen, C: Controls>(
    menu: &mut Menu,
    env: &mut MenuEnv<'_>,
    screen: &mut S,
    controls: &mut C,
    initial: usize,
) -> MenuResult {
    let mut cur = initial;
    while menu.disabled.is_disabled(cur) {
        cur += 1;
        if cur >= menu.items.len() {
            cur = 0;
        }
    }

    debug!("menu: enter with {} rows, cursor {cur}", menu.items.len());
    screen.set_attr(false, true);
    mark_item(screen, menu, cur, GLYPH_MARKER);

    // a held press from before entry must not navigate immediately
    controls.wait_for_release();

    loop {
        let held = loop {
            let held = controls.held();
            if held != 0 {
                break held;
            }
        };

        // A mode change invalidates the OSD geometry. The event bit is not
        // cleared here, so enclosing menus fall out the same way until the
        // outer loop acknowledges it.
        if held & EVT_MODE_CHANGE != 0 {
            debug!("menu: video mode changed, leaving");
            return MenuResult::Aborted;
        }

        if held & (BTN_UP | IR_UP) != 0 {
            mark_item(screen, menu, cur, GLYPH_SPACE);
            loop {
                cur = if cur > 0 { cur - 1 } else { menu.items.len() - 1 };
                if !menu.disabled.is_disabled(cur) {
                    break;
                }
            }
            mark_item(screen, menu, cur, GLYPH_MARKER);
            // vertical movement outranks horizontal within the same poll
            controls.clear(BTN_UP | BTN_LEFT | BTN_RIGHT | IR_UP | IR_LEFT | IR_RIGHT);
        }

        if held & (BTN_DOWN | IR_DOWN) != 0 {
            mark_item(screen, menu, cur, GLYPH_SPACE);
            loop {
                cur += 1;
                if cur >= menu.items.len() {
                    cur = 0;
                }
                if !menu.disabled.is_disabled(cur) {
                    break;
                }
            }
            mark_item(screen, menu, cur, GLYPH_MARKER);
            controls.clear(BTN_DOWN | BTN_LEFT | BTN_RIGHT | IR_DOWN | IR_LEFT | IR_RIGHT);
        }

        if held & (BTN_LEFT | IR_LEFT) != 0 {
            if menu.items[cur].binding.is_some() {
                update_value(menu, env, screen, cur, Step::Decrement);
            }
            controls.clear(BTN_LEFT | IR_LEFT);
        }

        if held & (BTN_RIGHT | IR_RIGHT) != 0 {
            if menu.items[cur].binding.is_some() {
                update_value(menu, env, screen, cur, Step::Increment);
            }
            controls.clear(BTN_RIGHT | IR_RIGHT);
        }

        if held & (BTN_OK | IR_OK) != 0 {
            controls.clear(BTN_OK | IR_OK);
            match menu.items[cur].binding {
                None => {
                    mark_item(screen, menu, cur, GLYPH_SPACE);
                    debug!("menu: row {cur} selected");
                    return MenuResult::Selected(cur);
                }
                Some(binding) if binding.kind.toggles() => {
                    update_value(menu, env, screen, cur, Step::Increment);
                }
                Some(_) => {}
            }
        }

        if held & (BTN_BACK | IR_BACK) != 0 {
            controls.clear(BTN_BACK | IR_BACK);
            mark_item(screen, menu, cur, GLYPH_SPACE);
            debug!("menu: dismissed");
            return MenuResult::Aborted;
        }

        controls.clear(!HANDLED_BITS);
    }
}
