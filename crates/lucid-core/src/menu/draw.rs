//! Menu painting: full redraw and single-value repaint.

use crate::osd::{GLYPH_SPACE, Glyph, OsdScreen};

use super::value::MenuEnv;
use super::{Menu, rules};

/// Paints the whole menu: background, border, labels, values. Runs the
/// menu's draw hook first so disabled flags reflect live settings.
///
/// The cursor mark is not drawn here; [`run_menu`](super::run_menu)
/// restores it after a mid-interaction redraw.
pub fn draw_menu<S: OsdScreen>(menu: &mut Menu, env: &mut MenuEnv<'_>, screen: &mut S) {
    screen.fill_rect(
        menu.xpos,
        menu.ypos,
        menu.xsize,
        menu.ysize,
        Glyph::dimmed(GLYPH_SPACE),
    );
    screen.draw_border(menu.xpos, menu.ypos, menu.xsize, menu.ysize);

    if let Some(hook) = menu.on_draw {
        hook(env.state, &mut menu.disabled);
    }

    for (row, item) in menu.items.iter().enumerate() {
        screen.set_attr(menu.disabled.is_disabled(row), true);
        screen.goto(menu.xpos + 2, menu.ypos + item.line);
        screen.put_str(item.label);

        if item.binding.is_some() {
            print_value(menu, env, screen, row);
        }
    }
}

/// Repaints one row's value, right-aligned in its kind's column at the
/// menu's right edge. Labels and borders stay untouched.
pub fn print_value<S: OsdScreen>(menu: &Menu, env: &MenuEnv<'_>, screen: &mut S, row: usize) {
    let Some(binding) = menu.items[row].binding else {
        return;
    };

    let text = rules::format(binding.kind, binding.get(env));
    let column = binding.kind.column();
    screen.goto(
        menu.xpos + menu.xsize - column,
        menu.ypos + menu.items[row].line,
    );

    // pad on the left so a shorter value overwrites stale digits
    let cell = usize::from(column) - 2;
    for _ in text.len()..cell {
        screen.put_str(" ");
    }
    screen.put_str(&text);
}
