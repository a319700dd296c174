//! Terminal simulator for the settings UI.
//!
//! Renders the 40x25 OSD grid with crossterm and maps the keyboard to
//! the pad bits, so the whole shell runs on a host. Pipeline pushes are
//! computed with the same table builders the firmware uses and logged
//! to `lucid-sim.log` instead of going over SPI.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{info, warn};
use lucid_core::input::{
    BTN_BACK, BTN_DOWN, BTN_LEFT, BTN_MENU, BTN_OK, BTN_RIGHT, BTN_UP, Controls, EVT_MODE_CHANGE,
};
use lucid_core::osd::{GLYPH_BLANK, GLYPH_MARKER, Glyph, OsdScreen, SCREEN_COLS, SCREEN_ROWS};
use lucid_core::pipeline::VideoPipeline;
use lucid_core::settings::{SettingsBank, VideoMode, WordId};
use lucid_hal_esp32s3::pipeline::{avi_params, csc_from_settings, scanline_lut_from_settings};
use lvp_link::infoframe::build_avi_infoframe;

use crate::shell;

const COLS: usize = SCREEN_COLS as usize;
const ROWS: usize = SCREEN_ROWS as usize;
const LOG_FILE: &str = "lucid-sim.log";

pub fn run() {
    init_logging();
    if let Err(err) = run_tui() {
        let _ = restore_terminal();
        eprintln!("simulator failed: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"));
    match std::fs::File::create(LOG_FILE) {
        // logging straight to the terminal would fight the OSD drawing
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(err) => eprintln!("cannot open {LOG_FILE}: {err}, logging to stderr"),
    }
    builder.init();
}

fn run_tui() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    let result = event_loop();
    restore_terminal()?;
    result
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn event_loop() -> io::Result<()> {
    let mut bank = SettingsBank::new();
    let mut pipeline = SimPipeline;
    let mut screen = SimScreen::new();
    let mut controls = SimControls::new();

    // mirror the firmware's boot-time pipeline sync
    pipeline.apply_output(bank.combined());
    pipeline.apply_osd_bg(bank.word(WordId::OsdBg));
    pipeline.update_color_matrix(&bank);
    pipeline.update_scanlines(&bank);
    pipeline.update_infoframe(bank.active_mode(), &bank);

    screen.repaint(&bank)?;
    loop {
        let held = controls.held();
        if controls.quit {
            return Ok(());
        }

        if held & EVT_MODE_CHANGE != 0 {
            // fake what the hardware does on an input switch
            let next = VideoMode::from_index((bank.active_mode().index() + 1) % VideoMode::ALL.len());
            info!("input mode changed to {}", next.label());
            bank.set_active_mode(next);
            pipeline.apply_output(bank.combined());
            pipeline.update_infoframe(next, &bank);
            controls.clear(EVT_MODE_CHANGE);
            screen.repaint(&bank)?;
        }

        if held & BTN_MENU != 0 {
            controls.clear(BTN_MENU);
            shell::run_session(&mut bank, &mut pipeline, &mut screen, &mut controls);
            screen.repaint(&bank)?;
        }

        controls.clear(held & !EVT_MODE_CHANGE);
    }
}

/// Maps keyboard input onto the pad bit word.
///
/// Terminal keys are momentary, so each press latches its bit until the
/// UI acknowledges it; key auto-repeat stands in for holding a button.
struct SimControls {
    pending: u32,
    quit: bool,
}

impl SimControls {
    fn new() -> Self {
        Self {
            pending: 0,
            quit: false,
        }
    }

    fn pump(&mut self) {
        if !event::poll(Duration::from_millis(40)).unwrap_or(false) {
            return;
        }
        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    let bit = self.key_bit(key.code);
                    self.pending |= bit;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("input read failed: {err}");
                    return;
                }
            }
        }
    }

    fn key_bit(&mut self, code: KeyCode) -> u32 {
        match code {
            KeyCode::Up => BTN_UP,
            KeyCode::Down => BTN_DOWN,
            KeyCode::Left => BTN_LEFT,
            KeyCode::Right => BTN_RIGHT,
            KeyCode::Enter => BTN_OK,
            KeyCode::Esc | KeyCode::Backspace => BTN_BACK,
            KeyCode::Char('m' | 'M') => BTN_MENU,
            KeyCode::Char('v' | 'V') => EVT_MODE_CHANGE,
            KeyCode::Char('q' | 'Q') => {
                // counts as Back; once every menu is closed the outer
                // loop sees the flag and exits
                self.quit = true;
                BTN_BACK
            }
            _ => 0,
        }
    }
}

impl Controls for SimControls {
    fn held(&mut self) -> u32 {
        self.pump();
        self.pending
    }

    fn clear(&mut self, mask: u32) {
        self.pending &= !mask;
    }

    fn wait_for_release(&mut self) {
        // keys are already momentary; drop type-ahead but keep the
        // hardware-latched event bit
        self.pending &= EVT_MODE_CHANGE;
    }
}

#[derive(Clone, Copy)]
struct SimCell {
    ch: char,
    dim_text: bool,
    dim_bg: bool,
    opaque: bool,
}

const TRANSPARENT: SimCell = SimCell {
    ch: ' ',
    dim_text: false,
    dim_bg: false,
    opaque: false,
};

/// Crossterm rendition of the OSD character grid.
struct SimScreen {
    cells: [[SimCell; COLS]; ROWS],
    cursor: (u8, u8),
    dim_text: bool,
    dim_bg: bool,
}

impl SimScreen {
    fn new() -> Self {
        Self {
            cells: [[TRANSPARENT; COLS]; ROWS],
            cursor: (0, 0),
            dim_text: false,
            dim_bg: true,
        }
    }

    fn put(&mut self, x: usize, y: usize, cell: SimCell) {
        if x < COLS && y < ROWS {
            self.cells[y][x] = cell;
        }
    }

    fn box_cell(&self, ch: char) -> SimCell {
        SimCell {
            ch,
            dim_text: false,
            dim_bg: true,
            opaque: true,
        }
    }

    /// Repaints the whole terminal including the status line.
    fn repaint(&mut self, bank: &SettingsBank) -> io::Result<()> {
        self.render()?;
        let mut out = io::stdout();
        queue!(
            out,
            cursor::MoveTo(0, ROWS as u16),
            SetBackgroundColor(Color::Reset),
            SetForegroundColor(Color::Reset),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(format!(
                "video: {}   keys: M menu, arrows move, Enter ok, Esc back, V mode change, Q quit",
                bank.active_mode().label()
            )),
        )?;
        out.flush()
    }

    fn render(&self) -> io::Result<()> {
        let mut out = io::stdout();
        for (y, row) in self.cells.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16))?;
            for cell in row {
                let (fg, bg) = if !cell.opaque {
                    // live video would show through here
                    (Color::DarkBlue, Color::DarkBlue)
                } else {
                    let fg = if cell.dim_text {
                        Color::DarkGrey
                    } else {
                        Color::White
                    };
                    let bg = if cell.dim_bg {
                        Color::Black
                    } else {
                        Color::DarkGrey
                    };
                    (fg, bg)
                };
                queue!(
                    out,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(cell.ch)
                )?;
            }
        }
        out.flush()
    }

    fn glyph_cell(&self, glyph: Glyph) -> SimCell {
        if glyph.ch == GLYPH_BLANK {
            return TRANSPARENT;
        }
        let ch = match glyph.ch {
            GLYPH_MARKER => '>',
            printable if printable.is_ascii_graphic() || printable == b' ' => printable as char,
            _ => '?',
        };
        SimCell {
            ch,
            dim_text: false,
            dim_bg: glyph.dim_bg,
            opaque: true,
        }
    }
}

impl OsdScreen for SimScreen {
    fn fill_rect(&mut self, x: u8, y: u8, width: u8, height: u8, glyph: Glyph) {
        let cell = self.glyph_cell(glyph);
        for row in y..y.saturating_add(height) {
            for col in x..x.saturating_add(width) {
                self.put(col as usize, row as usize, cell);
            }
        }
        if let Err(err) = self.render() {
            warn!("render failed: {err}");
        }
    }

    fn draw_border(&mut self, x: u8, y: u8, width: u8, height: u8) {
        if width < 2 || height < 2 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let (w, h) = (width as usize, height as usize);

        self.put(x, y, self.box_cell('┌'));
        self.put(x + w - 1, y, self.box_cell('┐'));
        self.put(x, y + h - 1, self.box_cell('└'));
        self.put(x + w - 1, y + h - 1, self.box_cell('┘'));
        for col in x + 1..x + w - 1 {
            self.put(col, y, self.box_cell('─'));
            self.put(col, y + h - 1, self.box_cell('─'));
        }
        for row in y + 1..y + h - 1 {
            self.put(x, row, self.box_cell('│'));
            self.put(x + w - 1, row, self.box_cell('│'));
        }
        if let Err(err) = self.render() {
            warn!("render failed: {err}");
        }
    }

    fn goto(&mut self, x: u8, y: u8) {
        self.cursor = (x, y);
    }

    fn put_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.put(
                self.cursor.0 as usize,
                self.cursor.1 as usize,
                SimCell {
                    ch,
                    dim_text: self.dim_text,
                    dim_bg: self.dim_bg,
                    opaque: true,
                },
            );
            self.cursor.0 = self.cursor.0.saturating_add(1);
        }
        if let Err(err) = self.render() {
            warn!("render failed: {err}");
        }
    }

    fn set_attr(&mut self, dim_text: bool, dim_bg: bool) {
        self.dim_text = dim_text;
        self.dim_bg = dim_bg;
    }
}

/// Logs pipeline pushes, computing the same tables the firmware loads.
struct SimPipeline;

impl VideoPipeline for SimPipeline {
    fn apply_output(&mut self, combined: u32) {
        info!("pipeline: output word {combined:#010x}");
    }

    fn apply_osd_bg(&mut self, word: u32) {
        info!("pipeline: osd background {word:#010x}");
    }

    fn update_color_matrix(&mut self, state: &SettingsBank) {
        let csc = csc_from_settings(state);
        info!(
            "pipeline: csc rows {:?} offsets {:?}",
            csc.coeff, csc.offset
        );
    }

    fn update_scanlines(&mut self, state: &SettingsBank) {
        let lut = scanline_lut_from_settings(state);
        info!(
            "pipeline: scanline lut low {} mid {} high {}",
            lut[32], lut[128], lut[224]
        );
    }

    fn update_infoframe(&mut self, mode: VideoMode, state: &SettingsBank) {
        let params = avi_params(mode, state);
        let frame = build_avi_infoframe(&params);
        info!(
            "pipeline: infoframe for {}: vic {} {:?} checksum {:#04x}",
            mode.label(),
            params.vic,
            params.colorspace,
            frame[3]
        );
    }
}
