//! Value bindings: how a menu row reads and writes its setting.

use crate::pipeline::VideoPipeline;
use crate::settings::{
    BIT_SPOOF_INTERLACE, COLORMODE_YC422, OSD_ALPHA_MASK, SettingsBank, WordId,
};

use super::rules::Kind;

/// Side effects owed to the pipeline after a field write.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EditEffects {
    /// The edit invalidates other rows; caller must repaint the whole menu.
    pub redraw: bool,
    /// Push the OSD background and combined output word.
    pub apply_output: bool,
    /// Recompute the color matrix.
    pub color_matrix: bool,
    /// Recompute the scanline table.
    pub scanlines: bool,
}

impl EditEffects {
    pub const NONE: Self = Self {
        redraw: false,
        apply_output: false,
        color_matrix: false,
        scanlines: false,
    };

    pub const fn with_redraw(mut self) -> Self {
        self.redraw = true;
        self
    }

    pub const fn with_apply_output(mut self) -> Self {
        self.apply_output = true;
        self
    }

    pub const fn with_color_matrix(mut self) -> Self {
        self.color_matrix = true;
        self
    }

    pub const fn with_scanlines(mut self) -> Self {
        self.scanlines = true;
        self
    }
}

/// Mutable context a binding operates on.
pub struct MenuEnv<'a> {
    pub state: &'a mut SettingsBank,
    pub pipeline: &'a mut dyn VideoPipeline,
}

pub type CustomGet = fn(&MenuEnv<'_>) -> i32;
pub type CustomSet = fn(&mut MenuEnv<'_>, i32) -> bool;

/// Where a row's value lives.
#[derive(Clone, Copy, Debug)]
pub enum Access {
    /// Single flag bit in the global settings word.
    GlobalBit { bit: u8, effects: EditEffects },
    /// Single flag bit in the settings word of the mode being edited.
    ModeBit { bit: u8, effects: EditEffects },
    /// Packed field in one of the storage words.
    Field {
        word: WordId,
        shift: u8,
        width: u8,
        signed: bool,
        effects: EditEffects,
    },
    /// Accessor functions, for values without a fixed storage slot.
    /// The setter's return value replaces the redraw flag.
    Custom { get: CustomGet, set: CustomSet },
}

/// A bound value: semantic kind plus storage access.
#[derive(Clone, Copy, Debug)]
pub struct ValueItem {
    pub kind: Kind,
    pub access: Access,
}

impl ValueItem {
    pub const fn new(kind: Kind, access: Access) -> Self {
        Self { kind, access }
    }

    /// Reads the current value. No side effects.
    pub fn get(&self, env: &MenuEnv<'_>) -> i32 {
        match self.access {
            Access::GlobalBit { bit, .. } => env.state.global_bit(bit) as i32,
            Access::ModeBit { bit, .. } => {
                env.state.mode_bit(env.state.edited_mode(), bit) as i32
            }
            Access::Field {
                word,
                shift,
                width,
                signed,
                ..
            } => {
                let raw = env.state.read_field(word, shift, width);
                if signed {
                    decode_signed_byte(raw)
                } else {
                    raw as i32
                }
            }
            Access::Custom { get, .. } => get(env),
        }
    }

    /// Writes a (pre-clipped) value and performs the owed pipeline pushes.
    /// Returns true when the caller must repaint the whole menu.
    pub fn set(&self, env: &mut MenuEnv<'_>, value: i32) -> bool {
        let effects = match self.access {
            Access::GlobalBit { bit, effects } => {
                env.state.set_global_bit(bit, value != 0);
                if bit == BIT_SPOOF_INTERLACE {
                    let mode = env.state.active_mode();
                    env.pipeline.update_infoframe(mode, env.state);
                }
                effects
            }
            Access::ModeBit { bit, effects } => {
                let mode = env.state.edited_mode();
                env.state.set_mode_bit(mode, bit, value != 0);
                if mode == env.state.active_mode() {
                    let combined = env.state.mode_word(mode) | env.state.global();
                    env.pipeline.apply_output(combined);
                }
                effects
            }
            Access::Field {
                word,
                shift,
                width,
                signed,
                effects,
            } => {
                let raw = if signed {
                    encode_signed_byte(value)
                } else {
                    value as u32
                };
                env.state.write_field(word, shift, width, raw);
                effects
            }
            Access::Custom { set, .. } => return set(env, value),
        };

        if effects.apply_output {
            let osd_bg = if env.state.color_mode() == COLORMODE_YC422 {
                // 4:2:2 output cannot blend; force an opaque background
                env.state.word(WordId::OsdBg) & OSD_ALPHA_MASK
            } else {
                env.state.word(WordId::OsdBg)
            };
            env.pipeline.apply_osd_bg(osd_bg);
            env.pipeline.apply_output(env.state.combined());
        }
        if effects.color_matrix {
            env.pipeline.update_color_matrix(env.state);
        }
        if effects.scanlines {
            env.pipeline.update_scanlines(env.state);
        }
        effects.redraw
    }
}

/// Stored low byte to signed value. The XOR-then-subtract pair with
/// [`encode_signed_byte`] amounts to a twos-complement reinterpretation
/// of the byte and is its own inverse.
pub const fn decode_signed_byte(raw: u32) -> i32 {
    ((raw as i32) ^ 0x80) - 128
}

pub const fn encode_signed_byte(value: i32) -> u32 {
    (((value + 128) ^ 0x80) as u32) & 0xFF
}
