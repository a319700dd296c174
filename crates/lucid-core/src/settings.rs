//! Settings storage words and the bit layout shared with the pipeline.
//!
//! All tunable state lives in packed `u32` words: one flag word per video
//! mode, one global word, and a handful of field words (picture, OSD
//! window, scanlines, scanline profiles, timing). The layout here mirrors
//! the LVP output control register, so the word pushed to hardware is just
//! `mode_word | global_word`.

/// Number of supported input video modes.
pub const MODE_COUNT: usize = 6;

/// Detected input video mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VideoMode {
    Ntsc240p,
    Pal288p,
    Ntsc480i,
    Pal576i,
    Ntsc480p,
    Pal576p,
}

impl VideoMode {
    pub const ALL: [VideoMode; MODE_COUNT] = [
        VideoMode::Ntsc240p,
        VideoMode::Pal288p,
        VideoMode::Ntsc480i,
        VideoMode::Pal576i,
        VideoMode::Ntsc480p,
        VideoMode::Pal576p,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => VideoMode::Ntsc240p,
            1 => VideoMode::Pal288p,
            2 => VideoMode::Ntsc480i,
            3 => VideoMode::Pal576i,
            4 => VideoMode::Ntsc480p,
            _ => VideoMode::Pal576p,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            VideoMode::Ntsc240p => "240p",
            VideoMode::Pal288p => "288p",
            VideoMode::Ntsc480i => "480i",
            VideoMode::Pal576i => "576i",
            VideoMode::Ntsc480p => "480p",
            VideoMode::Pal576p => "576p",
        }
    }

    pub const fn is_interlaced(self) -> bool {
        matches!(self, VideoMode::Ntsc480i | VideoMode::Pal576i)
    }

    /// Output mode when the linedoubler runs; 480p/576p pass through.
    pub const fn doubled(self) -> Self {
        match self {
            VideoMode::Ntsc240p | VideoMode::Ntsc480i => VideoMode::Ntsc480p,
            VideoMode::Pal288p | VideoMode::Pal576i => VideoMode::Pal576p,
            other => other,
        }
    }

    /// CEA-861 video identification code advertised in the AVI infoframe.
    ///
    /// With interlace spoofing enabled, progressive modes advertise their
    /// interlaced sibling so picky sinks accept the doubled signal.
    pub const fn vic(self, spoof_interlace: bool) -> u8 {
        match (self, spoof_interlace) {
            (VideoMode::Ntsc480i, _) => 6,
            (VideoMode::Pal576i, _) => 21,
            (VideoMode::Ntsc240p, false) => 8,
            (VideoMode::Pal288p, false) => 23,
            (VideoMode::Ntsc480p, false) => 2,
            (VideoMode::Pal576p, false) => 17,
            (VideoMode::Ntsc240p | VideoMode::Ntsc480p, true) => 6,
            (VideoMode::Pal288p | VideoMode::Pal576p, true) => 21,
        }
    }

    /// CEA pixel repetition field: 13.5 MHz modes are sent pixel-doubled.
    pub const fn pixel_repetition(self) -> u8 {
        match self {
            VideoMode::Ntsc480p | VideoMode::Pal576p => 0,
            _ => 1,
        }
    }
}

// Output control word, per-mode bits.
pub const BIT_LINEDOUBLE: u8 = 0;
pub const BIT_SCANLINES: u8 = 1;
pub const BIT_SL_EVEN: u8 = 2;
pub const BIT_SL_ALTERNATE: u8 = 3;

// Output control word, global bits.
pub const BIT_SPOOF_INTERLACE: u8 = 4;
pub const BIT_CHROMA_INTERP: u8 = 5;
pub const BIT_SYNC_REGEN: u8 = 6;

pub const fn bit_mask(bit: u8) -> u32 {
    1 << bit
}

// Output color mode field (global word).
pub const COLORMODE_SHIFT: u8 = 8;
pub const COLORMODE_WIDTH: u8 = 2;
pub const COLORMODE_RGB_FULL: u32 = 0;
pub const COLORMODE_RGB_LIMITED: u32 = 1;
pub const COLORMODE_YC444: u32 = 2;
pub const COLORMODE_YC422: u32 = 3;

// Analog daughterboard output mode field (global word).
pub const ANALOG_SHIFT: u8 = 10;
pub const ANALOG_WIDTH: u8 = 2;

// OSD background word fields.
pub const OSD_ALPHA_SHIFT: u8 = 0;
pub const OSD_ALPHA_WIDTH: u8 = 8;
pub const OSD_ALPHA_MASK: u32 = 0xFF;
pub const OSD_TINT_CB_SHIFT: u8 = 8;
pub const OSD_TINT_CR_SHIFT: u8 = 16;
pub const OSD_TINT_WIDTH: u8 = 8;

// Picture word fields, stored as twos-complement signed bytes.
pub const PIC_BRIGHTNESS_SHIFT: u8 = 0;
pub const PIC_CONTRAST_SHIFT: u8 = 8;
pub const PIC_SATURATION_SHIFT: u8 = 16;
pub const PIC_FIELD_WIDTH: u8 = 8;

// Scanline word fields.
pub const SL_PROFILE_SHIFT: u8 = 0;
pub const SL_PROFILE_WIDTH: u8 = 2;
pub const SL_LUMA_SHIFT: u8 = 2;
pub const SL_LUMA_WIDTH: u8 = 8;

// Scanline profile word fields.
pub const PROFILE_STRENGTH_SHIFT: u8 = 0;
pub const PROFILE_STRENGTH_WIDTH: u8 = 9;
pub const PROFILE_HYBRID_SHIFT: u8 = 9;
pub const PROFILE_HYBRID_WIDTH: u8 = 8;

// Timing word fields.
pub const TIM_SWITCH_DELAY_SHIFT: u8 = 0;
pub const TIM_SWITCH_DELAY_WIDTH: u8 = 8;

/// Identifies one packed storage word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordId {
    Global,
    OsdBg,
    Picture,
    Scanlines,
    Timing,
    SlProfile1,
    SlProfile2,
    SlProfile3,
}

impl WordId {
    pub const COUNT: usize = 8;

    /// Profile word for profile number 1 to 3.
    pub const fn profile(number: u8) -> Self {
        match number {
            1 => WordId::SlProfile1,
            2 => WordId::SlProfile2,
            _ => WordId::SlProfile3,
        }
    }

    const fn idx(self) -> usize {
        self as usize
    }
}

/// All tunable state plus the edit cursors (which mode and which scanline
/// profile the menus currently operate on).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SettingsBank {
    words: [u32; WordId::COUNT],
    mode_words: [u32; MODE_COUNT],
    active_mode: VideoMode,
    edited_mode: VideoMode,
    edited_profile: u8,
}

impl SettingsBank {
    pub const fn new() -> Self {
        let ld = bit_mask(BIT_LINEDOUBLE);
        Self {
            words: [
                // global: chroma interpolation on, full-range RGB
                bit_mask(BIT_CHROMA_INTERP),
                // OSD background: alpha 0xC0, neutral tint
                0xC0,
                // picture: all three channels neutral (signed bytes, 0 = unity)
                0,
                // scanlines: profile off, luma cutoff 96
                96 << SL_LUMA_SHIFT,
                // timing: mode switch delay
                8,
                // profile presets: light, medium, strong
                64,
                128,
                192,
            ],
            mode_words: [ld, ld, 0, 0, 0, 0],
            active_mode: VideoMode::Ntsc480i,
            edited_mode: VideoMode::Ntsc480i,
            edited_profile: 1,
        }
    }

    pub fn word(&self, id: WordId) -> u32 {
        self.words[id.idx()]
    }

    pub fn global(&self) -> u32 {
        self.words[WordId::Global.idx()]
    }

    pub fn mode_word(&self, mode: VideoMode) -> u32 {
        self.mode_words[mode.index()]
    }

    /// Output control word for the active mode.
    pub fn combined(&self) -> u32 {
        self.mode_word(self.active_mode) | self.global()
    }

    pub fn active_mode(&self) -> VideoMode {
        self.active_mode
    }

    pub fn set_active_mode(&mut self, mode: VideoMode) {
        self.active_mode = mode;
    }

    pub fn edited_mode(&self) -> VideoMode {
        self.edited_mode
    }

    pub fn set_edited_mode(&mut self, mode: VideoMode) {
        self.edited_mode = mode;
    }

    pub fn edited_profile(&self) -> u8 {
        self.edited_profile
    }

    pub fn set_edited_profile(&mut self, number: u8) {
        self.edited_profile = number.clamp(1, 3);
    }

    pub fn global_bit(&self, bit: u8) -> bool {
        self.global() & bit_mask(bit) != 0
    }

    pub fn set_global_bit(&mut self, bit: u8, on: bool) {
        let idx = WordId::Global.idx();
        if on {
            self.words[idx] |= bit_mask(bit);
        } else {
            self.words[idx] &= !bit_mask(bit);
        }
    }

    pub fn mode_bit(&self, mode: VideoMode, bit: u8) -> bool {
        self.mode_words[mode.index()] & bit_mask(bit) != 0
    }

    pub fn set_mode_bit(&mut self, mode: VideoMode, bit: u8, on: bool) {
        let idx = mode.index();
        if on {
            self.mode_words[idx] |= bit_mask(bit);
        } else {
            self.mode_words[idx] &= !bit_mask(bit);
        }
    }

    /// Reads a `width`-bit field at `shift`. `width` must be below 32.
    pub fn read_field(&self, id: WordId, shift: u8, width: u8) -> u32 {
        (self.words[id.idx()] >> shift) & field_mask(width)
    }

    /// Replaces a `width`-bit field at `shift`, preserving all other bits.
    /// Extra bits of `value` beyond the field width are discarded.
    pub fn write_field(&mut self, id: WordId, shift: u8, width: u8, value: u32) {
        let mask = field_mask(width);
        let word = &mut self.words[id.idx()];
        *word = (*word & !(mask << shift)) | ((value & mask) << shift);
    }

    /// Color mode field of the global word.
    pub fn color_mode(&self) -> u32 {
        self.read_field(WordId::Global, COLORMODE_SHIFT, COLORMODE_WIDTH)
    }
}

impl Default for SettingsBank {
    fn default() -> Self {
        Self::new()
    }
}

const fn field_mask(width: u8) -> u32 {
    (1 << width) - 1
}
