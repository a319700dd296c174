//! Video pipeline control surface.
//!
//! Settings edits fan out to the pipeline through this trait. The menu
//! engine decides *when* to push; implementations decide *how* (SPI
//! register writes on hardware, logging in the simulator).

use crate::settings::{SettingsBank, VideoMode};

pub trait VideoPipeline {
    /// Loads the combined output control word (active-mode bits or'd with
    /// the global bits).
    fn apply_output(&mut self, combined: u32);

    /// Loads the OSD window background word.
    fn apply_osd_bg(&mut self, word: u32);

    /// Recomputes and loads the color matrix from the picture settings.
    fn update_color_matrix(&mut self, state: &SettingsBank);

    /// Recomputes and loads the scanline attenuation table.
    fn update_scanlines(&mut self, state: &SettingsBank);

    /// Rebuilds the AVI infoframe advertised for `mode`.
    fn update_infoframe(&mut self, mode: VideoMode, state: &SettingsBank);
}
