//! Pipeline control adapter.
//!
//! Translates settings pushes from the UI core into LVP register and
//! table loads. The derived tables (color matrix, scanline table,
//! infoframe) are recomputed from the settings words on every push;
//! they are cheap and it keeps this adapter stateless. The derivations
//! are free functions so the host simulator can reuse them.

use embedded_hal::spi::SpiDevice;
use log::{debug, warn};
use lucid_core::menu::value::decode_signed_byte;
use lucid_core::pipeline::VideoPipeline;
use lucid_core::settings::{
    BIT_LINEDOUBLE, BIT_SPOOF_INTERLACE, COLORMODE_RGB_FULL, COLORMODE_RGB_LIMITED,
    COLORMODE_YC422, COLORMODE_YC444, PIC_BRIGHTNESS_SHIFT, PIC_CONTRAST_SHIFT, PIC_FIELD_WIDTH,
    PIC_SATURATION_SHIFT, PROFILE_HYBRID_SHIFT, PROFILE_HYBRID_WIDTH, PROFILE_STRENGTH_SHIFT,
    PROFILE_STRENGTH_WIDTH, SL_LUMA_SHIFT, SL_LUMA_WIDTH, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH,
    SettingsBank, VideoMode, WordId,
};
use lvp_link::infoframe::{AviColorspace, AviParams};
use lvp_link::matrix::{CscMatrix, CscOutput, compute_csc};
use lvp_link::scanline::{LUT_LEN, build_scanline_lut};

use crate::link::LvpShared;

/// Color matrix derived from the picture and color mode settings.
///
/// The stored picture bytes are signed offsets around neutral; the CSC
/// gains want unity at 128.
pub fn csc_from_settings(state: &SettingsBank) -> CscMatrix {
    let picture =
        |shift| decode_signed_byte(state.read_field(WordId::Picture, shift, PIC_FIELD_WIDTH));
    let brightness = picture(PIC_BRIGHTNESS_SHIFT);
    let contrast = (128 + picture(PIC_CONTRAST_SHIFT)) as u8;
    let saturation = (128 + picture(PIC_SATURATION_SHIFT)) as u8;
    let output = match state.color_mode() {
        COLORMODE_RGB_FULL => CscOutput::RgbFull,
        COLORMODE_RGB_LIMITED => CscOutput::RgbLimited,
        _ => CscOutput::YCbCr,
    };
    compute_csc(output, brightness, contrast, saturation)
}

/// Scanline attenuation table derived from the selected profile.
pub fn scanline_lut_from_settings(state: &SettingsBank) -> [u8; LUT_LEN] {
    let profile = state.read_field(WordId::Scanlines, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH) as u8;
    let cutoff = state.read_field(WordId::Scanlines, SL_LUMA_SHIFT, SL_LUMA_WIDTH) as u8;

    if profile == 0 {
        // profile off, keep an identity table loaded
        return build_scanline_lut(0, 0, cutoff);
    }
    let word = WordId::profile(profile);
    let strength = state.read_field(word, PROFILE_STRENGTH_SHIFT, PROFILE_STRENGTH_WIDTH) as u16;
    let hybrid = state.read_field(word, PROFILE_HYBRID_SHIFT, PROFILE_HYBRID_WIDTH) as u8;
    build_scanline_lut(strength, hybrid, cutoff)
}

/// Infoframe parameters advertised for `mode` under the current settings.
pub fn avi_params(mode: VideoMode, state: &SettingsBank) -> AviParams {
    let output_mode = if state.mode_bit(mode, BIT_LINEDOUBLE) {
        mode.doubled()
    } else {
        mode
    };
    let colorspace = match state.color_mode() {
        COLORMODE_YC444 => AviColorspace::YCbCr444,
        COLORMODE_YC422 => AviColorspace::YCbCr422,
        _ => AviColorspace::Rgb,
    };
    AviParams {
        vic: output_mode.vic(state.global_bit(BIT_SPOOF_INTERLACE)),
        colorspace,
        full_range: state.color_mode() == COLORMODE_RGB_FULL,
        pixel_repetition: output_mode.pixel_repetition(),
    }
}

pub struct LvpPipeline<'a, SPI> {
    link: &'a LvpShared<SPI>,
}

impl<'a, SPI> LvpPipeline<'a, SPI>
where
    SPI: SpiDevice<u8>,
{
    pub fn new(link: &'a LvpShared<SPI>) -> Self {
        Self { link }
    }
}

impl<SPI> VideoPipeline for LvpPipeline<'_, SPI>
where
    SPI: SpiDevice<u8>,
{
    fn apply_output(&mut self, combined: u32) {
        debug!("pipeline: output word {combined:#010x}");
        if let Err(err) = self.link.with(|lvp| lvp.load_output(combined)) {
            warn!("pipeline: output load failed: {err:?}");
        }
    }

    fn apply_osd_bg(&mut self, word: u32) {
        debug!("pipeline: osd background {word:#010x}");
        if let Err(err) = self.link.with(|lvp| lvp.load_osd_bg(word)) {
            warn!("pipeline: osd background load failed: {err:?}");
        }
    }

    fn update_color_matrix(&mut self, state: &SettingsBank) {
        let csc = csc_from_settings(state);
        if let Err(err) = self.link.with(|lvp| lvp.load_csc(&csc)) {
            warn!("pipeline: matrix load failed: {err:?}");
        }
    }

    fn update_scanlines(&mut self, state: &SettingsBank) {
        let lut = scanline_lut_from_settings(state);
        if let Err(err) = self.link.with(|lvp| lvp.load_scanline_lut(&lut)) {
            warn!("pipeline: scanline table load failed: {err:?}");
        }
    }

    fn update_infoframe(&mut self, mode: VideoMode, state: &SettingsBank) {
        let params = avi_params(mode, state);
        debug!("pipeline: infoframe vic {}", params.vic);
        if let Err(err) = self.link.with(|lvp| lvp.load_infoframe(&params)) {
            warn!("pipeline: infoframe load failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_spi::MockSpi;
    use lucid_core::menu::value::encode_signed_byte;
    use lvp_link::{Lvp, regs};

    fn link() -> LvpShared<MockSpi> {
        LvpShared::new(Lvp::new(MockSpi::new()))
    }

    #[test]
    fn color_matrix_upload_reflects_picture_settings() {
        let link = link();
        let mut bank = SettingsBank::new();
        bank.write_field(
            WordId::Picture,
            PIC_CONTRAST_SHIFT,
            PIC_FIELD_WIDTH,
            encode_signed_byte(-64),
        );

        LvpPipeline::new(&link).update_color_matrix(&bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(frames[0][0], 0xC0 | 0x80 | regs::WIN_CSC);
        assert_eq!(frames[0].len(), 1 + 24);
        // contrast -64 halves the luma coefficient in Q12
        assert_eq!(&frames[0][1..3], &2048i16.to_le_bytes());
    }

    #[test]
    fn default_bank_yields_a_unity_matrix() {
        let link = link();
        let bank = SettingsBank::new();

        LvpPipeline::new(&link).update_color_matrix(&bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(&frames[0][1..3], &4096i16.to_le_bytes());
        // full-range RGB default keeps the offsets at zero
        assert_eq!(&frames[0][19..21], &[0, 0]);
    }

    #[test]
    fn scanline_upload_uses_the_selected_profile() {
        let link = link();
        let mut bank = SettingsBank::new();
        bank.write_field(WordId::Scanlines, SL_PROFILE_SHIFT, SL_PROFILE_WIDTH, 2);

        LvpPipeline::new(&link).update_scanlines(&bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(frames[0][0], 0xC0 | 0x80 | regs::WIN_SL_LUT);
        assert_eq!(frames[0].len(), 1 + 256);
        // profile 2 preset halves luma below the default cutoff of 96
        assert_eq!(frames[0][1 + 50], 25);
        assert_eq!(frames[0][1 + 200], 200);
    }

    #[test]
    fn scanlines_off_uploads_an_identity_table() {
        let link = link();
        let bank = SettingsBank::new();

        LvpPipeline::new(&link).update_scanlines(&bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(frames[0][1 + 123], 123);
        assert_eq!(frames[0][1 + 30], 30);
    }

    #[test]
    fn infoframe_for_a_doubled_mode_advertises_the_progressive_vic() {
        let link = link();
        let bank = SettingsBank::new();

        // 240p linedoubles by default, so the output is 480p
        LvpPipeline::new(&link).update_infoframe(VideoMode::Ntsc240p, &bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(frames[0][0], 0xC0 | 0x80 | regs::WIN_INFOFRAME);
        assert_eq!(frames[0][1 + 7], 2);
        // full range RGB
        assert_eq!(frames[0][1 + 6], 0b10 << 2);
        assert_eq!(frames[0][1 + 8], 0);
    }

    #[test]
    fn spoofed_infoframe_reports_the_interlaced_sibling() {
        let link = link();
        let mut bank = SettingsBank::new();
        bank.set_global_bit(BIT_SPOOF_INTERLACE, true);

        LvpPipeline::new(&link).update_infoframe(VideoMode::Ntsc240p, &bank);

        let frames = link.into_inner().release().frames;
        assert_eq!(frames[0][1 + 7], 6);
    }
}
