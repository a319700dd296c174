//! Scanline attenuation table generation.
//!
//! The LVP darkens alternate output lines by looking each pixel's luma
//! up in a 256-entry table. `strength` sets the base attenuation,
//! `hybrid` backs it off for bright pixels, and `cutoff` disables the
//! effect entirely above a luma threshold.

/// Table length, one entry per luma value.
pub const LUT_LEN: usize = 256;

/// Computes the attenuation table for one profile.
///
/// `strength` runs 0..=256 where 256 blacks the line out, `hybrid`
/// runs 0..=255 where 128 cancels the full strength at peak luma.
pub fn build_scanline_lut(strength: u16, hybrid: u8, cutoff: u8) -> [u8; LUT_LEN] {
    let mut lut = [0u8; LUT_LEN];
    for (luma, entry) in lut.iter_mut().enumerate() {
        let luma = luma as u32;
        let reduction = (u32::from(hybrid) * luma) >> 7;
        let mut effective = u32::from(strength).saturating_sub(reduction);
        if luma >= u32::from(cutoff) {
            effective = 0;
        }
        *entry = ((luma * (256 - effective.min(256))) >> 8).min(255) as u8;
    }
    lut
}
