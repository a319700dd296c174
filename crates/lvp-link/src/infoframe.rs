//! AVI infoframe assembly (CEA-861 version 2).
//!
//! The LVP inserts the frame verbatim into the output stream, so the
//! checksum must be computed here.

/// Header (3 bytes), checksum, 13 data bytes.
pub const AVI_FRAME_LEN: usize = 17;

/// Output colorspace signalled to the sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AviColorspace {
    Rgb,
    YCbCr444,
    YCbCr422,
}

/// Inputs to [`build_avi_infoframe`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AviParams {
    /// Video identification code, already adjusted for any interlace
    /// spoofing upstream.
    pub vic: u8,
    pub colorspace: AviColorspace,
    /// RGB quantization range. Ignored for YCbCr, which is always
    /// limited range.
    pub full_range: bool,
    pub pixel_repetition: u8,
}

/// Assembles a checksummed AVI infoframe.
pub fn build_avi_infoframe(params: &AviParams) -> [u8; AVI_FRAME_LEN] {
    let mut frame = [0u8; AVI_FRAME_LEN];
    frame[0] = 0x82;
    frame[1] = 0x02;
    frame[2] = 0x0D;

    // PB1: colorspace plus active-format-valid.
    let y = match params.colorspace {
        AviColorspace::Rgb => 0b00,
        AviColorspace::YCbCr422 => 0b01,
        AviColorspace::YCbCr444 => 0b10,
    };
    frame[4] = (y << 5) | 0x10;

    // PB2: colorimetry plus 4:3 picture aspect, same-as-picture format.
    let colorimetry = match params.colorspace {
        AviColorspace::Rgb => 0b00,
        // SMPTE 170M suits the SD and ED modes the pipeline produces.
        _ => 0b01,
    };
    frame[5] = (colorimetry << 6) | 0x18;

    // PB3: quantization range, RGB only.
    frame[6] = match params.colorspace {
        AviColorspace::Rgb if params.full_range => 0b10 << 2,
        AviColorspace::Rgb => 0b01 << 2,
        _ => 0,
    };

    frame[7] = params.vic & 0x7F;
    frame[8] = params.pixel_repetition & 0x0F;

    let sum: u32 = frame.iter().map(|&b| u32::from(b)).sum();
    frame[3] = 0u8.wrapping_sub(sum as u8);
    frame
}
