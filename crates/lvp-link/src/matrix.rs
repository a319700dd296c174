//! Color space conversion matrices for the LVP's CSC stage.
//!
//! The hardware multiplies each YCbCr pixel by a 3x3 coefficient matrix
//! in Q12 fixed point and adds a per-channel offset in sixteenths of a
//! pixel level. Brightness, contrast and saturation fold into the same
//! matrix, so a picture change is one table upload.

/// Fixed-point unity for matrix coefficients.
pub const Q12: i32 = 4096;

// BT.601 YCbCr to RGB terms in Q12.
const KR_CR: i32 = 5743; // 1.402
const KG_CB: i32 = 1409; // 0.344
const KG_CR: i32 = 2925; // 0.714
const KB_CB: i32 = 7258; // 1.772

// 219/255 in Q12, compresses full swing into the limited range.
const LIMITED_SCALE: i32 = 3518;

/// Coefficients in Q12, offsets in 1/16 level steps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CscMatrix {
    pub coeff: [[i16; 3]; 3],
    pub offset: [i16; 3],
}

/// Color format the matrix converts into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CscOutput {
    RgbFull,
    RgbLimited,
    YCbCr,
}

const fn mul_q12(a: i32, b: i32) -> i32 {
    (a * b + Q12 / 2) >> 12
}

const fn narrow(value: i32) -> i16 {
    if value > i16::MAX as i32 {
        i16::MAX
    } else if value < i16::MIN as i32 {
        i16::MIN
    } else {
        value as i16
    }
}

/// Builds the conversion matrix for one output format.
///
/// `brightness` is a signed level shift, `contrast` and `saturation`
/// are Q7 gains where 128 is unity.
pub fn compute_csc(output: CscOutput, brightness: i32, contrast: u8, saturation: u8) -> CscMatrix {
    let gain = i32::from(contrast) << 5;
    let sat = i32::from(saturation) << 5;
    let shift = brightness << 4;

    // Passthrough with per-channel gain, luma shifted by brightness.
    if output == CscOutput::YCbCr {
        return CscMatrix {
            coeff: [[gain, 0, 0], [0, sat, 0], [0, 0, sat]].map(|row| row.map(narrow)),
            offset: [narrow(shift), 0, 0],
        };
    }

    let mut rows = [
        [gain, 0, mul_q12(sat, KR_CR)],
        [gain, -mul_q12(sat, KG_CB), -mul_q12(sat, KG_CR)],
        [gain, mul_q12(sat, KB_CB), 0],
    ];
    let mut offset = shift;
    if output == CscOutput::RgbLimited {
        for row in &mut rows {
            for value in row {
                *value = mul_q12(*value, LIMITED_SCALE);
            }
        }
        offset += 16 << 4;
    }

    CscMatrix {
        coeff: rows.map(|row| row.map(narrow)),
        offset: [narrow(offset); 3],
    }
}

/// Serializes a matrix for the CSC burst window: nine coefficients in
/// row-major order, then the three offsets, all little endian.
pub fn pack_csc(csc: &CscMatrix) -> [u8; 24] {
    let mut bytes = [0u8; 24];
    let mut cursor = 0;
    for row in &csc.coeff {
        for &value in row {
            let le = value.to_le_bytes();
            bytes[cursor] = le[0];
            bytes[cursor + 1] = le[1];
            cursor += 2;
        }
    }
    for &value in &csc.offset {
        let le = value.to_le_bytes();
        bytes[cursor] = le[0];
        bytes[cursor + 1] = le[1];
        cursor += 2;
    }
    bytes
}
