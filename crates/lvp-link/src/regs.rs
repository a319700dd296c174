//! Register map and SPI command encoding for the LVP control port.
//!
//! Every transaction opens with a single command byte: bit 7 selects
//! write, bit 6 selects burst, bits 5..0 carry the register address.
//! Plain register access always moves 32 bits, little endian. Burst
//! windows take an arbitrary byte payload.

/// Identification register, reads [`LVP_ID`].
pub const REG_ID: u8 = 0x00;
/// Combined output control word (per-mode bits merged with globals).
pub const REG_OUTPUT: u8 = 0x01;
/// OSD background alpha and tint.
pub const REG_OSD_BG: u8 = 0x02;
/// Held command bits: pad buttons, remote keys, event latches.
pub const REG_STATUS: u8 = 0x03;
/// Detected input mode code.
pub const REG_MODE: u8 = 0x04;
/// Write-1-to-clear acknowledge for latched event bits.
pub const REG_EVENT_ACK: u8 = 0x05;
/// Cell address register for the OSD data window.
pub const REG_OSD_ADDR: u8 = 0x08;

/// OSD character RAM burst window.
pub const WIN_OSD_DATA: u8 = 0x09;
/// Color matrix burst window.
pub const WIN_CSC: u8 = 0x10;
/// Scanline attenuation table burst window.
pub const WIN_SL_LUT: u8 = 0x11;
/// AVI infoframe burst window.
pub const WIN_INFOFRAME: u8 = 0x12;

/// Highest addressable register.
pub const MAX_REG: u8 = 0x3F;

const CMD_WRITE: u8 = 0x80;
const CMD_BURST: u8 = 0x40;

/// Command byte plus a little-endian register value.
pub const WRITE_FRAME_LEN: usize = 5;

/// Magic value in [`REG_ID`], "LVP1".
pub const LVP_ID: u32 = 0x4C56_5031;

/// Builds the command byte for a register read.
pub fn read_command(addr: u8) -> Option<u8> {
    if addr > MAX_REG {
        return None;
    }
    Some(addr)
}

/// Builds the command byte for a burst write into a window.
pub fn burst_command(addr: u8) -> Option<u8> {
    if addr > MAX_REG {
        return None;
    }
    Some(CMD_WRITE | CMD_BURST | addr)
}

/// Builds the full frame for a 32-bit register write.
pub fn build_write_frame(addr: u8, value: u32) -> Option<[u8; WRITE_FRAME_LEN]> {
    if addr > MAX_REG {
        return None;
    }
    let bytes = value.to_le_bytes();
    Some([CMD_WRITE | addr, bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_command_is_the_bare_address() {
        assert_eq!(read_command(REG_STATUS), Some(0x03));
        assert_eq!(read_command(MAX_REG), Some(0x3F));
    }

    #[test]
    fn write_frame_sets_bit7_and_encodes_little_endian() {
        let frame = build_write_frame(REG_OUTPUT, 0x1234_5678).unwrap();
        assert_eq!(frame, [0x81, 0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn burst_command_sets_write_and_burst_bits() {
        assert_eq!(burst_command(WIN_OSD_DATA), Some(0xC9));
        assert_eq!(burst_command(WIN_CSC), Some(0xD0));
    }

    #[test]
    fn out_of_range_addresses_are_rejected() {
        assert_eq!(read_command(0x40), None);
        assert_eq!(burst_command(0x80), None);
        assert_eq!(build_write_frame(0xFF, 0), None);
    }

    #[test]
    fn id_magic_spells_lvp1() {
        assert_eq!(&LVP_ID.to_be_bytes(), b"LVP1");
    }
}
