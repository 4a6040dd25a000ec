/// CRC-CCITT as computed by the floppy disk controller

/// Initial CRC value for both ID and data fields
pub const CRC_SEED: u16 = 0xFFFF;

/// CCITT polynomial x^16 + x^12 + x^5 + 1
pub const CRC_POLYNOMIAL: u16 = 0x1021;

/// Add one byte to a running CRC, most significant bit first
#[inline]
pub fn crc16_add(crc: u16, byte: u8) -> u16 {
    let byte = byte as u16;
    (0..8).fold(crc, |crc, i| {
        let feedback = ((crc >> 8) ^ (byte << i)) & 0x0080 != 0;
        (crc << 1) ^ if feedback { CRC_POLYNOMIAL } else { 0 }
    })
}

/// Add a run of bytes to a running CRC
pub fn crc16(seed: u16, bytes: &[u8]) -> u16 {
    bytes.iter().fold(seed, |crc, &b| crc16_add(crc, b))
}
