/// FDI and FSD magic bytes and constants

/// FDI header signature, CR/LF terminated
pub const FDI_SIGNATURE: &[u8; 27] = b"Formatted Disk Image file\r\n";

/// Creator text written into every FDI header
pub const FDI_CREATOR: &[u8] = b"Created by fsd2fdi version 0.1";

/// Size of the creator field (space padded)
pub const FDI_CREATOR_SIZE: usize = 30;

/// Size of the comment field (0x1A padded)
pub const FDI_COMMENT_SIZE: usize = 80;

/// Text end-of-file marker, also used to pad the comment
pub const FDI_EOF_MARKER: u8 = 0x1A;

/// Total size of the fixed FDI header
pub const FDI_HEADER_SIZE: usize = 152;

/// FDI format version written to the header
pub const FDI_VERSION: (u8, u8) = (2, 2);

/// Disk type: 5.25" disk
pub const FDI_DISK_TYPE_525: u8 = 1;

/// Rotation speed field, as written by Disk2FDI
pub const FDI_ROTATION_SPEED: u8 = 232;

/// Track density: 48 tpi
pub const FDI_TPI_48: u8 = 0;

/// Head width: 96 tpi
pub const FDI_HEAD_WIDTH_96: u8 = 2;

/// Track descriptor tag for a sector-described FM track
pub const TRACK_DESCRIPTOR_TAG: u8 = 0xCF;

/// Track data is padded to multiples of this size
pub const TRACK_PAGE_SIZE: usize = 256;

/// Track data begins on a multiple of this size from the start of the file
pub const TRACK_DATA_ALIGNMENT: usize = 512;

/// Bytes on one FM track at 125 kbit/s and 300 rpm
pub const FM_TRACK_CAPACITY: usize = 3125;

/// Track stream descriptors for FM tracks
pub mod descriptor {
    /// FM ID address mark
    pub const ID_MARK: u8 = 0x04;
    /// FM data address mark
    pub const DATA_MARK: u8 = 0x05;
    /// FM deleted data address mark
    pub const DELETED_DATA_MARK: u8 = 0x06;
    /// Run of a single FM-decoded byte: count (0 = 256), value
    pub const RLE_DECODED_DATA: u8 = 0x09;
    /// FM-decoded data: 16-bit bit count, then the bytes
    pub const DECODED_DATA: u8 = 0x0C;
    /// FM-decoded data with 65536 added to the bit count
    pub const DECODED_DATA_65536: u8 = 0x0D;
}

/// Address mark byte values as seen by the FDC, included in CRCs
pub mod address_mark {
    /// Sector ID address mark
    pub const ID: u8 = 0xFE;
    /// Data address mark
    pub const DATA: u8 = 0xFB;
    /// Deleted data address mark
    pub const DELETED_DATA: u8 = 0xF8;
}

/// Gap filler byte
pub const GAP_BYTE: u8 = 0xFF;

/// Sync filler byte
pub const SYNC_BYTE: u8 = 0x00;

/// Length of the sync field following every gap
pub const SYNC_LENGTH: usize = 6;

/// Byte a freshly formatted sector is filled with
pub const FORMAT_FILLER_BYTE: u8 = 0xE5;

/// Value XORed into a data CRC to mark the sector as having a CRC error
pub const CRC_ERROR_MASK: u16 = 0x1234;

/// FSD file signature
pub const FSD_SIGNATURE: &[u8; 3] = b"FSD";

/// FSD readable track marker
pub const FSD_TRACK_READABLE: u8 = 0xFF;

/// FSD sector error code: deleted data
pub const FSD_ERROR_DELETED_DATA: u8 = 0x20;

/// FSD sector error code: data CRC error
pub const FSD_ERROR_CRC: u8 = 0x0E;

/// FDC sector size code to actual byte size mapping
/// Index: size_code (0-8), Value: actual size in bytes
pub const FDC_SECTOR_SIZES: [usize; 9] = [
    128,    // 0
    256,    // 1
    512,    // 2
    1024,   // 3
    2048,   // 4
    4096,   // 5
    8192,   // 6
    16384,  // 7
    32768,  // 8
];

/// Convert FDC size code to actual byte size
#[inline]
pub fn fdc_size_to_bytes(size_code: u8) -> Option<usize> {
    FDC_SECTOR_SIZES.get(size_code as usize).copied()
}

/// Number of 256-byte pages needed to hold `len` bytes
#[inline]
pub fn pages_for(len: usize) -> usize {
    len.div_ceil(TRACK_PAGE_SIZE)
}
