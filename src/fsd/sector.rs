/// FSD sector records

use crate::format::constants::*;

/// A sector as captured in an FSD dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsdSector {
    /// C - track number from the sector ID
    pub track_id: u8,
    /// H - head number from the sector ID
    pub head_number: u8,
    /// R - sector number from the sector ID
    pub sector_id: u8,
    /// N - advertised size code from the sector ID
    pub size_id: u8,
    /// Size code of the data actually read
    pub(crate) real_size_id: u8,
    /// 8271 result code for the read
    pub(crate) error_code: u8,
    /// Sector data, empty for unreadable tracks
    pub(crate) data: Vec<u8>,
}

impl FsdSector {
    /// Create a sector with data
    pub fn new(track_id: u8, head_number: u8, sector_id: u8, size_id: u8, data: Vec<u8>) -> Self {
        Self {
            track_id,
            head_number,
            sector_id,
            size_id,
            real_size_id: size_id,
            error_code: 0,
            data,
        }
    }

    /// Set the 8271 result code (0x20 deleted data, 0x0E data CRC error)
    pub fn with_error_code(mut self, error_code: u8) -> Self {
        self.error_code = error_code;
        self
    }

    /// Size code of the data actually stored
    pub fn real_size_id(&self) -> u8 {
        self.real_size_id
    }

    /// 8271 result code
    pub fn error_code(&self) -> u8 {
        self.error_code
    }

    /// Sector was written with a deleted data address mark
    pub fn is_deleted_data(&self) -> bool {
        self.error_code == FSD_ERROR_DELETED_DATA
    }

    /// Sector data failed its CRC when dumped
    pub fn has_crc_error(&self) -> bool {
        self.error_code == FSD_ERROR_CRC
    }

    /// Sector data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
