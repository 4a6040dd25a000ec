/// FSD sector dump data structures

/// Sector records
pub mod sector;

pub use sector::FsdSector;

use crate::error::Result;
use std::path::Path;

/// Creation metadata from the FSD header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreationData {
    /// Day of month
    pub day: u8,
    /// Month
    pub month: u8,
    /// Year
    pub year: u16,
    /// Creator ID
    pub creator_id: u8,
    /// Release number, passed through as read
    pub release: u16,
}

impl CreationData {
    /// Decode the 5 byte creation block
    pub fn from_bytes(data: [u8; 5]) -> Self {
        Self {
            day: data[0] >> 3,
            month: data[2] & 0x0F,
            year: (((data[0] & 0x07) as u16) << 8) | data[1] as u16,
            creator_id: data[2] >> 4,
            // The bit layout of this field is uncertain
            release: (((data[4] >> 6) as u16) << 8) | data[3] as u16,
        }
    }
}

/// A track as captured in an FSD dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsdTrack {
    /// Physical track number
    pub track_number: u8,
    /// Sector data was captured for this track
    pub readable: bool,
    /// Sectors in the order they were dumped
    sectors: Vec<FsdSector>,
}

impl FsdTrack {
    /// Create a new empty track
    pub fn new(track_number: u8, readable: bool) -> Self {
        Self {
            track_number,
            readable,
            sectors: Vec::new(),
        }
    }

    /// Add a sector to this track
    pub fn add_sector(&mut self, sector: FsdSector) {
        self.sectors.push(sector);
    }

    /// Get a reference to all sectors
    pub fn sectors(&self) -> &[FsdSector] {
        &self.sectors
    }

    /// Get the number of sectors in this track
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Track has no sectors at all
    pub fn is_unformatted(&self) -> bool {
        self.sectors.is_empty()
    }
}

/// An FSD disc image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FsdImage {
    /// Creation metadata
    pub creation: CreationData,
    /// Disc title
    pub title: String,
    /// Tracks in physical order
    tracks: Vec<FsdTrack>,
}

impl FsdImage {
    /// Create an empty image
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            creation: CreationData::default(),
            title: title.into(),
            tracks: Vec::new(),
        }
    }

    /// Open an FSD file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::read_fsd(path)
    }

    /// Add a track
    pub fn add_track(&mut self, track: FsdTrack) {
        self.tracks.push(track);
    }

    /// Get all tracks
    pub fn tracks(&self) -> &[FsdTrack] {
        &self.tracks
    }

    /// Get the number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
