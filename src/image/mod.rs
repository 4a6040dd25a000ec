/// FDI image data structures

/// FDI file header
pub mod header;
/// Track stream builder
pub mod track;

pub use header::{FdiHeader, FdiHeaderBuilder};
pub use track::Track;

use crate::error::{FdiError, Result};
use log::warn;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An FDI image under construction.
///
/// Tracks are appended in physical order with [`add_track`](FdiImage::add_track)
/// and the image is finished by [`write`](FdiImage::write) or
/// [`save`](FdiImage::save), which consume it.
#[derive(Debug, Clone, Default)]
pub struct FdiImage {
    /// Header, written with the final track count
    header: FdiHeader,
    /// Tracks in physical order
    tracks: Vec<Track>,
}

impl FdiImage {
    /// Create an empty image with the default header
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty image with the given header
    pub fn with_header(header: FdiHeader) -> Self {
        Self {
            header,
            tracks: Vec::new(),
        }
    }

    /// Get the header
    pub fn header(&self) -> &FdiHeader {
        &self.header
    }

    /// Append a new empty track and return it for encoding
    pub fn add_track(&mut self) -> &mut Track {
        self.tracks.push(Track::new());
        let index = self.tracks.len() - 1;
        &mut self.tracks[index]
    }

    /// Get all tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get the number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Write the finished image to `writer`
    pub fn write<W: Write>(self, writer: &mut W) -> Result<()> {
        crate::io::write_fdi(&self, writer)
    }

    /// Create `path` and write the finished image to it.
    ///
    /// If writing fails after the file was created, the partial file is
    /// removed. A file that could not be created is left alone.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FdiError::open(path, e))?;
        let mut writer = BufWriter::new(file);

        let result = self
            .write(&mut writer)
            .and_then(|()| writer.flush().map_err(FdiError::from));
        if result.is_err() {
            drop(writer);
            if let Err(e) = std::fs::remove_file(path) {
                warn!("Cannot remove partial file '{}': {}", path.display(), e);
            }
        }
        result
    }
}
