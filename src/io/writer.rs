/// FDI file writer

use crate::error::{FdiError, Result};
use crate::format::constants::*;
use crate::image::FdiImage;
use log::debug;
use std::io::Write;

/// Serialize an FDI image: header, track descriptor table, then track data.
///
/// Fails before writing anything if a track needs more than 255 pages.
pub fn write_fdi<W: Write>(image: &FdiImage, writer: &mut W) -> Result<()> {
    let pages = image
        .tracks()
        .iter()
        .enumerate()
        .map(|(index, track)| {
            u8::try_from(pages_for(track.encoded_len())).map_err(|_| FdiError::TrackTooLarge {
                track: index,
                len: track.encoded_len(),
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let header = image.header().with_track_count(image.track_count());
    writer.write_all(&header.to_bytes())?;
    let mut position = FDI_HEADER_SIZE;

    // One descriptor per track: type, then length in 256-byte pages
    for &count in &pages {
        writer.write_all(&[TRACK_DESCRIPTOR_TAG, count])?;
        position += 2;
    }

    // Track data starts on a 512 byte boundary
    let aligned = position.next_multiple_of(TRACK_DATA_ALIGNMENT);
    write_zeros(writer, aligned - position)?;

    for (index, (track, &count)) in image.tracks().iter().zip(&pages).enumerate() {
        let padded = count as usize * TRACK_PAGE_SIZE;
        debug!(
            "Track {}: {} encoded bytes, {} on disk",
            index,
            track.encoded_len(),
            padded
        );
        writer.write_all(track.data())?;
        write_zeros(writer, padded - track.encoded_len())?;
    }

    Ok(())
}

fn write_zeros<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    if count > 0 {
        writer.write_all(&vec![0u8; count])?;
    }
    Ok(())
}
