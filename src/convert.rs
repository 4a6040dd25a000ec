/// FSD to FDI conversion

use crate::error::Result;
use crate::format::GapConfig;
use crate::fsd::{FsdImage, FsdTrack};
use crate::image::{FdiHeader, FdiImage, Track};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

const FSD_EXTENSION: &str = ".fsd";
const FDI_EXTENSION: &str = ".fdi";

/// Encode every track of an FSD dump as an FM track in a new FDI image.
///
/// Sectors are laid out in the order they were dumped. Unreadable tracks keep
/// their sector ID fields but have no data fields. Fails if a sector is too
/// large for a decoded data block.
pub fn convert(fsd: &FsdImage, gaps: &GapConfig) -> Result<FdiImage> {
    let header = FdiHeader::builder().comment(&fsd.title).build();
    let mut fdi = FdiImage::with_header(header);

    for fsd_track in fsd.tracks() {
        encode_track(fdi.add_track(), fsd_track, gaps)?;
    }

    Ok(fdi)
}

fn encode_track(track: &mut Track, fsd_track: &FsdTrack, gaps: &GapConfig) -> Result<()> {
    debug!(
        "Track {}: {} sectors",
        fsd_track.track_number,
        fsd_track.sector_count()
    );

    track.add_gap_and_sync(gaps.gap1);

    let sector_count = fsd_track.sector_count();
    for (index, sector) in fsd_track.sectors().iter().enumerate() {
        track.add_sector_header(
            sector.track_id,
            sector.head_number,
            sector.sector_id,
            sector.size_id,
        );
        track.add_gap_and_sync(gaps.gap2);

        if fsd_track.readable {
            if sector.has_crc_error() {
                warn!(
                    "Track {} sector {} has a data CRC error",
                    fsd_track.track_number, sector.sector_id
                );
            }
            track.add_sector_data(
                sector.data(),
                sector.is_deleted_data(),
                !sector.has_crc_error(),
            )?;
        }

        // No GAP#3 after the final sector
        if index + 1 < sector_count {
            track.add_gap_and_sync(gaps.gap3);
        }
    }

    if track.encoded_len() > track.capacity() {
        warn!(
            "Track {} does not fit: {} bytes of {}, try smaller gaps",
            fsd_track.track_number,
            track.encoded_len(),
            track.capacity()
        );
    }
    track.add_gap4();
    Ok(())
}

/// Read `input`, convert it and write the FDI image to `output`.
///
/// A partially written output file is removed on failure; an existing file
/// that cannot be opened for writing is left untouched.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    gaps: &GapConfig,
) -> Result<()> {
    let fsd = FsdImage::open(input)?;
    info!("Title: {}", fsd.title);
    info!(
        "Created: {}/{}/{} by creator {}, release {}",
        fsd.creation.day,
        fsd.creation.month,
        fsd.creation.year,
        fsd.creation.creator_id,
        fsd.creation.release
    );
    info!("Tracks: {}", fsd.track_count());

    convert(&fsd, gaps)?.save(output)
}

/// Output filename for `input`: the last `.fsd` (any case) becomes `.fdi`,
/// otherwise `.fdi` is appended
pub fn derive_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let name = input.as_ref().to_string_lossy();
    let lower = name.to_ascii_lowercase();

    match lower.rfind(FSD_EXTENSION) {
        Some(pos) => {
            let mut out = String::with_capacity(name.len());
            out.push_str(&name[..pos]);
            out.push_str(FDI_EXTENSION);
            out.push_str(&name[pos + FSD_EXTENSION.len()..]);
            PathBuf::from(out)
        }
        None => PathBuf::from(format!("{}{}", name, FDI_EXTENSION)),
    }
}
