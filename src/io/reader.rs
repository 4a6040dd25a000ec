/// FSD file reader

use crate::error::{FdiError, Result};
use crate::format::constants::*;
use crate::fsd::{CreationData, FsdImage, FsdSector, FsdTrack};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Read an FSD file from disk
pub fn read_fsd<P: AsRef<Path>>(path: P) -> Result<FsdImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FdiError::open(path, e))?;
    parse_fsd(BufReader::new(file))
}

/// Parse an FSD image from any byte source
pub fn parse_fsd<R: Read>(reader: R) -> Result<FsdImage> {
    let mut input = Input { reader, offset: 0 };

    let mut magic = [0u8; 3];
    input.read_exact(&mut magic)?;
    if &magic != FSD_SIGNATURE {
        return Err(FdiError::invalid_format("Not an FSD file"));
    }

    let mut creation = [0u8; 5];
    input.read_exact(&mut creation)?;
    let creation = CreationData::from_bytes(creation);

    let mut title = Vec::new();
    loop {
        match input.byte()? {
            0 => break,
            b => title.push(b),
        }
    }
    let title = String::from_utf8_lossy(&title).into_owned();

    let num_tracks = input.byte()?;
    let mut image = FsdImage::new(title);
    image.creation = creation;

    for _ in 0..num_tracks {
        let track = read_track(&mut input)?;
        image.add_track(track);
    }

    Ok(image)
}

fn read_track<R: Read>(input: &mut Input<R>) -> Result<FsdTrack> {
    let track_number = input.byte()?;
    let num_sectors = input.byte()?;

    if num_sectors == 0 {
        debug!("Track {} is unformatted", track_number);
        return Ok(FsdTrack::new(track_number, false));
    }

    let readable = input.byte()? == FSD_TRACK_READABLE;
    if !readable {
        warn!("Track {} is unreadable, only sector IDs are available", track_number);
    }

    let mut track = FsdTrack::new(track_number, readable);
    for _ in 0..num_sectors {
        let mut id = [0u8; 4];
        input.read_exact(&mut id)?;
        let [track_id, head_number, sector_id, size_id] = id;

        let mut sector = FsdSector::new(track_id, head_number, sector_id, size_id, Vec::new());
        if readable {
            let real_size_id = input.byte()?;
            let error_code = input.byte()?;
            let size = fdc_size_to_bytes(real_size_id).ok_or_else(|| {
                FdiError::parse(
                    input.offset - 2,
                    format!("Invalid sector size code {}", real_size_id),
                )
            })?;
            let mut data = vec![0u8; size];
            input.read_exact(&mut data)?;

            sector.real_size_id = real_size_id;
            sector.error_code = error_code;
            sector.data = data;
        }
        track.add_sector(sector);
    }

    Ok(track)
}

/// Byte source that remembers how far it has read
struct Input<R> {
    reader: R,
    offset: usize,
}

impl<R: Read> Input<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.offset += buf.len();
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(FdiError::parse(self.offset, "Unexpected end of file"))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn byte(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(title: &str, num_tracks: u8) -> Vec<u8> {
        let mut bytes = b"FSD".to_vec();
        bytes.extend_from_slice(&[0x89, 0x23, 0x59, 0xAB, 0x80]);
        bytes.extend_from_slice(title.as_bytes());
        bytes.push(0);
        bytes.push(num_tracks);
        bytes
    }

    #[test]
    fn test_parse_readable_track() {
        let mut bytes = header("GAMES", 1);
        bytes.extend_from_slice(&[0, 2, 0xFF]);
        bytes.extend_from_slice(&[0, 0, 0, 1, 1, 0x00]);
        bytes.extend_from_slice(&[0x11; 256]);
        bytes.extend_from_slice(&[0, 0, 1, 1, 0, 0x0E]);
        bytes.extend_from_slice(&[0x22; 128]);

        let image = parse_fsd(bytes.as_slice()).unwrap();
        assert_eq!(image.title, "GAMES");
        assert_eq!(image.creation.day, 17);
        assert_eq!(image.track_count(), 1);

        let track = &image.tracks()[0];
        assert!(track.readable);
        assert_eq!(track.sector_count(), 2);

        let first = &track.sectors()[0];
        assert_eq!(first.size_id, 1);
        assert_eq!(first.data(), &[0x11; 256][..]);
        assert!(!first.has_crc_error());

        let second = &track.sectors()[1];
        assert_eq!(second.sector_id, 1);
        assert_eq!(second.real_size_id(), 0);
        assert_eq!(second.data().len(), 128);
        assert!(second.has_crc_error());
    }

    #[test]
    fn test_parse_unreadable_and_unformatted() {
        let mut bytes = header("", 2);
        bytes.extend_from_slice(&[0, 1, 0x00]);
        bytes.extend_from_slice(&[0, 0, 9, 1]);
        bytes.extend_from_slice(&[1, 0]);

        let image = parse_fsd(bytes.as_slice()).unwrap();
        assert_eq!(image.title, "");

        let unreadable = &image.tracks()[0];
        assert!(!unreadable.readable);
        assert_eq!(unreadable.sectors()[0].sector_id, 9);
        assert!(unreadable.sectors()[0].data().is_empty());

        let unformatted = &image.tracks()[1];
        assert_eq!(unformatted.track_number, 1);
        assert!(unformatted.is_unformatted());
    }

    #[test]
    fn test_bad_magic() {
        let err = parse_fsd(&b"DSK\0\0\0\0\0"[..]).unwrap_err();
        assert!(matches!(err, FdiError::InvalidFormat(_)));
    }

    #[test]
    fn test_truncated_sector() {
        let mut bytes = header("T", 1);
        bytes.extend_from_slice(&[0, 1, 0xFF, 0, 0, 0, 1, 1, 0]);
        bytes.extend_from_slice(&[0; 10]);
        let len = bytes.len() - 10;

        match parse_fsd(bytes.as_slice()) {
            Err(FdiError::ParseError { offset, .. }) => assert_eq!(offset, len),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_size_code() {
        let mut bytes = header("T", 1);
        bytes.extend_from_slice(&[0, 1, 0xFF, 0, 0, 0, 1, 12, 0]);
        let err = parse_fsd(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, FdiError::ParseError { .. }));
    }
}
