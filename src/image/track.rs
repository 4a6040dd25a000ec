/// FM track stream builder

use crate::crc::{crc16, crc16_add, CRC_SEED};
use crate::error::{FdiError, Result};
use crate::format::constants::*;
use crate::rle;

/// Number of bits in an ID field block: C, H, R, N and the two CRC bytes
const ID_FIELD_BITS: u16 = 6 * 8;

/// Bit counts from here on use the large decoded data tag
const LARGE_BLOCK_BITS: usize = 0x10000;

/// Most bits a single decoded data block can hold
const MAX_BLOCK_BITS: usize = LARGE_BLOCK_BITS + 0xFFFF;

/// One encoded FM track.
///
/// Tracks are created by [`FdiImage::add_track`](crate::image::FdiImage::add_track)
/// and filled in physical order: GAP#1, then for every sector an ID field, GAP#2,
/// the data field and GAP#3, finishing with [`add_gap4`](Track::add_gap4).
#[derive(Debug, Clone)]
pub struct Track {
    /// Encoded descriptor stream
    data: Vec<u8>,
    /// Track capacity in encoded bytes
    capacity: usize,
}

impl Track {
    /// Create an empty FM track
    pub(crate) fn new() -> Self {
        Self::with_capacity(FM_TRACK_CAPACITY)
    }

    /// Create an empty track holding `capacity` bytes
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Encoded stream as it will be written to the image
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the encoded stream in bytes
    pub fn encoded_len(&self) -> usize {
        self.data.len()
    }

    /// Track capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a gap of `size` 0xFF bytes followed by the 6 byte 0x00 sync field
    pub fn add_gap_and_sync(&mut self, size: u8) {
        rle::push_run(&mut self.data, GAP_BYTE, size as usize);
        rle::push_run(&mut self.data, SYNC_BYTE, SYNC_LENGTH);
    }

    /// Add a sector ID field (address mark, C, H, R, N and CRC)
    pub fn add_sector_header(&mut self, track_id: u8, head_id: u8, sector_id: u8, size_id: u8) {
        let id = [track_id, head_id, sector_id, size_id];
        let crc = crc16(crc16_add(CRC_SEED, address_mark::ID), &id);

        self.data.push(descriptor::ID_MARK);
        self.data.push(descriptor::DECODED_DATA);
        self.data.extend_from_slice(&ID_FIELD_BITS.to_be_bytes());
        self.data.extend_from_slice(&id);
        self.data.extend_from_slice(&crc.to_be_bytes());
    }

    /// Add a sector data field.
    ///
    /// When `valid_crc` is false the CRC is deliberately corrupted so the sector
    /// reads back with a data CRC error. Sectors still holding the format filler
    /// are stored as a run rather than literally. Literal payloads longer than
    /// 16383 bytes do not fit a decoded data block and are rejected before
    /// anything is added to the track.
    pub fn add_sector_data(
        &mut self,
        payload: &[u8],
        deleted_data: bool,
        valid_crc: bool,
    ) -> Result<()> {
        let filler = !payload.is_empty() && payload.iter().all(|&b| b == FORMAT_FILLER_BYTE);
        let bits = payload.len() * 8;
        if !filler && bits > MAX_BLOCK_BITS {
            return Err(FdiError::SectorTooLarge(payload.len()));
        }

        let (mark, tag) = if deleted_data {
            (address_mark::DELETED_DATA, descriptor::DELETED_DATA_MARK)
        } else {
            (address_mark::DATA, descriptor::DATA_MARK)
        };

        let mut crc = crc16(crc16_add(CRC_SEED, mark), payload);
        if !valid_crc {
            crc ^= CRC_ERROR_MASK;
        }

        self.data.push(tag);

        if filler {
            rle::push_run(&mut self.data, FORMAT_FILLER_BYTE, payload.len());
        } else {
            let (tag, count) = if bits < LARGE_BLOCK_BITS {
                (descriptor::DECODED_DATA, bits)
            } else {
                (descriptor::DECODED_DATA_65536, bits - LARGE_BLOCK_BITS)
            };
            // count <= 0xFFFF, checked above
            self.data.push(tag);
            self.data.extend_from_slice(&(count as u16).to_be_bytes());
            self.data.extend_from_slice(payload);
        }

        self.data.extend_from_slice(&crc.to_be_bytes());
        Ok(())
    }

    /// Pad the rest of the track with 0xFF up to its capacity.
    ///
    /// Adds nothing when the stream already fills the capacity.
    pub fn add_gap4(&mut self) {
        let remaining = self.capacity.saturating_sub(self.data.len());
        rle::push_run(&mut self.data, GAP_BYTE, remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::tests::decode_runs;
    use proptest::prelude::*;

    fn payload_128() -> Vec<u8> {
        (0..128u8).collect()
    }

    fn padding_after(track: &Track, from: usize) -> usize {
        decode_runs(&track.data()[from..])
            .iter()
            .map(|&(value, run)| {
                assert_eq!(value, 0xFF);
                run
            })
            .sum()
    }

    #[test]
    fn test_new_track() {
        let track = Track::new();
        assert_eq!(track.encoded_len(), 0);
        assert_eq!(track.capacity(), 3125);
    }

    #[test]
    fn test_gap_and_sync() {
        let mut track = Track::new();
        track.add_gap_and_sync(16);
        assert_eq!(decode_runs(track.data()), vec![(0xFF, 16), (0x00, 6)]);
        assert_eq!(track.encoded_len(), 6);
    }

    #[test]
    fn test_sector_header() {
        let mut track = Track::new();
        track.add_sector_header(1, 0, 3, 1);
        assert_eq!(
            track.data(),
            &[0x04, 0x0C, 0x00, 0x30, 1, 0, 3, 1, 0xD2, 0x34]
        );
    }

    #[test]
    fn test_sector_header_blank_id() {
        let mut track = Track::new();
        track.add_sector_header(0, 0, 0, 0);
        assert_eq!(&track.data()[8..], &[0xE1, 0xF2]);
    }

    #[test]
    fn test_sector_data_literal() {
        let payload = payload_128();
        let mut track = Track::new();
        track.add_sector_data(&payload, false, true).unwrap();

        let data = track.data();
        assert_eq!(data.len(), 1 + 3 + 128 + 2);
        assert_eq!(&data[..4], &[0x05, 0x0C, 0x04, 0x00]);
        assert_eq!(&data[4..132], payload.as_slice());
        let crc = crc16(CRC_SEED, &[&[0xFB][..], &payload[..]].concat());
        assert_eq!(crc, 0xA023);
        assert_eq!(&data[132..], &crc.to_be_bytes());
    }

    #[test]
    fn test_sector_data_bad_crc() {
        let payload = payload_128();
        let mut good = Track::new();
        good.add_sector_data(&payload, false, true).unwrap();
        let mut bad = Track::new();
        bad.add_sector_data(&payload, false, false).unwrap();

        let good_crc = u16::from_be_bytes([good.data()[132], good.data()[133]]);
        let bad_crc = u16::from_be_bytes([bad.data()[132], bad.data()[133]]);
        assert_eq!(bad_crc, good_crc ^ 0x1234);
        assert_eq!(&good.data()[..132], &bad.data()[..132]);
    }

    #[test]
    fn test_sector_data_deleted() {
        let payload = payload_128();
        let mut track = Track::new();
        track.add_sector_data(&payload, true, true).unwrap();

        let data = track.data();
        assert_eq!(data[0], 0x06);
        let crc = crc16(crc16_add(CRC_SEED, 0xF8), &payload);
        assert_eq!(&data[132..], &crc.to_be_bytes());
    }

    #[test]
    fn test_sector_data_empty_sector_uses_runs() {
        let payload = vec![0xE5; 256];
        let mut track = Track::new();
        track.add_sector_data(&payload, false, true).unwrap();

        let data = track.data();
        assert_eq!(data.len(), 1 + 3 + 2);
        assert_eq!(data[0], 0x05);
        let runs = decode_runs(&data[1..data.len() - 2]);
        assert_eq!(runs, vec![(0xE5, 256)]);
        let crc = crc16(crc16_add(CRC_SEED, 0xFB), &payload);
        assert_eq!(&data[data.len() - 2..], &crc.to_be_bytes());
    }

    #[test]
    fn test_sector_data_large_sector() {
        // 8192 bytes is exactly 65536 bits
        let payload: Vec<u8> = (0..8192).map(|i| (i % 251) as u8).collect();
        let mut track = Track::new();
        track.add_sector_data(&payload, false, true).unwrap();

        let data = track.data();
        assert_eq!(&data[..4], &[0x05, 0x0D, 0x00, 0x00]);
        assert_eq!(data.len(), 4 + 8192 + 2);
    }

    #[test]
    fn test_sector_data_just_below_large() {
        let payload = vec![0x11; 8191];
        let mut track = Track::new();
        track.add_sector_data(&payload, false, true).unwrap();
        // 8191 * 8 = 65528 = 0xFFF8
        assert_eq!(&track.data()[..4], &[0x05, 0x0C, 0xFF, 0xF8]);
    }

    #[test]
    fn test_sector_data_largest_literal() {
        // 16383 * 8 - 65536 = 65528
        let payload = vec![0x11; 16383];
        let mut track = Track::new();
        track.add_sector_data(&payload, false, true).unwrap();
        assert_eq!(&track.data()[..4], &[0x05, 0x0D, 0xFF, 0xF8]);
        assert_eq!(track.encoded_len(), 4 + 16383 + 2);
    }

    #[test]
    fn test_sector_data_too_large() {
        let mut track = Track::new();
        track.add_gap_and_sync(16);
        let err = track.add_sector_data(&[0x11; 16384], false, true).unwrap_err();
        assert!(matches!(err, FdiError::SectorTooLarge(16384)));
        // Nothing was added
        assert_eq!(track.encoded_len(), 6);
    }

    #[test]
    fn test_sector_data_large_empty_sector() {
        let mut track = Track::new();
        track.add_sector_data(&[0xE5; 32768], false, true).unwrap();
        let data = track.data();
        let runs = decode_runs(&data[1..data.len() - 2]);
        assert_eq!(runs.iter().map(|&(_, run)| run).sum::<usize>(), 32768);
    }

    #[test]
    fn test_gap4_counts_encoded_bytes() {
        let mut track = Track::new();
        track.add_gap_and_sync(16);
        track.add_gap4();
        // GAP#1 and sync take 6 encoded bytes
        assert_eq!(padding_after(&track, 6), 3119);
    }

    #[test]
    fn test_gap4_fills_track() {
        let mut track = Track::new();
        track.add_gap_and_sync(16);
        track.add_sector_header(0, 0, 0, 1);
        track.add_gap_and_sync(11);
        track.add_sector_data(&[0x42; 256], false, true).unwrap();
        let before = track.encoded_len();

        track.add_gap4();

        assert_eq!(padding_after(&track, before), 3125 - before);
    }

    #[test]
    fn test_gap4_on_full_track_adds_nothing() {
        let mut track = Track::with_capacity(100);
        track.add_sector_data(&[0x42; 128], false, true).unwrap();
        let len = track.encoded_len();
        track.add_gap4();
        assert_eq!(track.encoded_len(), len);
    }

    proptest! {
        #[test]
        fn gap4_pads_remaining_capacity(
            capacity in 0usize..400,
            gaps in prop::collection::vec(1u8..=255, 0..40),
        ) {
            let mut track = Track::with_capacity(capacity);
            for gap in gaps {
                track.add_gap_and_sync(gap);
            }
            let before = track.encoded_len();
            track.add_gap4();
            prop_assert_eq!(padding_after(&track, before), capacity.saturating_sub(before));
        }
    }
}
