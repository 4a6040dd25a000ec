/// Run-length blocks for the FDI track stream

use crate::format::descriptor;

/// Longest run a single block can describe
pub const MAX_RUN: usize = 256;

/// Append a run of `count` copies of `value` as RLE blocks.
///
/// Each block covers at most 256 bytes; a count byte of 0 stands for 256.
/// Nothing is written for an empty run.
pub fn push_run(out: &mut Vec<u8>, value: u8, count: usize) {
    let mut remaining = count;
    while remaining > 0 {
        let run = remaining.min(MAX_RUN);
        out.push(descriptor::RLE_DECODED_DATA);
        out.push((run % MAX_RUN) as u8);
        out.push(value);
        remaining -= run;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Size of one encoded block: tag, count, value
    const BLOCK_SIZE: usize = 3;

    /// Expand a stream made only of RLE blocks into (value, run) pairs
    pub(crate) fn decode_runs(stream: &[u8]) -> Vec<(u8, usize)> {
        assert_eq!(stream.len() % BLOCK_SIZE, 0, "stream is not whole blocks");
        stream
            .chunks(BLOCK_SIZE)
            .map(|block| {
                assert_eq!(block[0], descriptor::RLE_DECODED_DATA);
                let run = if block[1] == 0 { MAX_RUN } else { block[1] as usize };
                (block[2], run)
            })
            .collect()
    }

    #[test]
    fn test_empty_run() {
        let mut out = Vec::new();
        push_run(&mut out, 0xFF, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_of_256_uses_zero_count() {
        let mut out = Vec::new();
        push_run(&mut out, 0xE5, 256);
        assert_eq!(out, vec![descriptor::RLE_DECODED_DATA, 0x00, 0xE5]);
    }

    #[test]
    fn test_run_of_257_splits() {
        let mut out = Vec::new();
        push_run(&mut out, 0xFF, 257);
        assert_eq!(
            out,
            vec![
                descriptor::RLE_DECODED_DATA, 0x00, 0xFF,
                descriptor::RLE_DECODED_DATA, 0x01, 0xFF,
            ]
        );
    }

    #[test]
    fn test_sync_field() {
        let mut out = Vec::new();
        push_run(&mut out, 0x00, 6);
        assert_eq!(out, vec![descriptor::RLE_DECODED_DATA, 6, 0x00]);
    }

    #[test]
    fn test_expands_every_length_up_to_1000() {
        for n in 0..=1000 {
            let mut out = Vec::new();
            push_run(&mut out, 0x4E, n);
            let runs = decode_runs(&out);
            assert_eq!(runs.iter().map(|&(_, run)| run).sum::<usize>(), n);
            assert!(runs.iter().all(|&(value, _)| value == 0x4E));
            assert_eq!(out.len(), n.div_ceil(MAX_RUN) * BLOCK_SIZE);
        }
    }

    proptest! {
        #[test]
        fn blocks_never_exceed_max_run(value in any::<u8>(), n in 0usize..5000) {
            let mut out = Vec::new();
            push_run(&mut out, value, n);
            let runs = decode_runs(&out);
            prop_assert_eq!(runs.len(), n.div_ceil(MAX_RUN));
            prop_assert!(runs.iter().all(|&(_, run)| (1..=MAX_RUN).contains(&run)));
        }
    }
}
