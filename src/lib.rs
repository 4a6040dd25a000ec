/*!
# fsd2fdi

Convert BBC Micro FSD sector dumps into FDI 2.0 disk images holding FM track streams.

## Features

- Read FSD dumps, including unreadable, unformatted, deleted data and CRC error sectors
- Encode each track as an FM descriptor stream with gaps, sync fields, address marks and CRCs
- Compress gaps and freshly formatted sectors with run-length blocks
- Write the FDI header, track descriptor table and page-aligned track data

## Quick Start

```rust,no_run
use fsd2fdi::{convert, FsdImage, GapConfig};

let fsd = FsdImage::open("elite.fsd")?;
let fdi = convert(&fsd, &GapConfig::acorn_dfs())?;
fdi.save("elite.fdi")?;
# Ok::<(), fsd2fdi::FdiError>(())
```

Tracks can also be encoded by hand:

```rust
use fsd2fdi::FdiImage;

let mut image = FdiImage::new();
let track = image.add_track();
track.add_gap_and_sync(16);
track.add_sector_header(0, 0, 0, 1);
track.add_gap_and_sync(11);
track.add_sector_data(&[0xE5; 256], false, true)?;
track.add_gap4();

let mut out: Vec<u8> = Vec::new();
image.write(&mut out)?;
assert_eq!(out.len(), 512 + 256);
# Ok::<(), fsd2fdi::FdiError>(())
```

## Modules

- `crc`: CRC-CCITT as used by the disk controller
- `rle`: Run-length blocks
- `image`: FDI image, header and track builder
- `fsd`: FSD dump data structures
- `io`: FSD reading and FDI writing
- `convert`: FSD to FDI conversion
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// FSD to FDI conversion
pub mod convert;
/// CRC-CCITT as used by the disk controller
pub mod crc;
/// Error types and Result alias
pub mod error;
/// FDI/FSD format constants and gap configuration
pub mod format;
/// FSD dump data structures
pub mod fsd;
/// FDI image data structures (FdiImage, FdiHeader, Track)
pub mod image;
/// I/O operations for reading FSD and writing FDI files
pub mod io;
/// Run-length blocks for the track stream
pub mod rle;

// Re-export common types
pub use convert::{convert, convert_file, derive_output_path};
pub use error::{FdiError, Result};
pub use format::GapConfig;
pub use fsd::{CreationData, FsdImage, FsdSector, FsdTrack};
pub use image::{FdiHeader, FdiHeaderBuilder, FdiImage, Track};
