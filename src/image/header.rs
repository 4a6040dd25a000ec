/// FDI file header

use crate::format::constants::*;

/// Fixed 152 byte header at the start of every FDI file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdiHeader {
    /// Free text comment, truncated to 80 bytes when written
    pub comment: Vec<u8>,
    /// Format version (major, minor)
    pub version: (u8, u8),
    /// Index of the last track in the image
    pub last_track: u16,
    /// Index of the last head
    pub last_head: u8,
    /// Disk type (1 = 5.25")
    pub disk_type: u8,
    /// Rotation speed field
    pub rotation_speed: u8,
    /// Flags (write protection, index synchronization)
    pub flags: u8,
    /// Track density (0 = 48 tpi)
    pub track_density: u8,
    /// Head width (2 = 96 tpi)
    pub head_width: u8,
    /// Reserved bytes
    pub reserved: [u8; 2],
}

impl FdiHeader {
    /// Create a builder starting from the format defaults
    pub fn builder() -> FdiHeaderBuilder {
        FdiHeaderBuilder::new()
    }

    /// Copy of this header recording `count` tracks
    pub fn with_track_count(&self, count: usize) -> Self {
        Self {
            last_track: count.saturating_sub(1) as u16,
            ..self.clone()
        }
    }

    /// Serialize to the on-disk layout
    pub fn to_bytes(&self) -> [u8; FDI_HEADER_SIZE] {
        let mut out = [0u8; FDI_HEADER_SIZE];
        let mut pos = 0;

        let mut put = |bytes: &[u8]| {
            out[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        };

        put(FDI_SIGNATURE);

        let mut creator = [b' '; FDI_CREATOR_SIZE];
        let creator_len = FDI_CREATOR.len().min(FDI_CREATOR_SIZE);
        creator[..creator_len].copy_from_slice(&FDI_CREATOR[..creator_len]);
        put(&creator);
        put(b"\r\n");

        let mut comment = [FDI_EOF_MARKER; FDI_COMMENT_SIZE];
        let comment_len = self.comment.len().min(FDI_COMMENT_SIZE);
        comment[..comment_len].copy_from_slice(&self.comment[..comment_len]);
        put(&comment);
        put(&[FDI_EOF_MARKER]);

        let [last_track_hi, last_track_lo] = self.last_track.to_be_bytes();
        put(&[
            self.version.0,
            self.version.1,
            last_track_hi,
            last_track_lo,
            self.last_head,
            self.disk_type,
            self.rotation_speed,
            self.flags,
            self.track_density,
            self.head_width,
            self.reserved[0],
            self.reserved[1],
        ]);

        out
    }
}

impl Default for FdiHeader {
    fn default() -> Self {
        FdiHeaderBuilder::new().build()
    }
}

/// Builder for [`FdiHeader`]
#[derive(Debug, Clone)]
pub struct FdiHeaderBuilder {
    header: FdiHeader,
}

impl FdiHeaderBuilder {
    /// Create a new builder with the values Disk2FDI writes for a 5.25" disk
    pub fn new() -> Self {
        Self {
            header: FdiHeader {
                comment: Vec::new(),
                version: FDI_VERSION,
                last_track: 0,
                last_head: 0,
                disk_type: FDI_DISK_TYPE_525,
                rotation_speed: FDI_ROTATION_SPEED,
                flags: 0,
                track_density: FDI_TPI_48,
                head_width: FDI_HEAD_WIDTH_96,
                reserved: [0, 0],
            },
        }
    }

    /// Set the comment text
    pub fn comment<S: AsRef<[u8]>>(mut self, comment: S) -> Self {
        self.header.comment = comment.as_ref().to_vec();
        self
    }

    /// Build the header
    pub fn build(self) -> FdiHeader {
        self.header
    }
}

impl Default for FdiHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
