/// Gap layout used when encoding tracks

/// Gap sizes (in bytes of 0xFF) written around each sector.
///
/// The encoder does not work these out itself; the caller chooses them per disk type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapConfig {
    /// GAP#1, after the index hole
    pub gap1: u8,
    /// GAP#2, between a sector ID field and its data field
    pub gap2: u8,
    /// GAP#3, between sectors
    pub gap3: u8,
}

impl GapConfig {
    /// Create a new gap configuration
    pub fn new(gap1: u8, gap2: u8, gap3: u8) -> Self {
        Self { gap1, gap2, gap3 }
    }

    /// Recommended gaps for a regular Acorn DFS disc (10 x 256 byte sectors)
    pub fn acorn_dfs() -> Self {
        Self {
            gap1: 16,
            gap2: 11,
            gap3: 21,
        }
    }

    /// Set GAP#1
    pub fn gap1(mut self, gap1: u8) -> Self {
        self.gap1 = gap1;
        self
    }

    /// Set GAP#3
    pub fn gap3(mut self, gap3: u8) -> Self {
        self.gap3 = gap3;
        self
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self::acorn_dfs()
    }
}
