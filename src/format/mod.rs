/// FDI/FSD format constants and encoding configuration

/// Format constants
pub mod constants;
/// Gap configuration
pub mod gaps;

pub use constants::*;
pub use gaps::GapConfig;
