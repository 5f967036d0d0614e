use thiserror::Error;

use crate::constants::MAX_ZOOM_LEVEL;

/// A malformed quadkey string.
///
/// Quadkeys are used as cache and storage keys downstream, so decoding never
/// guesses: any bad input is rejected instead of being mapped to some other
/// valid tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadKeyError {
    #[error("invalid quadkey digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("quadkey of length {length} exceeds the maximum zoom level {max}")]
    TooLong { length: usize, max: usize },
}

impl QuadKeyError {
    pub(crate) fn too_long(length: usize) -> Self {
        QuadKeyError::TooLong {
            length,
            max: MAX_ZOOM_LEVEL as usize,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuadKeyError>;
