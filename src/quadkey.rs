use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_ZOOM_LEVEL;
use crate::errors::{QuadKeyError, Result};
use crate::tile::Tile;

/// Hierarchical tile identifier: one base-4 digit per zoom level, most
/// significant level first.
///
/// Digit `d` at level `i` carries bit `i` of the tile column in `d & 1` and
/// bit `i` of the tile row in `d & 2`. A parent's key is a prefix of each
/// of its children's keys. A `QuadKey` value is always well formed; the only
/// way to build one from text is [`QuadKey::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct QuadKey(String);

/// Encodes a tile as a quadkey of exactly `zoom_level` digits. Bits of the
/// coordinates above `zoom_level` are ignored and zoom levels deeper than
/// [`MAX_ZOOM_LEVEL`] are clipped.
pub fn tile_xy_to_quad_key(tile_x: u32, tile_y: u32, zoom_level: u8) -> QuadKey {
    let zoom_level = zoom_level.min(MAX_ZOOM_LEVEL);
    let mut quad_key = String::with_capacity(zoom_level as usize);
    for i in (1..=zoom_level).rev() {
        let mask = 1u32 << (i - 1);
        let mut digit = b'0';
        if tile_x & mask != 0 {
            digit += 1;
        }
        if tile_y & mask != 0 {
            digit += 2;
        }
        quad_key.push(digit as char);
    }
    QuadKey(quad_key)
}

/// Decodes a quadkey string. The zoom level is the string length.
///
/// Any character outside `0..=3` fails, as does a key deeper than
/// [`MAX_ZOOM_LEVEL`]. The empty string is the single root tile.
pub fn quad_key_to_tile_xy(quad_key: &str) -> Result<Tile> {
    let mut digits = Vec::with_capacity(quad_key.len());
    for (position, digit) in quad_key.chars().enumerate() {
        match digit.to_digit(4) {
            Some(value) => digits.push(value),
            None => {
                debug!("Rejected quadkey {:?}: bad digit at {}", quad_key, position);
                return Err(QuadKeyError::InvalidDigit { digit, position });
            }
        }
    }
    if digits.len() > MAX_ZOOM_LEVEL as usize {
        debug!("Rejected quadkey of length {}", digits.len());
        return Err(QuadKeyError::too_long(digits.len()));
    }

    let zoom_level = digits.len();
    let mut tile_x = 0u32;
    let mut tile_y = 0u32;
    for (i, value) in digits.into_iter().enumerate() {
        let mask = 1u32 << (zoom_level - 1 - i);
        if value & 1 != 0 {
            tile_x |= mask;
        }
        if value & 2 != 0 {
            tile_y |= mask;
        }
    }

    Ok(Tile::new(tile_x, tile_y, zoom_level as u8))
}

impl QuadKey {
    pub fn parse(quad_key: &str) -> Result<Self> {
        quad_key_to_tile_xy(quad_key)?;
        Ok(QuadKey(quad_key.to_owned()))
    }

    pub fn from_tile_xy(tile_x: u32, tile_y: u32, zoom_level: u8) -> Self {
        tile_xy_to_quad_key(tile_x, tile_y, zoom_level)
    }

    pub fn to_tile(&self) -> Tile {
        let zoom_level = self.zoom_level();
        let mut tile_x = 0u32;
        let mut tile_y = 0u32;
        for (i, digit) in self.0.bytes().enumerate() {
            let mask = 1u32 << (zoom_level as usize - 1 - i);
            let value = digit - b'0';
            if value & 1 != 0 {
                tile_x |= mask;
            }
            if value & 2 != 0 {
                tile_y |= mask;
            }
        }
        Tile::new(tile_x, tile_y, zoom_level)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn zoom_level(&self) -> u8 {
        self.0.len() as u8
    }

    /// The enclosing tile one level up, or `None` for the root.
    pub fn parent(&self) -> Option<QuadKey> {
        if self.0.is_empty() {
            return None;
        }
        Some(QuadKey(self.0[..self.0.len() - 1].to_owned()))
    }

    /// The four tiles one level down, in digit order. Empty at the deepest
    /// supported zoom level.
    pub fn children(&self) -> Vec<QuadKey> {
        if self.zoom_level() >= MAX_ZOOM_LEVEL {
            return Vec::new();
        }
        ['0', '1', '2', '3']
            .iter()
            .map(|digit| {
                let mut child = self.0.clone();
                child.push(*digit);
                QuadKey(child)
            })
            .collect()
    }

    /// Whether `other` lies inside this tile at some deeper zoom level.
    pub fn is_ancestor_of(&self, other: &QuadKey) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for QuadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuadKey {
    type Err = QuadKeyError;

    fn from_str(s: &str) -> Result<Self> {
        QuadKey::parse(s)
    }
}

impl TryFrom<String> for QuadKey {
    type Error = QuadKeyError;

    fn try_from(value: String) -> Result<Self> {
        quad_key_to_tile_xy(&value)?;
        Ok(QuadKey(value))
    }
}

impl From<QuadKey> for String {
    fn from(quad_key: QuadKey) -> Self {
        quad_key.0
    }
}

impl AsRef<str> for QuadKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for QuadKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QuadKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_keys() {
        assert_eq!(tile_xy_to_quad_key(3, 5, 3), "213");
        assert_eq!(tile_xy_to_quad_key(0, 0, 0), "");
        assert_eq!(tile_xy_to_quad_key(0, 0, 4), "0000");
    }

    #[test]
    fn test_encode_clips_zoom() {
        let key = tile_xy_to_quad_key(0, 0, 200);
        assert_eq!(key.zoom_level(), MAX_ZOOM_LEVEL);
    }

    #[test]
    fn test_decode_reports_first_bad_digit() {
        assert_eq!(
            quad_key_to_tile_xy("01x4"),
            Err(QuadKeyError::InvalidDigit {
                digit: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn test_to_tile_matches_decode() {
        let key = QuadKey::parse("1202102332221212").unwrap();
        assert_eq!(key.to_tile(), quad_key_to_tile_xy(key.as_str()).unwrap());
    }

    #[test]
    fn test_parent_of_root() {
        let root = QuadKey::parse("").unwrap();
        assert_eq!(root.parent(), None);
        assert_eq!(root.children().len(), 4);
    }
}
